pub(crate) const MINUTES_IN_WHOLE: u64 = 60;
pub(crate) const SECONDS_IN_MINUTE: u64 = 60;

pub(crate) const DEGREE_SIGN: char = '°';
pub(crate) const ARC_MINUTE_SIGN: char = '\'';
pub(crate) const ARC_SECOND_SIGN: char = '"';

pub(crate) const HOUR_SIGN: char = 'h';
pub(crate) const MINUTE_SIGN: char = 'm';
pub(crate) const SECOND_SIGN: char = 's';

// columns taken by the mandatory `MM SS`-with-separators tail,
// i.e. the least allowed value of the fixed (non-fractional) width
pub(crate) const MIN_PLAIN_WIDTH: usize = 7;
pub(crate) const MIN_SYMBOLIC_WIDTH: usize = 10;

// columns of the three separator glyphs in the symbolic notation
pub(crate) const SYMBOLIC_SIGNS_WIDTH: usize = 3;

// the `DD MM SS.SS` notation
pub(crate) const DEFAULT_WIDTH: usize = 13;
pub(crate) const DEFAULT_PRECISION: usize = 2;
