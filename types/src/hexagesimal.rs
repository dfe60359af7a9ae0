//! A wrapped `f64` angle with sexagesimal (base-60) textual notation.
//!
//! The value is either an angle in degrees (declination, latitude, azimuth)
//! or a time-like angle in hours (right ascension, sidereal time); the
//! caller keeps track of the unit, the notation machinery does not.
//!
//! Four notational variants are supported: plain space-separated fields,
//! symbolic `° ' "` separators, symbolic `h m s` separators, each with a
//! minimal total width and a seconds-field precision, in the manner of the
//! conventional field-width/precision formatting protocol.

use std::{fmt, str::FromStr};

use lazy_static::lazy_static;
use num_traits::ToPrimitive;
use regex::Regex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::utils::div_mod;

use self::consts::{
    ARC_MINUTE_SIGN, ARC_SECOND_SIGN, DEFAULT_PRECISION, DEFAULT_WIDTH, DEGREE_SIGN, HOUR_SIGN,
    MINUTES_IN_WHOLE, MINUTE_SIGN, MIN_PLAIN_WIDTH, MIN_SYMBOLIC_WIDTH, SECONDS_IN_MINUTE,
    SECOND_SIGN, SYMBOLIC_SIGNS_WIDTH,
};

mod consts;
mod errors;

pub use errors::{FormatError, ParseHexagesimalError};

/// Rendering parameters of the sexagesimal notation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Style {
    /// Use the symbolic separators instead of plain spaces
    pub alternate: bool,
    /// Switch the symbolic separator set from `° ' "` to `h m s`
    /// (only meaningful together with `alternate`)
    pub uppercase: bool,
    /// The minimal total width of the rendered value, left-padded with spaces
    pub width: usize,
    /// The number of fractional digits of the seconds field
    /// (0 renders the seconds as a whole number, without the decimal point)
    pub precision: usize,
}

impl Style {
    /// Plain space-separated notation: `DD MM SS[.ss]`
    pub const fn plain(width: usize, precision: usize) -> Self {
        Self {
            alternate: false,
            uppercase: false,
            width,
            precision,
        }
    }

    /// Symbolic degree notation: `DD° MM' SS[.ss]"`
    pub const fn dms(width: usize, precision: usize) -> Self {
        Self {
            alternate: true,
            uppercase: false,
            width,
            precision,
        }
    }

    /// Symbolic hour notation: `HHh MMm SS[.ss]s`
    pub const fn hms(width: usize, precision: usize) -> Self {
        Self {
            alternate: true,
            uppercase: true,
            width,
            precision,
        }
    }
}

impl Default for Style {
    /// The `DD MM SS.SS` notation
    fn default() -> Self {
        Self::plain(DEFAULT_WIDTH, DEFAULT_PRECISION)
    }
}

/// A finite double-precision angle convertible to and from
/// the sexagesimal notation.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hexagesimal(f64);

impl Hexagesimal {
    /// Wrap a raw angle value (degrees or hours, the caller keeps track)
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// The wrapped raw value
    pub const fn value(self) -> f64 {
        self.0
    }

    /// View the value as a time-like angle:
    /// its symbolic notation uses the `h m s` separators
    pub const fn as_hours(self) -> Hours {
        Hours(self)
    }

    /// Render the value with explicit notation parameters.
    ///
    /// When the whole part fits its allotted columns, the output is exactly
    /// `style.width` characters long; a wider whole part extends the output
    /// beyond the requested width instead of being truncated.
    ///
    /// # Errors
    /// - `WidthTooSmall`: the width cannot fit the mandatory separators and
    ///   digits of the selected notation
    /// - `NotFinite`: the value is NaN or infinite
    pub fn to_string_with(self, style: Style) -> Result<String, FormatError> {
        format_value(self.0, style)
    }
}

impl From<f64> for Hexagesimal {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Hexagesimal> for f64 {
    fn from(value: Hexagesimal) -> Self {
        value.0
    }
}

impl ToPrimitive for Hexagesimal {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

/// The display adapter produced by [`Hexagesimal::as_hours`]:
/// the alternate (`#`) notation renders `2h 42m 59.89s`
/// instead of `2° 42' 59.89"`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hours(Hexagesimal);

/// The formatter parameters map onto the notation directly:
/// `{:13.2}` is plain `DD MM SS.SS`, `{:#13.2}` switches to the symbolic
/// separators. Missing width/precision default to 13/2.
/// A width too small for the notation surfaces as `fmt::Error`.
impl fmt::Display for Hexagesimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = Style {
            alternate: f.alternate(),
            uppercase: false,
            width: f.width().unwrap_or(DEFAULT_WIDTH),
            precision: f.precision().unwrap_or(DEFAULT_PRECISION),
        };
        let rendered = format_value(self.0, style).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let style = Style {
            alternate: f.alternate(),
            uppercase: true,
            width: f.width().unwrap_or(DEFAULT_WIDTH),
            precision: f.precision().unwrap_or(DEFAULT_PRECISION),
        };
        let rendered = format_value(self.0.value(), style).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

fn format_value(value: f64, style: Style) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NotFinite);
    }

    let Style {
        alternate,
        uppercase,
        width,
        precision,
    } = style;

    // reserve the decimal point and the fractional digits of the seconds field
    let fixed_width = if precision == 0 {
        width
    } else {
        width
            .checked_sub(precision + 1)
            .ok_or(FormatError::WidthTooSmall(width))?
    };

    let least = if alternate {
        MIN_SYMBOLIC_WIDTH
    } else {
        MIN_PLAIN_WIDTH
    };
    if fixed_width < least {
        return Err(FormatError::WidthTooSmall(width));
    }

    let (whole, minutes, seconds) = split_with_carry(value.abs(), precision);
    // the sign belongs to the whole-part field only,
    // minutes and seconds stay unsigned magnitudes
    let whole = if value < 0.0 {
        format!("-{}", whole)
    } else {
        whole.to_string()
    };

    let sec_width = if precision == 0 { 2 } else { precision + 3 };
    let rendered = if alternate {
        let whole_width = fixed_width - SYMBOLIC_SIGNS_WIDTH - 6;
        let (whole_sign, min_sign, sec_sign) = if uppercase {
            (HOUR_SIGN, MINUTE_SIGN, SECOND_SIGN)
        } else {
            (DEGREE_SIGN, ARC_MINUTE_SIGN, ARC_SECOND_SIGN)
        };
        format!(
            "{:>ww$}{} {:02}{} {:0sw$.p$}{}",
            whole,
            whole_sign,
            minutes,
            min_sign,
            seconds,
            sec_sign,
            ww = whole_width,
            sw = sec_width,
            p = precision
        )
    } else {
        let whole_width = fixed_width - 6;
        format!(
            "{:>ww$} {:02} {:0sw$.p$}",
            whole,
            minutes,
            seconds,
            ww = whole_width,
            sw = sec_width,
            p = precision
        )
    };
    Ok(rendered)
}

/// The whole part and the minutes truncate toward zero; the seconds are
/// rounded at the display precision and the overflow carries up, so a
/// rendered seconds field never reads `60`.
fn split_with_carry(magnitude: f64, precision: usize) -> (u64, u64, f64) {
    let whole = magnitude.trunc();
    let minutes_real = (magnitude - whole) * 60.0;
    let minutes = minutes_real.trunc();
    let seconds_real = (minutes_real - minutes) * 60.0;

    let mut whole = whole as u64;
    let mut minutes = minutes as u64;
    let seconds = format!("{:.p$}", seconds_real, p = precision)
        .parse::<f64>()
        .expect("fixed-point rendering is a valid float literal");
    if seconds >= SECONDS_IN_MINUTE as f64 {
        let (extra, wrapped) = div_mod(minutes + 1, MINUTES_IN_WHOLE);
        minutes = wrapped;
        whole += extra;
        return (whole, minutes, 0.0);
    }
    (whole, minutes, seconds)
}

lazy_static! {
    // a field is a maximal run of characters outside the separator set:
    // space, tab, ':', ';', '°', the quote glyphs and the h/m/s letters
    static ref FIELDS: Regex =
        Regex::new(r#"[^ \t:;°'"hHmMsS]+"#).expect("field pattern is a valid regex");
}

impl FromStr for Hexagesimal {
    type Err = ParseHexagesimalError;

    /// Successive fields are the whole part, the minutes and the seconds,
    /// each parsed as a float on its own. The sign of the whole-part field
    /// applies to the entire reconstructed value, so `"-33 30"` reads as
    /// `-(33 + 30/60)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut magnitude = 0.0;
        let mut negative = false;
        let mut count = 0_u32;

        for field in FIELDS.find_iter(s) {
            let field: f64 = field.as_str().parse()?;
            match count {
                0 => {
                    negative = field.is_sign_negative();
                    magnitude = field.abs();
                }
                1 => magnitude += field / 60.0,
                2 => magnitude += field / 3600.0,
                _ => return Err(ParseHexagesimalError::TooManyFields),
            }
            count += 1;
        }

        if count == 0 {
            return Err(ParseHexagesimalError::EmptyString);
        }

        Ok(Self(if negative { -magnitude } else { magnitude }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_notation() {
        let dec = Hexagesimal::new(48.1525);
        assert_eq!(dec.to_string(), "  48 09 09.00");
    }

    #[test]
    fn plain_literal() {
        let rendered = Hexagesimal::new(48.1525)
            .to_string_with(Style::plain(13, 2))
            .unwrap();
        assert_eq!(rendered, "  48 09 09.00");
        assert_eq!(rendered.len(), 13);
    }

    #[test]
    fn plain_zero() {
        let rendered = Hexagesimal::new(0.0)
            .to_string_with(Style::plain(13, 2))
            .unwrap();
        assert_eq!(rendered, "   0 00 00.00");
    }

    #[test]
    fn plain_zero_without_fraction() {
        let rendered = Hexagesimal::new(0.0)
            .to_string_with(Style::plain(13, 0))
            .unwrap();
        assert_eq!(rendered, "      0 00 00");
    }

    #[test]
    fn precision_zero_has_no_decimal_point() {
        let rendered = Hexagesimal::new(12.5)
            .to_string_with(Style::plain(13, 0))
            .unwrap();
        assert_eq!(rendered, "     12 30 00");
        assert!(!rendered.contains('.'));
    }

    #[test]
    fn negative_sign_on_whole_part_only() {
        let rendered = Hexagesimal::new(-33.5)
            .to_string_with(Style::plain(13, 0))
            .unwrap();
        assert_eq!(rendered, "    -33 30 00");
    }

    #[test]
    fn negative_fraction_keeps_the_sign() {
        let rendered = Hexagesimal::new(-0.5)
            .to_string_with(Style::plain(13, 0))
            .unwrap();
        assert_eq!(rendered, "     -0 30 00");
    }

    #[test]
    fn symbolic_degrees() {
        let rendered = Hexagesimal::new(48.1525)
            .to_string_with(Style::dms(13, 2))
            .unwrap();
        assert_eq!(rendered, "48° 09' 09.00\"");
    }

    #[test]
    fn symbolic_hours() {
        let rendered = Hexagesimal::new(13.1761)
            .to_string_with(Style::hms(13, 2))
            .unwrap();
        assert_eq!(rendered, "13h 10m 33.96s");
    }

    #[test]
    fn symbolic_exact_width() {
        let rendered = Hexagesimal::new(5.25)
            .to_string_with(Style::dms(10, 0))
            .unwrap();
        assert_eq!(rendered, "5° 15' 00\"");
        assert_eq!(rendered.chars().count(), 10);
    }

    #[test]
    fn wide_whole_part_extends_beyond_width() {
        let rendered = Hexagesimal::new(12345.0)
            .to_string_with(Style::plain(13, 2))
            .unwrap();
        assert_eq!(rendered, "12345 00 00.00");
        assert_eq!(rendered.len(), 14);
    }

    #[test]
    fn width_too_small_plain() {
        let err = Hexagesimal::new(1.0)
            .to_string_with(Style::plain(5, 0))
            .unwrap_err();
        assert_eq!(err, FormatError::WidthTooSmall(5));
    }

    #[test]
    fn width_too_small_after_precision_reserve() {
        // 9 - 2 - 1 = 6 fixed columns, one short of the plain minimum
        let err = Hexagesimal::new(1.0)
            .to_string_with(Style::plain(9, 2))
            .unwrap_err();
        assert_eq!(err, FormatError::WidthTooSmall(9));
    }

    #[test]
    fn width_too_small_symbolic() {
        // 12 - 2 - 1 = 9 fixed columns, the symbolic minimum is 10
        let err = Hexagesimal::new(1.0)
            .to_string_with(Style::dms(12, 2))
            .unwrap_err();
        assert_eq!(err, FormatError::WidthTooSmall(12));
    }

    #[test]
    fn width_smaller_than_the_fraction() {
        let err = Hexagesimal::new(1.0)
            .to_string_with(Style::plain(2, 5))
            .unwrap_err();
        assert_eq!(err, FormatError::WidthTooSmall(2));
    }

    #[test]
    fn nan_is_rejected() {
        let err = Hexagesimal::new(f64::NAN)
            .to_string_with(Style::default())
            .unwrap_err();
        assert_eq!(err, FormatError::NotFinite);
    }

    #[test]
    fn infinity_is_rejected() {
        let err = Hexagesimal::new(f64::INFINITY)
            .to_string_with(Style::default())
            .unwrap_err();
        assert_eq!(err, FormatError::NotFinite);
    }

    #[test]
    fn seconds_rounding_carries_into_minutes_and_whole() {
        let rendered = Hexagesimal::new(35.999_999_9)
            .to_string_with(Style::plain(13, 2))
            .unwrap();
        assert_eq!(rendered, "  36 00 00.00");
    }

    #[test]
    fn seconds_rounding_carries_at_zero_precision() {
        let rendered = Hexagesimal::new(45.9999)
            .to_string_with(Style::plain(13, 0))
            .unwrap();
        assert_eq!(rendered, "     46 00 00");
    }

    #[test]
    fn no_carry_below_the_rounding_threshold() {
        let rendered = Hexagesimal::new(45.9999)
            .to_string_with(Style::plain(13, 2))
            .unwrap();
        assert_eq!(rendered, "  45 59 59.64");
    }

    #[test]
    fn display_width_and_precision() {
        let dec = Hexagesimal::new(48.1525);
        assert_eq!(format!("{:13.0}", dec), "     48 09 09");
        assert_eq!(format!("{:15.3}", dec), "   48 09 09.000");
    }

    #[test]
    fn display_alternate() {
        let dec = Hexagesimal::new(48.1525);
        assert_eq!(format!("{:#}", dec), "48° 09' 09.00\"");
    }

    #[test]
    fn display_hours() {
        let ra = Hexagesimal::new(2.7163);
        assert_eq!(format!("{:#16.5}", ra.as_hours()), "2h 42m 58.68000s");
    }

    #[test]
    fn display_hours_plain_falls_back_to_spaces() {
        let ra = Hexagesimal::new(2.7163);
        assert_eq!(format!("{:13.2}", ra.as_hours()), "   2 42 58.68");
    }

    #[test]
    fn display_of_invalid_width_is_an_error() {
        use std::fmt::Write as _;

        let mut out = String::new();
        assert!(write!(out, "{:5.0}", Hexagesimal::new(1.0)).is_err());
    }

    #[test]
    fn numeric_conversions() {
        let h = Hexagesimal::new(48.9);
        assert_eq!(h.to_i64(), Some(48));
        assert_eq!(h.to_u64(), Some(48));
        assert_eq!(h.to_f64(), Some(48.9));

        let h = Hexagesimal::from(-12.5);
        assert_eq!(h.to_i64(), Some(-12));
        assert_eq!(h.to_u64(), None);
        assert_eq!(f64::from(h), -12.5);
    }
}
