//! Julian-date plumbing for the checkout tooling around the engine.
//!
//! Only the numeric date conversions live here; sidereal time and every
//! other ephemeris-backed quantity belong to the astrometry engine.

use chrono::{DateTime, TimeZone, Utc};

/// Julian date of the Unix epoch (1970-01-01T00:00:00 UTC)
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// TT - UT1 in seconds: 34 s of accumulated leap seconds,
/// the fixed 32.184 s TT-TAI offset and the DUT1 correction
pub const DELTA_T: f64 = 34.0 + 32.184 + 0.477_677;

/// UT1 - UTC expressed in days
pub const DELTA_UTC_UT1: f64 = -0.477_677 / 86_400.0;

const MILLIS_IN_DAY: f64 = 86_400_000.0;

/// The current Julian date
pub fn jd_now() -> f64 {
    utc_to_jd(Utc::now())
}

/// Convert a UTC timestamp to a Julian date
pub fn utc_to_jd(utc: DateTime<Utc>) -> f64 {
    utc.timestamp_millis() as f64 / MILLIS_IN_DAY + JD_UNIX_EPOCH
}

/// Convert a Julian date to a UTC timestamp
/// (`None` when the date is out of the representable range)
pub fn jd_to_utc(jd: f64) -> Option<DateTime<Utc>> {
    // round to the nearest millisecond to absorb the floating-point error
    // of the day-scale arithmetic
    let millis = ((jd - JD_UNIX_EPOCH) * MILLIS_IN_DAY).round();
    Utc.timestamp_millis_opt(millis as i64).single()
}
