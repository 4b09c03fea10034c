//! Julian Day conversion.
//!
//! The Julian Day of a UTC instant is derived from the Unix timestamp:
//! JD 2440587.5 corresponds to 1970-01-01T00:00:00Z. A calendar-based
//! conversion is provided as an independent cross-check.

use chrono::{DateTime, Utc};

/// Julian Day of the Unix epoch, 1970-01-01T00:00:00Z.
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Julian Day of a UTC instant.
pub fn julian_day(utc: DateTime<Utc>) -> f64 {
    let seconds = utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1e-9;
    JD_UNIX_EPOCH + seconds / 86_400.0
}

/// Integral Julian Day Number (floor of the Julian Day) of a UTC instant.
pub fn julian_day_number(utc: DateTime<Utc>) -> i64 {
    julian_day(utc).floor() as i64
}

/// Julian Day from a proleptic Gregorian calendar date.
///
/// `day` carries the time of day as a fraction. Valid for the Gregorian
/// calendar; standard astronomical formula (Meeus, ch. 7).
pub fn civil_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y as f64 + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day + b
        - 1524.5
}
