//! Pure fixed-cycle arithmetic for the Maya calendar.
//!
//! This crate provides:
//! - Long Count decomposition of a day count (mixed radix 20-20-18-20)
//! - Tzolk'in (260-day) and Haab' (365-day) cycle positions
//! - The GMT correlation tying day 0 to the Julian Day scale
//! - Closed-form Calendar Round recurrence (18,980 days)
//!
//! All functions are total over negative day counts: division and modulo
//! are floored, so pre-epoch dates decompose consistently.

pub mod calendar_round;
pub mod haab;
pub mod long_count;
pub mod tzolkin;

pub use calendar_round::{CALENDAR_ROUND_DAYS, calendar_round_day_counts};
pub use haab::{HAAB_MONTHS, HaabDate, haab_from_day_count};
pub use long_count::{
    GMT_CORRELATION, LongCount, day_count_from_jd, day_count_from_long_count,
    long_count_from_day_count,
};
pub use tzolkin::{TZOLKIN_NAMES, TzolkinDate, tzolkin_from_day_count};
