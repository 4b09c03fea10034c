//! Calendar Round recurrence.
//!
//! The Tzolk'in (260 days) and Haab' (365 days) realign every
//! lcm(260, 365) = 18,980 days, about 52 years. Because both periods are
//! fixed, future coincidences are a closed-form arithmetic progression;
//! no search is involved, in contrast to the lunisolar recurrence.

use crate::haab::haab_from_day_count;
use crate::tzolkin::tzolkin_from_day_count;

/// One Calendar Round: lcm(260, 365) days.
pub const CALENDAR_ROUND_DAYS: i64 = 18_980;

/// Day counts of the next `count` Calendar Round returns of `origin`.
///
/// Entry `k` (1-based) is exactly `origin + k * 18980`.
pub fn calendar_round_day_counts(origin: i64, count: usize) -> Vec<i64> {
    (1..=count as i64)
        .map(|k| origin + k * CALENDAR_ROUND_DAYS)
        .collect()
}
