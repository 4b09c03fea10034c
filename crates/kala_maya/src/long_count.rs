//! Long Count decomposition.
//!
//! The Long Count is a mixed-radix day counter: 1 baktun = 20 katun,
//! 1 katun = 20 tun, 1 tun = 18 uinal, 1 uinal = 20 kin. Day 0 of the
//! count corresponds to JDN 584,283 under the Goodman-Martinez-Thompson
//! correlation.

use std::fmt;

use serde::Serialize;

/// GMT (Goodman-Martinez-Thompson) correlation: JDN of Long Count 0.0.0.0.0.
pub const GMT_CORRELATION: i64 = 584_283;

/// Days per baktun (20 * 20 * 18 * 20).
const BAKTUN_DAYS: i64 = 144_000;
/// Days per katun (20 * 18 * 20).
const KATUN_DAYS: i64 = 7_200;
/// Days per tun (18 * 20).
const TUN_DAYS: i64 = 360;
/// Days per uinal.
const UINAL_DAYS: i64 = 20;

/// Five-component Long Count value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LongCount {
    /// Unbounded most-significant component.
    pub baktun: i64,
    /// 0..20.
    pub katun: u8,
    /// 0..20.
    pub tun: u8,
    /// 0..18.
    pub uinal: u8,
    /// 0..20.
    pub kin: u8,
}

impl fmt::Display for LongCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.baktun, self.katun, self.tun, self.uinal, self.kin
        )
    }
}

/// Day count from a Julian Day under the GMT correlation.
pub fn day_count_from_jd(jd: f64) -> i64 {
    jd.floor() as i64 - GMT_CORRELATION
}

/// Decompose a day count into its Long Count components.
///
/// Floored division keeps the four bounded components in range for
/// negative day counts; only the baktun goes negative.
pub fn long_count_from_day_count(day_count: i64) -> LongCount {
    let baktun = day_count.div_euclid(BAKTUN_DAYS);
    let rem = day_count.rem_euclid(BAKTUN_DAYS);
    let katun = rem / KATUN_DAYS;
    let rem = rem % KATUN_DAYS;
    let tun = rem / TUN_DAYS;
    let rem = rem % TUN_DAYS;
    let uinal = rem / UINAL_DAYS;
    let kin = rem % UINAL_DAYS;
    LongCount {
        baktun,
        katun: katun as u8,
        tun: tun as u8,
        uinal: uinal as u8,
        kin: kin as u8,
    }
}

/// Recompose a Long Count into its day count. Inverse of
/// [`long_count_from_day_count`].
pub fn day_count_from_long_count(lc: &LongCount) -> i64 {
    (((lc.baktun * 20 + lc.katun as i64) * 20 + lc.tun as i64) * 18 + lc.uinal as i64) * 20
        + lc.kin as i64
}
