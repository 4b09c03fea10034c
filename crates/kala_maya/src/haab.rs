//! Haab' (365-day cycle) position.
//!
//! Eighteen months of 20 days followed by the 5-day Wayeb'. The +348
//! offset anchors day 0 of the Long Count at 8 Kumk'u.

use std::fmt;

use serde::Serialize;

/// The 19 Haab' month names; the last (Wayeb') has only 5 days.
pub const HAAB_MONTHS: [&str; 19] = [
    "Pop", "Wo'", "Sip", "Zotz'", "Sek", "Xul", "Yaxk'in", "Mol", "Ch'en", "Yax", "Sak'", "Keh",
    "Mak", "K'ank'in", "Muwan", "Pax", "K'ayab'", "Kumk'u", "Wayeb'",
];

/// Index of the 5-day month.
const WAYEB: u8 = 18;

/// Haab' cycle position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HaabDate {
    /// Day within the month: [0, 20) for months 0-17, [0, 5) for Wayeb'.
    pub day: u8,
    /// 0-based index into [`HAAB_MONTHS`].
    pub month_index: u8,
}

impl HaabDate {
    /// Month name.
    pub fn month(&self) -> &'static str {
        HAAB_MONTHS[self.month_index as usize]
    }
}

impl fmt::Display for HaabDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.day, self.month())
    }
}

/// Haab' position of a day count. Total over negative day counts.
pub fn haab_from_day_count(day_count: i64) -> HaabDate {
    let d = (day_count + 348).rem_euclid(365);
    if d < 360 {
        HaabDate {
            day: (d % 20) as u8,
            month_index: (d / 20) as u8,
        }
    } else {
        HaabDate {
            day: (d - 360) as u8,
            month_index: WAYEB,
        }
    }
}
