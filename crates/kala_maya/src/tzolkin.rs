//! Tzolk'in (260-day cycle) position.
//!
//! The cycle pairs a number 1-13 with one of 20 day names; both advance
//! daily, realigning every 260 days. The offsets anchor day 0 of the
//! Long Count at 4 Ajaw.

use std::fmt;

use serde::Serialize;

/// The 20 Tzolk'in day names in cycle order.
pub const TZOLKIN_NAMES: [&str; 20] = [
    "Imix", "Ik'", "Ak'b'al", "K'an", "Chikchan", "Kimi", "Manik'", "Lamat", "Muluk", "Ok",
    "Chuwen", "Eb'", "B'en", "Ix", "Men", "Kib'", "Kab'an", "Etz'nab'", "Kawak", "Ajaw",
];

/// Tzolk'in cycle position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TzolkinDate {
    /// Cycle number, 1..=13.
    pub number: u8,
    /// 0-based index into [`TZOLKIN_NAMES`].
    pub name_index: u8,
}

impl TzolkinDate {
    /// Day name.
    pub fn name(&self) -> &'static str {
        TZOLKIN_NAMES[self.name_index as usize]
    }
}

impl fmt::Display for TzolkinDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.name())
    }
}

/// Tzolk'in position of a day count. Total over negative day counts.
pub fn tzolkin_from_day_count(day_count: i64) -> TzolkinDate {
    let number = (day_count + 3).rem_euclid(13) as u8 + 1;
    let name_index = (day_count + 19).rem_euclid(20) as u8;
    TzolkinDate { number, name_index }
}
