//! Karana (half-tithi) classification.
//!
//! The 360 degrees of elongation divide into 60 karanas of 6 degrees.
//! The traditional cycle is fixed at both ends: Kimstughna opens the
//! month, the seven movable karanas repeat eight times, and Shakuni,
//! Chatushpada, Naga close it.

use serde::Serialize;

use crate::util::normalize_360;

/// Span of one karana: 6 degrees of elongation.
pub const KARANA_SEGMENT_DEG: f64 = 6.0;

const MOVABLE_KARANAS: [&str; 7] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Garaja", "Vanija", "Vishti",
];

/// Karana classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KaranaPosition {
    /// 0-based karana sequence index within the month (0..=59).
    pub index: u8,
}

impl KaranaPosition {
    /// 1-based karana number within the month (1..=60).
    pub const fn number(&self) -> u8 {
        self.index + 1
    }

    /// Traditional karana name for this position in the cycle.
    pub fn name(&self) -> &'static str {
        match self.index {
            0 => "Kimstughna",
            57 => "Shakuni",
            58 => "Chatushpada",
            59 => "Naga",
            i => MOVABLE_KARANAS[((i - 1) % 7) as usize],
        }
    }
}

/// Classify the karana from the Moon-Sun elongation in degrees.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let elong = normalize_360(elongation_deg);
    KaranaPosition {
        index: ((elong / KARANA_SEGMENT_DEG) as u8).min(59),
    }
}
