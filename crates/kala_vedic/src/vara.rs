//! Vara (weekday) enumeration.
//!
//! The Vedic day runs sunrise to sunrise; a moment before sunrise still
//! belongs to the previous vara. That shift is the caller's concern; the
//! functions here classify a plain weekday index or a Julian Day.

use serde::Serialize;

/// The 7 varas, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Vara {
    Ravivara,
    Somavara,
    Mangalavara,
    Budhavara,
    Guruvara,
    Shukravara,
    Shanivara,
}

/// All 7 varas in order (0 = Ravivara/Sunday .. 6 = Shanivara/Saturday).
pub const ALL_VARAS: [Vara; 7] = [
    Vara::Ravivara,
    Vara::Somavara,
    Vara::Mangalavara,
    Vara::Budhavara,
    Vara::Guruvara,
    Vara::Shukravara,
    Vara::Shanivara,
];

const ALL_VARA_NAMES: [&str; 7] = [
    "Ravivara",
    "Somavara",
    "Mangalavara",
    "Budhavara",
    "Guruvara",
    "Shukravara",
    "Shanivara",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl Vara {
    /// Transliterated name of the vara.
    pub fn name(self) -> &'static str {
        ALL_VARA_NAMES[self.index() as usize]
    }

    /// English weekday name.
    pub fn weekday_name(self) -> &'static str {
        WEEKDAY_NAMES[self.index() as usize]
    }

    /// 0-based index (Ravivara=0 .. Shanivara=6).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Vara from a days-from-Sunday index. Indices >= 7 wrap.
pub fn vara_from_index(days_from_sunday: u8) -> Vara {
    ALL_VARAS[(days_from_sunday % 7) as usize]
}

/// Vara of the civil day containing a Julian Day (UTC).
///
/// JD 0.0 fell at noon on a Monday, so `floor(jd + 1.5) mod 7` counts
/// days from Sunday.
pub fn vara_from_jd(jd: f64) -> Vara {
    let idx = ((jd + 1.5).floor() as i64).rem_euclid(7);
    ALL_VARAS[idx as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_was_saturday() {
        // 2000-01-01 was a Saturday; JD 2451545.0 = that day at 12:00 UTC.
        assert_eq!(vara_from_jd(2_451_545.0), Vara::Shanivara);
    }

    #[test]
    fn next_day_is_sunday() {
        assert_eq!(vara_from_jd(2_451_546.0), Vara::Ravivara);
    }

    #[test]
    fn index_wraps() {
        assert_eq!(vara_from_index(0), Vara::Ravivara);
        assert_eq!(vara_from_index(6), Vara::Shanivara);
        assert_eq!(vara_from_index(7), Vara::Ravivara);
    }

    #[test]
    fn weekday_names_align() {
        assert_eq!(Vara::Ravivara.weekday_name(), "Sunday");
        assert_eq!(Vara::Shanivara.weekday_name(), "Saturday");
    }

    #[test]
    fn negative_jd_still_classifies() {
        let v = vara_from_jd(-0.5);
        assert_eq!(v.index(), (((-0.5f64 + 1.5).floor() as i64).rem_euclid(7)) as u8);
    }
}
