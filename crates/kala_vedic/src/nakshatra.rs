//! Nakshatra (lunar mansion) classification, 27-fold scheme.
//!
//! The ecliptic circle is divided into 27 equal nakshatras of 13 deg 20'
//! each, every nakshatra carrying 4 padas (quarters) of 3 deg 20'.

use serde::Serialize;

use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: NAKSHATRA_SPAN/4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini .. 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

const ALL_NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

impl Nakshatra {
    /// Transliterated name of the nakshatra.
    pub fn name(self) -> &'static str {
        ALL_NAKSHATRA_NAMES[self.index() as usize]
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Nakshatra classification result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NakshatraPosition {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// 0-based nakshatra index (0..=26).
    pub index: u8,
    /// Pada (quarter) within the nakshatra, 1..=4.
    pub pada: u8,
}

/// Classify the nakshatra and pada from a sidereal longitude in degrees.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraPosition {
    let lon = normalize_360(sidereal_lon_deg);
    let index = ((lon / NAKSHATRA_SPAN) as usize).min(26);
    let within = lon - index as f64 * NAKSHATRA_SPAN;
    let pada = ((within / PADA_SPAN) as u8).min(3) + 1;
    NakshatraPosition {
        nakshatra: ALL_NAKSHATRAS[index],
        index: index as u8,
        pada,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_ashwini_pada_1() {
        let n = nakshatra_from_longitude(0.0);
        assert_eq!(n.nakshatra, Nakshatra::Ashwini);
        assert_eq!(n.pada, 1);
    }

    #[test]
    fn end_of_circle_is_revati_pada_4() {
        let n = nakshatra_from_longitude(359.999);
        assert_eq!(n.nakshatra, Nakshatra::Revati);
        assert_eq!(n.index, 26);
        assert_eq!(n.pada, 4);
    }

    #[test]
    fn span_boundary() {
        let n = nakshatra_from_longitude(NAKSHATRA_SPAN);
        assert_eq!(n.nakshatra, Nakshatra::Bharani);
        assert_eq!(n.pada, 1);
    }

    #[test]
    fn pada_boundaries_within_ashwini() {
        assert_eq!(nakshatra_from_longitude(PADA_SPAN * 0.5).pada, 1);
        assert_eq!(nakshatra_from_longitude(PADA_SPAN * 1.5).pada, 2);
        assert_eq!(nakshatra_from_longitude(PADA_SPAN * 2.5).pada, 3);
        assert_eq!(nakshatra_from_longitude(PADA_SPAN * 3.5).pada, 4);
    }

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
        }
    }

    #[test]
    fn names_nonempty() {
        for n in ALL_NAKSHATRAS {
            assert!(!n.name().is_empty());
        }
    }

    #[test]
    fn pada_always_in_range() {
        for i in 0..3600 {
            let n = nakshatra_from_longitude(i as f64 * 0.1);
            assert!((1..=4).contains(&n.pada));
            assert!(n.index < 27);
        }
    }
}
