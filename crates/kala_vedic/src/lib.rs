//! Pure lunisolar classification arithmetic.
//!
//! This crate provides:
//! - Tithi, paksha, and karana from the Moon-Sun elongation
//! - Nakshatra/pada, rashi, and yoga from sidereal longitudes
//! - Masa from the Sun's rashi at the preceding new moon
//! - Vara (weekday), samvatsara (60-year cycle), and Saka year
//!
//! Everything here is a stateless function of angles and calendar fields;
//! obtaining those angles is the astronomy provider's concern.

pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod rashi;
pub mod saka;
pub mod samvatsara;
pub mod tithi;
pub mod util;
pub mod vara;
pub mod yoga;

pub use karana::{KARANA_SEGMENT_DEG, KaranaPosition, karana_from_elongation};
pub use masa::{ALL_MASAS, Masa, masa_from_new_moon_longitude, masa_from_rashi_index};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraPosition, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, RASHI_SPAN, Rashi, RashiPosition, rashi_from_longitude};
pub use saka::saka_year_for;
pub use samvatsara::{SAMVATSARA_EPOCH_YEAR, SamvatsaraPosition, samvatsara_from_year};
pub use tithi::{Paksha, TITHI_SEGMENT_DEG, TithiPosition, tithi_from_elongation};
pub use util::normalize_360;
pub use vara::{ALL_VARAS, Vara, vara_from_index, vara_from_jd};
pub use yoga::{YOGA_SEGMENT_DEG, YogaPosition, yoga_from_sum};
