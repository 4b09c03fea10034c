//! Snapshot types: the polymorphic result of a calendar computation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::Serialize;

use kala_maya::{HaabDate, LongCount, TzolkinDate};
use kala_time::CivilInstant;
use kala_vedic::{
    KaranaPosition, Masa, NakshatraPosition, Paksha, RashiPosition, SamvatsaraPosition,
    TithiPosition, Vara, YogaPosition,
};

use crate::providers::AngularData;

/// Calendrical state of one civilization at one instant.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "civilization", rename_all = "snake_case")]
pub enum CalendarSnapshot {
    Panchanga(PanchangaSnapshot),
    Maya(MayaSnapshot),
}

/// Lunisolar (Panchanga) snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct PanchangaSnapshot {
    /// The civil instant the computation was made for, local wall clock.
    pub input_datetime: NaiveDateTime,
    /// IANA timezone the instant was resolved in.
    pub timezone: String,
    /// Display address of the location.
    pub address: String,
    /// 60-year cycle name and order.
    pub samvatsara: SamvatsaraPosition,
    /// Saka era year.
    pub saka_year: i32,
    /// Lunar month.
    pub masa: Masa,
    /// Lunar fortnight.
    pub paksha: Paksha,
    /// Lunar day, 1..=30.
    pub tithi: TithiPosition,
    /// Weekday (sunrise to sunrise).
    pub vara: Vara,
    /// Moon's lunar mansion and quarter.
    pub nakshatra: NakshatraPosition,
    /// Luni-solar yoga.
    pub yoga: YogaPosition,
    /// Half-tithi.
    pub karana: KaranaPosition,
    /// Moon's sidereal sign.
    pub rashi: RashiPosition,
    /// Ascendant's sidereal sign.
    pub lagna: RashiPosition,
    /// Local sunrise, absent at polar latitudes.
    pub sunrise: Option<NaiveTime>,
    /// Local sunset, absent at polar latitudes.
    pub sunset: Option<NaiveTime>,
    /// Phase angle and lunar-node longitudes.
    pub angular: AngularData,
    /// Civil date of the next (masa, paksha, tithi) anniversary, when one
    /// was found within the search bound.
    pub next_anniversary: Option<NaiveDate>,
    /// Rendered free-text report.
    pub report: String,
}

/// Fixed-cycle (Maya) snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct MayaSnapshot {
    /// Long Count components.
    pub long_count: LongCount,
    /// Dotted Long Count form, e.g. `13.0.13.4.18`.
    pub long_count_text: String,
    /// Tzolk'in position.
    pub tzolkin: TzolkinDate,
    /// Combined Tzolk'in form, e.g. `11 Etz'nab'`.
    pub tzolkin_text: String,
    /// Haab' position.
    pub haab: HaabDate,
    /// Combined Haab' form, e.g. `16 Muwan`.
    pub haab_text: String,
    /// Julian Day the conversion used.
    pub julian_day: f64,
    /// Integer day offset from the correlation epoch.
    pub day_count: i64,
}

/// One recurrence of the origin's calendrical configuration.
///
/// Created only by `find_recurrences`; immutable once returned.
#[derive(Debug, Clone)]
pub struct RecurrenceMatch {
    /// The matching civil instant, origin time-of-day preserved.
    pub civil: CivilInstant,
    /// The same instant in UTC.
    pub utc: DateTime<Utc>,
    /// Snapshot computed at the matching instant.
    pub snapshot: CalendarSnapshot,
}

impl CalendarSnapshot {
    /// The masa/paksha/tithi fields when this is a lunisolar snapshot.
    pub fn lunar_fields(&self) -> Option<(Masa, Paksha, u8)> {
        match self {
            Self::Panchanga(p) => Some((p.masa, p.paksha, p.tithi.number)),
            Self::Maya(_) => None,
        }
    }
}
