//! Civil date/time in an IANA timezone.
//!
//! A `CivilInstant` is what a user hands the system: a wall-clock date and
//! time plus the zone they mean it in. Resolution to an absolute instant is
//! unique except across daylight-saving transitions, where the outcome is
//! made explicit by [`Resolved`].

use std::fmt;
use std::str::FromStr;

use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;

/// Civil date, civil time, and the IANA zone they are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CivilInstant {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub zone: Tz,
}

/// Outcome of resolving a civil instant against the zone's transition rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// The civil time names exactly one instant.
    Unique(DateTime<Tz>),
    /// The civil time occurs twice (DST fold); both instants, earlier first.
    Ambiguous(DateTime<Tz>, DateTime<Tz>),
    /// The civil time falls in a DST gap and names no instant.
    Missing,
}

impl CivilInstant {
    pub fn new(date: NaiveDate, time: NaiveTime, zone: Tz) -> Self {
        Self { date, time, zone }
    }

    /// Parse from `YYYY-MM-DD`, `HH:MM` and an IANA zone identifier.
    pub fn parse(date_str: &str, time_str: &str, zone_id: &str) -> Result<Self, TimeError> {
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
            .map_err(|_| TimeError::InvalidCivil(format!("{date_str} {time_str}")))?;
        let time = NaiveTime::parse_from_str(time_str, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(time_str, "%H:%M:%S"))
            .map_err(|_| TimeError::InvalidCivil(format!("{date_str} {time_str}")))?;
        let zone = Tz::from_str(zone_id).map_err(|_| TimeError::UnknownZone(zone_id.into()))?;
        Ok(Self { date, time, zone })
    }

    /// Rebuild a civil instant from an already-zoned absolute instant.
    pub fn from_zoned(local: DateTime<Tz>) -> Self {
        Self {
            date: local.date_naive(),
            time: local.time(),
            zone: local.timezone(),
        }
    }

    fn naive(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date, self.time)
    }

    /// Resolve against the zone's transition rules without applying any policy.
    pub fn resolve(&self) -> Resolved {
        match self.zone.from_local_datetime(&self.naive()) {
            LocalResult::Single(dt) => Resolved::Unique(dt),
            LocalResult::Ambiguous(a, b) => Resolved::Ambiguous(a, b),
            LocalResult::None => Resolved::Missing,
        }
    }

    /// Resolve to a local instant, failing on a DST gap.
    ///
    /// A fold resolves to the earlier offset.
    pub fn to_local(&self) -> Result<DateTime<Tz>, TimeError> {
        match self.resolve() {
            Resolved::Unique(dt) | Resolved::Ambiguous(dt, _) => Ok(dt),
            Resolved::Missing => Err(TimeError::MissingLocalTime {
                civil: self.naive().to_string(),
                zone: self.zone.name().into(),
            }),
        }
    }

    /// Resolve leniently: `None` on a DST gap, earlier offset on a fold.
    ///
    /// Used by scanning code that treats a gap day as "no such candidate".
    pub fn to_local_lenient(&self) -> Option<DateTime<Tz>> {
        match self.resolve() {
            Resolved::Unique(dt) | Resolved::Ambiguous(dt, _) => Some(dt),
            Resolved::Missing => None,
        }
    }

    /// Resolve and convert to UTC, failing on a DST gap.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, TimeError> {
        Ok(self.to_local()?.with_timezone(&Utc))
    }
}

impl fmt::Display for CivilInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.date, self.time, self.zone.name())
    }
}
