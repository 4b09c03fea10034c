//! Fixed-cycle (Maya) calendar engine.
//!
//! Snapshot assembly is pure arithmetic on the Julian Day; recurrence is
//! closed-form because the Tzolk'in and Haab' periods are fixed, so the
//! next Calendar Round coincidences land at exact 18,980-day strides.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use kala_maya::{
    CALENDAR_ROUND_DAYS, day_count_from_jd, haab_from_day_count, long_count_from_day_count,
    tzolkin_from_day_count,
};
use kala_time::{CivilInstant, julian_day};

use crate::contract::{CalendarEngine, Language};
use crate::error::EngineError;
use crate::providers::LocationContext;
use crate::search::SearchContext;
use crate::snapshot::{CalendarSnapshot, MayaSnapshot, RecurrenceMatch};

/// Visualization modules that apply to a fixed-cycle snapshot.
const MAYA_VISUAL_MODULES: &[&str] = &["mayan_gears"];

const MAYA_AI_INSTRUCTIONS: &str = "\
Present the conversion as a scientific masterclass on Maya timekeeping.
1. The power of zero: positional base-20 notation, centuries ahead of its
   European counterparts.
2. The Long Count as a cosmic odometer: kin through b'ak'tun, rolling over
   rather than ending.
3. The Calendar Round: the 260-day Tzolk'in and 365-day Haab' as
   interlocking gears realigning every 52 years.
4. Archaeoastronomy: the 584-day Venus cycle and its 8-year resonance with
   the solar year, as recorded in the Dresden Codex.
Avoid apocalyptic pseudoscience entirely; keep the focus on the
mathematics.";

/// Fixed-cycle calendar engine. Stateless: every field of the snapshot is
/// a function of the Julian Day alone.
#[derive(Debug, Default)]
pub struct MayaEngine;

impl MayaEngine {
    pub fn new() -> Self {
        Self
    }

    fn snapshot_for(utc: DateTime<Utc>) -> MayaSnapshot {
        let jd = julian_day(utc);
        let day_count = day_count_from_jd(jd);
        let long_count = long_count_from_day_count(day_count);
        let tzolkin = tzolkin_from_day_count(day_count);
        let haab = haab_from_day_count(day_count);
        MayaSnapshot {
            long_count,
            long_count_text: long_count.to_string(),
            tzolkin,
            tzolkin_text: tzolkin.to_string(),
            haab,
            haab_text: haab.to_string(),
            julian_day: jd,
            day_count,
        }
    }
}

impl CalendarEngine for MayaEngine {
    fn key(&self) -> &'static str {
        "maya"
    }

    fn compute_snapshot(
        &self,
        civil: &CivilInstant,
        _location: &LocationContext,
        _language: Language,
    ) -> Result<CalendarSnapshot, EngineError> {
        let utc = civil.to_utc()?;
        Ok(CalendarSnapshot::Maya(Self::snapshot_for(utc)))
    }

    fn find_recurrences(
        &self,
        civil: &CivilInstant,
        _location: &LocationContext,
        count: usize,
        _language: Language,
        search: &SearchContext,
    ) -> Result<Vec<RecurrenceMatch>, EngineError> {
        if count == 0 {
            return Ok(Vec::new());
        }
        let origin_utc = civil.to_utc()?;
        let now = search.now();

        let mut results = Vec::with_capacity(count);
        let mut k: i64 = 1;
        while results.len() < count {
            search.checkpoint()?;
            let utc = origin_utc + Duration::days(k * CALENDAR_ROUND_DAYS);
            k += 1;
            if utc <= now {
                continue;
            }
            let local = utc.with_timezone(&civil.zone);
            results.push(RecurrenceMatch {
                civil: CivilInstant::from_zoned(local),
                utc,
                snapshot: CalendarSnapshot::Maya(Self::snapshot_for(utc)),
            });
        }
        Ok(results)
    }

    fn feed_description(&self, matched: &RecurrenceMatch) -> String {
        match &matched.snapshot {
            CalendarSnapshot::Maya(m) => format!(
                "Mayan Anniversary: {} {}\nLong Count: {}",
                m.tzolkin_text, m.haab_text, m.long_count_text
            ),
            _ => matched.civil.to_string(),
        }
    }

    fn visual_hints(&self, _snapshot: &CalendarSnapshot) -> &'static [&'static str] {
        MAYA_VISUAL_MODULES
    }

    fn ai_context(&self, snapshot: &CalendarSnapshot) -> Value {
        match snapshot {
            CalendarSnapshot::Maya(m) => Value::String(format!(
                "Mayan Calendar Correlation Data:\n\
                 - Long Count: {}\n\
                 - Tzolk'in: {}\n\
                 - Haab': {}\n\
                 - Calculation Basis: GMT Correlation (584283), JD: {}",
                m.long_count_text, m.tzolkin_text, m.haab_text, m.julian_day
            )),
            other => serde_json::to_value(other).unwrap_or(Value::Null),
        }
    }

    fn ai_instructions(&self) -> &'static str {
        MAYA_AI_INSTRUCTIONS
    }
}
