//! Lunisolar (Panchanga) calendar engine.
//!
//! Combines astronomy-provider outputs into the panchanga elements and
//! implements the anniversary recurrence search. Sun/Moon longitudes are
//! queried once per instant and shared across the elements that need them.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use serde_json::Value;

use kala_time::CivilInstant;
use kala_vedic::{
    karana_from_elongation, masa_from_new_moon_longitude, nakshatra_from_longitude,
    rashi_from_longitude, saka_year_for, samvatsara_from_year, tithi_from_elongation,
    vara_from_index, yoga_from_sum,
};

use crate::contract::{CalendarEngine, Language};
use crate::error::EngineError;
use crate::lunar_phase::prev_new_moon;
use crate::providers::{AstronomyProvider, Body, LocationContext};
use crate::recurrence::{self, LunarTriple};
use crate::report::render_report;
use crate::search::SearchContext;
use crate::snapshot::{CalendarSnapshot, PanchangaSnapshot, RecurrenceMatch};

/// Visualization modules that apply to a lunisolar snapshot.
const PANCHANGA_VISUAL_MODULES: &[&str] = &[
    "zodiac_comparison",
    "moon_phase",
    "constellations",
    "precession",
    "samvatsara",
    "lunar_nodes",
];

const PANCHANGA_AI_INSTRUCTIONS: &str = "\
Explain the configuration for a student of the Hindu Panchanga in three parts.
1. The Astronomer's Perspective: the relative Sun-Moon-Earth geometry behind
   this tithi, nakshatra, and yoga, using terms like elongation, sidereal,
   and precession.
2. The Physicist's Note: why the orbital periods produce these cycles (the
   jovian period behind the samvatsara, the synodic month behind the paksha)
   and how the epoch of the measurement is defined.
3. The Sage's Tale: the mythology attached to these names, presented as a
   poetic reading of the same astronomical events.
Use the term Panchanga rather than Vedic, keep the tone educational, and
write Markdown.";

/// Lunisolar calendar engine backed by an injected astronomy provider.
pub struct PanchangaEngine {
    astronomy: Arc<dyn AstronomyProvider>,
}

impl PanchangaEngine {
    pub fn new(astronomy: Arc<dyn AstronomyProvider>) -> Self {
        Self { astronomy }
    }

    /// The (masa, paksha, tithi) triple at a UTC instant.
    ///
    /// The masa derives from the Sun's sidereal longitude at the preceding
    /// new moon, not from the current solar position.
    pub(crate) fn lunar_triple(
        &self,
        utc: chrono::DateTime<Utc>,
    ) -> Result<LunarTriple, EngineError> {
        let sun = self.astronomy.sidereal_longitude(utc, Body::Sun)?;
        let moon = self.astronomy.sidereal_longitude(utc, Body::Moon)?;
        let tithi = tithi_from_elongation(moon - sun);

        let new_moon = prev_new_moon(self.astronomy.as_ref(), utc)?;
        let sun_at_nm = self.astronomy.sidereal_longitude(new_moon, Body::Sun)?;
        let masa = masa_from_new_moon_longitude(sun_at_nm);

        Ok(LunarTriple {
            masa,
            paksha: tithi.paksha,
            tithi: tithi.number,
        })
    }

    /// Assemble the full snapshot at a civil instant.
    ///
    /// `include_anniversary` is false when called from inside the
    /// recurrence search, which would otherwise recurse.
    pub(crate) fn snapshot_at(
        &self,
        civil: &CivilInstant,
        location: &LocationContext,
        language: Language,
        include_anniversary: bool,
    ) -> Result<PanchangaSnapshot, EngineError> {
        let local = civil.to_local()?;
        let utc = local.with_timezone(&Utc);

        let sun = self.astronomy.sidereal_longitude(utc, Body::Sun)?;
        let moon = self.astronomy.sidereal_longitude(utc, Body::Moon)?;
        let tithi = tithi_from_elongation(moon - sun);

        let new_moon = prev_new_moon(self.astronomy.as_ref(), utc)?;
        let sun_at_nm = self.astronomy.sidereal_longitude(new_moon, Body::Sun)?;
        let masa = masa_from_new_moon_longitude(sun_at_nm);

        let bounds = self.astronomy.day_bounds(civil.date, location)?;
        let sunrise = bounds.sunrise.map(|t| t.with_timezone(&civil.zone).time());
        let sunset = bounds.sunset.map(|t| t.with_timezone(&civil.zone).time());

        // The vara runs sunrise to sunrise: before sunrise the previous
        // day's vara still holds.
        let mut weekday = civil.date.weekday().num_days_from_sunday() as u8;
        if let Some(rise) = sunrise {
            if civil.time < rise {
                weekday = (weekday + 6) % 7;
            }
        }

        let ascendant = self.astronomy.ascendant_longitude(utc, location)?;
        let angular = self.astronomy.angular_data(utc, location)?;

        let mut snap = PanchangaSnapshot {
            input_datetime: local.naive_local(),
            timezone: civil.zone.name().to_string(),
            address: location.address.clone(),
            samvatsara: samvatsara_from_year(local.year()),
            saka_year: saka_year_for(local.year(), local.month(), local.day()),
            masa,
            paksha: tithi.paksha,
            tithi,
            vara: vara_from_index(weekday),
            nakshatra: nakshatra_from_longitude(moon),
            yoga: yoga_from_sum(sun + moon),
            karana: karana_from_elongation(moon - sun),
            rashi: rashi_from_longitude(moon),
            lagna: rashi_from_longitude(ascendant),
            sunrise,
            sunset,
            angular,
            next_anniversary: None,
            report: String::new(),
        };
        snap.report = render_report(&snap, language);

        if include_anniversary {
            let search = SearchContext::new();
            match recurrence::find_recurrences(self, civil, location, 1, language, &search) {
                Ok(matches) => snap.next_anniversary = matches.first().map(|m| m.civil.date),
                Err(EngineError::RecurrenceExhausted { .. }) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(snap)
    }
}

impl CalendarEngine for PanchangaEngine {
    fn key(&self) -> &'static str {
        "panchanga"
    }

    fn compute_snapshot(
        &self,
        civil: &CivilInstant,
        location: &LocationContext,
        language: Language,
    ) -> Result<CalendarSnapshot, EngineError> {
        Ok(CalendarSnapshot::Panchanga(self.snapshot_at(
            civil, location, language, true,
        )?))
    }

    fn find_recurrences(
        &self,
        civil: &CivilInstant,
        location: &LocationContext,
        count: usize,
        language: Language,
        search: &SearchContext,
    ) -> Result<Vec<RecurrenceMatch>, EngineError> {
        recurrence::find_recurrences(self, civil, location, count, language, search)
    }

    fn feed_description(&self, matched: &RecurrenceMatch) -> String {
        match &matched.snapshot {
            CalendarSnapshot::Panchanga(p) => p.report.clone(),
            _ => matched.civil.to_string(),
        }
    }

    fn visual_hints(&self, _snapshot: &CalendarSnapshot) -> &'static [&'static str] {
        PANCHANGA_VISUAL_MODULES
    }

    fn ai_context(&self, snapshot: &CalendarSnapshot) -> Value {
        // The full snapshot is the prompt context for this civilization.
        serde_json::to_value(snapshot).unwrap_or(Value::Null)
    }

    fn ai_instructions(&self) -> &'static str {
        PANCHANGA_AI_INSTRUCTIONS
    }
}
