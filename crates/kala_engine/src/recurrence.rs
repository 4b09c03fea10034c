//! Lunisolar recurrence search.
//!
//! Finds future instants sharing the origin's (masa, paksha, tithi) triple
//! at the origin's time-of-day. The lunisolar year varies between ~354 and
//! ~384 days and the month name depends on the Sun's position at the
//! preceding new moon, so every candidate day is re-derived independently;
//! nothing is extrapolated from elapsed days.

use chrono::{Datelike, Duration, NaiveDate, Utc};

use kala_time::CivilInstant;
use kala_vedic::{Masa, Paksha};

use crate::contract::Language;
use crate::error::EngineError;
use crate::panchanga::PanchangaEngine;
use crate::providers::LocationContext;
use crate::search::SearchContext;
use crate::snapshot::{CalendarSnapshot, RecurrenceMatch};

/// The lunisolar configuration a recurrence must reproduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarTriple {
    pub masa: Masa,
    pub paksha: Paksha,
    /// Tithi number over the whole month, 1..=30.
    pub tithi: u8,
}

/// Days scanned per search year.
const WINDOW_DAYS: i64 = 65;

/// Window starts this many days before the approximate anniversary.
const WINDOW_LEAD_DAYS: i64 = 32;

/// Civil date reusing the origin's month/day in `year`, clamped to the
/// month's last valid day when that date does not exist.
fn approximate_date(year: i32, origin: NaiveDate) -> NaiveDate {
    let mut day = origin.day();
    while day > 28 {
        if let Some(d) = NaiveDate::from_ymd_opt(year, origin.month(), day) {
            return d;
        }
        day -= 1;
    }
    NaiveDate::from_ymd_opt(year, origin.month(), day).unwrap_or(origin)
}

/// Find the next `count` recurrences of the origin's triple.
///
/// Scans year by year from the current year; at most one match is accepted
/// per year, so the output is strictly chronological by construction.
pub(crate) fn find_recurrences(
    engine: &PanchangaEngine,
    origin: &CivilInstant,
    location: &LocationContext,
    count: usize,
    language: Language,
    search: &SearchContext,
) -> Result<Vec<RecurrenceMatch>, EngineError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let origin_utc = origin.to_utc()?;
    let target = engine.lunar_triple(origin_utc)?;
    tracing::debug!(
        masa = target.masa.name(),
        paksha = target.paksha.name(),
        tithi = target.tithi,
        "searching recurrences"
    );

    let now = search.now();
    let start_year = now.year();
    let mut search_year = start_year;
    let mut results: Vec<RecurrenceMatch> = Vec::with_capacity(count);
    let mut last_date: Option<NaiveDate> = None;

    while results.len() < count {
        let years_scanned = search_year - start_year;
        if years_scanned > 2 * count as i32 {
            return Err(EngineError::RecurrenceExhausted {
                wanted: count,
                found: results.len(),
                years_scanned,
            });
        }

        let window_start = approximate_date(search_year, origin.date) - Duration::days(WINDOW_LEAD_DAYS);
        for offset in 0..WINDOW_DAYS {
            search.checkpoint()?;
            let date = window_start + Duration::days(offset);
            let civil = CivilInstant::new(date, origin.time, origin.zone);
            let Some(local) = civil.to_local_lenient() else {
                // Gap day: the origin's time-of-day does not exist here.
                tracing::debug!(%date, zone = origin.zone.name(), "skipping DST-gap candidate");
                continue;
            };
            let utc = local.with_timezone(&Utc);
            if utc <= now {
                continue;
            }
            let triple = engine.lunar_triple(utc)?;
            if triple == target {
                if last_date != Some(date) {
                    let snapshot = engine.snapshot_at(&civil, location, language, false)?;
                    tracing::debug!(%date, "recurrence match");
                    results.push(RecurrenceMatch {
                        civil,
                        utc,
                        snapshot: CalendarSnapshot::Panchanga(snapshot),
                    });
                    last_date = Some(date);
                }
                break;
            }
        }
        search_year += 1;
    }

    Ok(results)
}
