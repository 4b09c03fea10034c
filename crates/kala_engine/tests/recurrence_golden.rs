//! Recurrence-search properties for the lunisolar engine, driven by the
//! deterministic mean-motion sky.

mod common;

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use kala_engine::{
    CalendarEngine, CalendarSnapshot, CivilInstant, EngineError, FeedEntry, FeedSerializer,
    Language, PanchangaEngine, SearchContext,
};

use common::{DarkSky, FrozenSunSky, MeanSky, bangalore};

fn engine() -> PanchangaEngine {
    PanchangaEngine::new(Arc::new(MeanSky))
}

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 0, 0, 0).unwrap()
}

fn origin() -> CivilInstant {
    CivilInstant::parse("2026-01-20", "12:00", "Asia/Kolkata").unwrap()
}

#[test]
fn matches_preserve_the_origin_triple() {
    let engine = engine();
    let loc = bangalore();
    let search = SearchContext::at(fixed_now());

    let origin_snap = engine
        .compute_snapshot(&origin(), &loc, Language::En)
        .unwrap();
    let target = origin_snap.lunar_fields().unwrap();

    let matches = engine
        .find_recurrences(&origin(), &loc, 3, Language::En, &search)
        .unwrap();
    assert_eq!(matches.len(), 3);

    for m in &matches {
        assert_eq!(m.snapshot.lunar_fields().unwrap(), target);
        // Origin time-of-day is preserved on the matched civil instant.
        assert_eq!(m.civil.time, origin().time);
        assert_eq!(m.civil.zone, origin().zone);
    }
}

#[test]
fn matches_are_strictly_increasing_and_future() {
    let engine = engine();
    let loc = bangalore();
    let now = fixed_now();
    let search = SearchContext::at(now);

    let matches = engine
        .find_recurrences(&origin(), &loc, 4, Language::En, &search)
        .unwrap();
    assert_eq!(matches.len(), 4);

    let mut prev = now;
    for m in &matches {
        assert!(m.utc > prev, "expected strictly increasing, future results");
        prev = m.utc;
    }
}

#[test]
fn matched_dates_are_distinct() {
    let engine = engine();
    let matches = engine
        .find_recurrences(
            &origin(),
            &bangalore(),
            5,
            Language::En,
            &SearchContext::at(fixed_now()),
        )
        .unwrap();
    for pair in matches.windows(2) {
        assert_ne!(pair[0].civil.date, pair[1].civil.date);
    }
}

#[test]
fn zero_count_scans_nothing() {
    // DarkSky fails every astronomy call, so an empty result proves the
    // search returned before touching the provider.
    let engine = PanchangaEngine::new(Arc::new(DarkSky));
    let matches = engine
        .find_recurrences(
            &origin(),
            &bangalore(),
            0,
            Language::En,
            &SearchContext::new(),
        )
        .unwrap();
    assert!(matches.is_empty());
}

#[test]
fn impossible_triple_exhausts_explicitly() {
    // After the freeze the Sun pins to 10 deg (Mesha), so every future
    // month is Vaishakha; an origin in any other masa can never recur.
    let engine = PanchangaEngine::new(Arc::new(FrozenSunSky {
        freeze_after: fixed_now(),
        frozen_sun_deg: 10.0,
    }));
    let loc = bangalore();
    let search = SearchContext::at(fixed_now());

    let err = engine
        .find_recurrences(&origin(), &loc, 2, Language::En, &search)
        .unwrap_err();
    match err {
        EngineError::RecurrenceExhausted {
            wanted,
            found,
            years_scanned,
        } => {
            assert_eq!(wanted, 2);
            assert_eq!(found, 0);
            assert!(years_scanned > 4);
        }
        other => panic!("expected RecurrenceExhausted, got {other:?}"),
    }
}

#[test]
fn cancellation_is_checked_between_days() {
    let engine = engine();
    let search = SearchContext::at(fixed_now());
    search.cancel();
    let err = engine
        .find_recurrences(&origin(), &bangalore(), 2, Language::En, &search)
        .unwrap_err();
    assert_eq!(err, EngineError::Cancelled);
}

#[test]
fn provider_failure_propagates_unchanged() {
    let engine = PanchangaEngine::new(Arc::new(DarkSky));
    let err = engine
        .find_recurrences(
            &origin(),
            &bangalore(),
            1,
            Language::En,
            &SearchContext::at(fixed_now()),
        )
        .unwrap_err();
    assert!(matches!(err, EngineError::Astronomy(_)));
}

struct CountingFeed;

impl FeedSerializer for CountingFeed {
    fn serialize(&self, title: &str, entries: &[FeedEntry]) -> String {
        format!("{title}|{}", entries.len())
    }
}

#[test]
fn feed_carries_twenty_recurrences() {
    let engine = engine();
    let out = engine
        .render_feed(
            &origin(),
            &bangalore(),
            "Janma Tithi",
            Language::En,
            &CountingFeed,
            &SearchContext::at(fixed_now()),
        )
        .unwrap();
    assert_eq!(out, "Janma Tithi|20");
}

#[test]
fn snapshot_carries_elements_and_report() {
    let engine = engine();
    let snap = engine
        .compute_snapshot(&origin(), &bangalore(), Language::En)
        .unwrap();
    let CalendarSnapshot::Panchanga(p) = snap else {
        panic!("expected Panchanga snapshot");
    };
    assert!((1..=30).contains(&p.tithi.number));
    assert!((1..=4).contains(&p.nakshatra.pada));
    assert!((1..=60).contains(&p.samvatsara.order));
    assert_eq!(p.saka_year, 1947);
    assert_eq!(p.timezone, "Asia/Kolkata");
    assert!(p.sunrise.is_some());
    assert!(p.report.contains("Tithi"));
    assert!(p.report.contains("Bangalore"));
}
