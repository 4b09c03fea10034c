use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};

use kala_engine::error::AstronomyError;
use kala_engine::{
    AngularData, AstronomyProvider, Body, CalendarEngine, CivilInstant, DayBounds, Language,
    LocationContext, PanchangaEngine, SearchContext,
};
use kala_vedic::normalize_360;

/// Linear mean-motion sky, matching the integration-test double.
struct MeanSky;

fn days_since_j2000(utc: DateTime<Utc>) -> f64 {
    let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    (utc - j2000).num_seconds() as f64 / 86_400.0
}

impl AstronomyProvider for MeanSky {
    fn sidereal_longitude(&self, utc: DateTime<Utc>, body: Body) -> Result<f64, AstronomyError> {
        let d = days_since_j2000(utc);
        Ok(match body {
            Body::Sun => normalize_360(256.0 + d * 360.0 / 365.256_36),
            Body::Moon => normalize_360(194.0 + d * 360.0 / 27.321_661),
        })
    }

    fn day_bounds(
        &self,
        _date: chrono::NaiveDate,
        _location: &LocationContext,
    ) -> Result<DayBounds, AstronomyError> {
        Ok(DayBounds {
            sunrise: None,
            sunset: None,
        })
    }

    fn angular_data(
        &self,
        _utc: DateTime<Utc>,
        _location: &LocationContext,
    ) -> Result<AngularData, AstronomyError> {
        Ok(AngularData {
            phase_angle_deg: 0.0,
            rahu_longitude_deg: 100.0,
            ketu_longitude_deg: 280.0,
        })
    }

    fn ascendant_longitude(
        &self,
        _utc: DateTime<Utc>,
        _location: &LocationContext,
    ) -> Result<f64, AstronomyError> {
        Ok(0.0)
    }
}

fn bench_recurrence(c: &mut Criterion) {
    let engine = PanchangaEngine::new(Arc::new(MeanSky));
    let civil = CivilInstant::parse("2026-01-20", "12:00", "Asia/Kolkata").unwrap();
    let location = LocationContext {
        latitude: 12.9716,
        longitude: 77.5946,
        timezone: "Asia/Kolkata".into(),
        address: "Bangalore, India".into(),
    };
    let now = Utc.with_ymd_and_hms(2026, 6, 15, 0, 0, 0).unwrap();

    c.bench_function("find_recurrences_1", |b| {
        b.iter(|| {
            engine
                .find_recurrences(
                    &civil,
                    &location,
                    1,
                    Language::En,
                    &SearchContext::at(now),
                )
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_recurrence);
criterion_main!(benches);
