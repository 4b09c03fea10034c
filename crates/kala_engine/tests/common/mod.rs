//! Shared test doubles: deterministic synthetic astronomy providers.
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use kala_engine::{AngularData, AstronomyProvider, Body, DayBounds, LocationContext};
use kala_engine::error::AstronomyError;
use kala_vedic::normalize_360;

pub const SIDEREAL_YEAR_DAYS: f64 = 365.256_36;
pub const SIDEREAL_MONTH_DAYS: f64 = 27.321_661;

/// Nodal regression rate in degrees per day (18.6-year period).
const NODE_RATE: f64 = 360.0 / 6798.38;

pub fn days_since_j2000(utc: DateTime<Utc>) -> f64 {
    let j2000 = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    (utc - j2000).num_seconds() as f64 / 86_400.0
}

/// Linear mean-motion sky: every longitude advances at its mean rate.
/// Deterministic, valid for any instant.
pub struct MeanSky;

impl MeanSky {
    pub fn sun_longitude(utc: DateTime<Utc>) -> f64 {
        normalize_360(256.0 + days_since_j2000(utc) * 360.0 / SIDEREAL_YEAR_DAYS)
    }

    pub fn moon_longitude(utc: DateTime<Utc>) -> f64 {
        normalize_360(194.0 + days_since_j2000(utc) * 360.0 / SIDEREAL_MONTH_DAYS)
    }
}

fn local_time_utc(
    date: NaiveDate,
    hour: u32,
    location: &LocationContext,
) -> Result<Option<DateTime<Utc>>, AstronomyError> {
    let tz = location
        .tz()
        .map_err(|e| AstronomyError::Ephemeris(e.to_string()))?;
    Ok(date
        .and_hms_opt(hour, 0, 0)
        .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        .map(|t| t.with_timezone(&Utc)))
}

impl AstronomyProvider for MeanSky {
    fn sidereal_longitude(&self, utc: DateTime<Utc>, body: Body) -> Result<f64, AstronomyError> {
        Ok(match body {
            Body::Sun => Self::sun_longitude(utc),
            Body::Moon => Self::moon_longitude(utc),
        })
    }

    fn day_bounds(
        &self,
        date: NaiveDate,
        location: &LocationContext,
    ) -> Result<DayBounds, AstronomyError> {
        Ok(DayBounds {
            sunrise: local_time_utc(date, 6, location)?,
            sunset: local_time_utc(date, 18, location)?,
        })
    }

    fn angular_data(
        &self,
        utc: DateTime<Utc>,
        _location: &LocationContext,
    ) -> Result<AngularData, AstronomyError> {
        let rahu = normalize_360(100.0 - days_since_j2000(utc) * NODE_RATE);
        Ok(AngularData {
            phase_angle_deg: normalize_360(Self::moon_longitude(utc) - Self::sun_longitude(utc)),
            rahu_longitude_deg: rahu,
            ketu_longitude_deg: normalize_360(rahu + 180.0),
        })
    }

    fn ascendant_longitude(
        &self,
        utc: DateTime<Utc>,
        location: &LocationContext,
    ) -> Result<f64, AstronomyError> {
        // One full turn per sidereal day, shifted by the site longitude.
        Ok(normalize_360(
            days_since_j2000(utc) * 360.0 * 1.002_737_9 + location.longitude,
        ))
    }
}

/// A sky whose Sun freezes at a fixed longitude after `freeze_after`,
/// making the frozen era's masa constant. An origin whose masa differs can
/// then never recur.
pub struct FrozenSunSky {
    pub freeze_after: DateTime<Utc>,
    pub frozen_sun_deg: f64,
}

impl AstronomyProvider for FrozenSunSky {
    fn sidereal_longitude(&self, utc: DateTime<Utc>, body: Body) -> Result<f64, AstronomyError> {
        match body {
            Body::Sun if utc > self.freeze_after => Ok(self.frozen_sun_deg),
            _ => MeanSky.sidereal_longitude(utc, body),
        }
    }

    fn day_bounds(
        &self,
        date: NaiveDate,
        location: &LocationContext,
    ) -> Result<DayBounds, AstronomyError> {
        MeanSky.day_bounds(date, location)
    }

    fn angular_data(
        &self,
        utc: DateTime<Utc>,
        location: &LocationContext,
    ) -> Result<AngularData, AstronomyError> {
        MeanSky.angular_data(utc, location)
    }

    fn ascendant_longitude(
        &self,
        utc: DateTime<Utc>,
        location: &LocationContext,
    ) -> Result<f64, AstronomyError> {
        MeanSky.ascendant_longitude(utc, location)
    }
}

/// A provider that fails every query; proves code paths make no
/// astronomy calls.
pub struct DarkSky;

impl AstronomyProvider for DarkSky {
    fn sidereal_longitude(&self, _utc: DateTime<Utc>, _body: Body) -> Result<f64, AstronomyError> {
        Err(AstronomyError::Ephemeris("dark sky".into()))
    }

    fn day_bounds(
        &self,
        _date: NaiveDate,
        _location: &LocationContext,
    ) -> Result<DayBounds, AstronomyError> {
        Err(AstronomyError::Ephemeris("dark sky".into()))
    }

    fn angular_data(
        &self,
        _utc: DateTime<Utc>,
        _location: &LocationContext,
    ) -> Result<AngularData, AstronomyError> {
        Err(AstronomyError::Ephemeris("dark sky".into()))
    }

    fn ascendant_longitude(
        &self,
        _utc: DateTime<Utc>,
        _location: &LocationContext,
    ) -> Result<f64, AstronomyError> {
        Err(AstronomyError::Ephemeris("dark sky".into()))
    }
}

pub fn bangalore() -> LocationContext {
    LocationContext {
        latitude: 12.9716,
        longitude: 77.5946,
        timezone: "Asia/Kolkata".into(),
        address: "Bangalore, India".into(),
    }
}

pub fn greenwich() -> LocationContext {
    LocationContext {
        latitude: 51.4779,
        longitude: 0.0,
        timezone: "UTC".into(),
        address: "Greenwich, UK".into(),
    }
}
