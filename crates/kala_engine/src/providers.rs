//! Collaborator contracts: astronomy, geocoding, and feed serialization.
//!
//! The engines consume these traits and never the implementations behind
//! them. Providers are latency-bound and may block; engines hold no locks,
//! so calls are freely retryable and cancelable by the orchestration layer.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use kala_time::TimeError;

use crate::error::{AstronomyError, LocationError};
use crate::feed::FeedEntry;

/// Bodies the engines ask the astronomy provider about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

/// Resolved civil location, owned by the location provider and borrowed
/// read-only by engines for the duration of one call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationContext {
    /// Geodetic latitude in degrees, north positive.
    pub latitude: f64,
    /// Geodetic longitude in degrees, east positive.
    pub longitude: f64,
    /// IANA timezone identifier.
    pub timezone: String,
    /// Human-readable display address.
    pub address: String,
}

impl LocationContext {
    /// Parse the IANA timezone identifier.
    pub fn tz(&self) -> Result<Tz, TimeError> {
        Tz::from_str(&self.timezone).map_err(|_| TimeError::UnknownZone(self.timezone.clone()))
    }
}

/// Sunrise/sunset instants for one civil day. Either may be absent at
/// polar latitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBounds {
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
}

/// Phase and lunar-node angles for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AngularData {
    /// Moon phase angle in degrees.
    pub phase_angle_deg: f64,
    /// Sidereal longitude of Rahu (ascending node) in degrees [0, 360).
    pub rahu_longitude_deg: f64,
    /// Sidereal longitude of Ketu (descending node) in degrees [0, 360).
    pub ketu_longitude_deg: f64,
}

/// The astronomy collaborator.
///
/// Implementations wrap an ephemeris; the engines only consume the four
/// query shapes below and stay agnostic of the underlying formulas.
pub trait AstronomyProvider: Send + Sync {
    /// Sidereal ecliptic longitude of a body in degrees [0, 360).
    fn sidereal_longitude(&self, utc: DateTime<Utc>, body: Body) -> Result<f64, AstronomyError>;

    /// Sunrise/sunset for the civil day at the given location.
    fn day_bounds(
        &self,
        date: NaiveDate,
        location: &LocationContext,
    ) -> Result<DayBounds, AstronomyError>;

    /// Phase angle and lunar-node longitudes at an instant.
    fn angular_data(
        &self,
        utc: DateTime<Utc>,
        location: &LocationContext,
    ) -> Result<AngularData, AstronomyError>;

    /// Sidereal longitude of the horizon ascendant in degrees [0, 360).
    fn ascendant_longitude(
        &self,
        utc: DateTime<Utc>,
        location: &LocationContext,
    ) -> Result<f64, AstronomyError>;
}

/// The geocoding collaborator: free-text place name to location context.
pub trait LocationProvider: Send + Sync {
    fn resolve(&self, name: &str) -> Result<LocationContext, LocationError>;
}

/// The feed-serialization collaborator.
///
/// Receives an ordered entry list and a title; the feed grammar is
/// entirely its own concern.
pub trait FeedSerializer: Send + Sync {
    fn serialize(&self, title: &str, entries: &[FeedEntry]) -> String;
}
