//! Error taxonomy for the calendar engines.
//!
//! Collaborator failures (location, astronomy) pass through unchanged;
//! nothing is retried here: every operation is deterministic, so a retry
//! without new input cannot change the outcome.

use thiserror::Error;

use kala_time::TimeError;

/// Failure from the location (geocoding) collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum LocationError {
    /// The place name resolved to nothing.
    #[error("location not found: {0}")]
    NotFound(String),
    /// The geocoding backend failed.
    #[error("geocoder failure: {0}")]
    Backend(String),
}

/// Failure from the astronomy collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum AstronomyError {
    /// The ephemeris query failed.
    #[error("ephemeris query failed: {0}")]
    Ephemeris(String),
    /// The requested instant is outside the provider's supported range.
    #[error("instant outside supported range: {0}")]
    OutOfRange(String),
}

/// Errors surfaced by engine operations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// No engine is registered under the requested key.
    #[error("unknown calendar engine: {0}")]
    UnknownCivilization(String),
    /// Civil date/time/location input could not be parsed.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Propagated location-provider failure.
    #[error(transparent)]
    Location(#[from] LocationError),
    /// Propagated astronomy-provider failure.
    #[error(transparent)]
    Astronomy(#[from] AstronomyError),
    /// The input civil time falls in a daylight-saving gap.
    #[error("civil time {civil} does not exist in zone {zone} (DST gap)")]
    MissingLocalTime {
        /// The nonexistent civil date/time.
        civil: String,
        /// The zone in which it was resolved.
        zone: String,
    },
    /// The recurrence search hit its safety bound before finding enough
    /// matches. Never silently truncated into a short list.
    #[error("recurrence search exhausted after {years_scanned} years: found {found} of {wanted}")]
    RecurrenceExhausted {
        /// Matches requested.
        wanted: usize,
        /// Matches found before the bound was hit.
        found: usize,
        /// Years scanned past the starting year.
        years_scanned: i32,
    },
    /// An iterative search failed to converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// The caller's cancellation token was set.
    #[error("search cancelled")]
    Cancelled,
}

impl From<TimeError> for EngineError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::MissingLocalTime { civil, zone } => Self::MissingLocalTime { civil, zone },
            other => Self::InvalidInput(other.to_string()),
        }
    }
}
