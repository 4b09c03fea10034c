//! Error types for civil time resolution.

use thiserror::Error;

/// Errors from parsing or resolving civil date/time input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Civil date or time string could not be parsed.
    #[error("invalid civil date/time: {0}")]
    InvalidCivil(String),
    /// Timezone identifier is not in the IANA database.
    #[error("unknown timezone id: {0}")]
    UnknownZone(String),
    /// The civil time falls in a daylight-saving gap and names no instant.
    #[error("civil time {civil} does not exist in zone {zone} (DST gap)")]
    MissingLocalTime {
        /// The nonexistent civil date/time.
        civil: String,
        /// The zone in which it was resolved.
        zone: String,
    },
}
