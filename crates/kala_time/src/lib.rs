//! Civil time handling for the calendar engines.
//!
//! This crate provides:
//! - `CivilInstant`, the canonical (date, time, IANA zone) triple used by
//!   every engine operation
//! - Explicit DST gap/fold resolution policies
//! - Julian Day conversion from a UTC instant

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{CivilInstant, Resolved};
pub use error::TimeError;
pub use julian::{JD_UNIX_EPOCH, civil_to_jd, julian_day, julian_day_number};
