//! Calendar engines: one polymorphic contract over heterogeneous
//! calendar systems.
//!
//! This crate provides:
//! - The [`CalendarEngine`] trait every calendar system implements
//! - [`EngineRegistry`], the read-only civilization-key lookup
//! - The Panchanga (lunisolar) engine and its recurrence search
//! - The Maya (fixed-cycle) engine with closed-form recurrence
//! - Provider traits for the astronomy, geocoding, and feed collaborators
//!
//! All computations are stateless functions of their inputs plus provider
//! calls; engines hold no mutable state and may be shared freely across
//! threads.

pub mod contract;
pub mod error;
pub mod feed;
pub mod lunar_phase;
pub mod maya;
pub mod panchanga;
pub mod providers;
pub mod recurrence;
pub mod registry;
pub mod report;
pub mod search;
pub mod snapshot;

pub use contract::{CalendarEngine, Language};
// Re-exported so callers don't need to depend on kala_time directly.
pub use kala_time::CivilInstant;
pub use error::{AstronomyError, EngineError, LocationError};
pub use feed::{FEED_RECURRENCE_COUNT, FeedEntry};
pub use lunar_phase::prev_new_moon;
pub use maya::MayaEngine;
pub use panchanga::PanchangaEngine;
pub use providers::{AngularData, AstronomyProvider, Body, DayBounds, FeedSerializer,
    LocationContext, LocationProvider};
pub use recurrence::LunarTriple;
pub use registry::{EngineRegistry, EngineRegistryBuilder};
pub use search::SearchContext;
pub use snapshot::{CalendarSnapshot, MayaSnapshot, PanchangaSnapshot, RecurrenceMatch};
