//! The polymorphic calendar-engine contract.

use serde::Serialize;
use serde_json::Value;

use kala_time::CivilInstant;

use crate::error::EngineError;
use crate::feed::{FEED_RECURRENCE_COUNT, FeedEntry};
use crate::providers::{FeedSerializer, LocationContext};
use crate::search::SearchContext;
use crate::snapshot::{CalendarSnapshot, RecurrenceMatch};

/// Report language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Language {
    /// English.
    #[default]
    En,
    /// Sanskrit.
    Sa,
    /// Kannada.
    Kn,
    /// Hindi.
    Hi,
}

impl Language {
    /// Two-letter code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::Sa => "SA",
            Self::Kn => "KN",
            Self::Hi => "HI",
        }
    }

    /// Parse a two-letter code, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "EN" => Some(Self::En),
            "SA" => Some(Self::Sa),
            "KN" => Some(Self::Kn),
            "HI" => Some(Self::Hi),
            _ => None,
        }
    }
}

/// Contract every calendar system implements.
///
/// Implementations are stateless apart from injected providers and may be
/// invoked concurrently without synchronization.
pub trait CalendarEngine: Send + Sync {
    /// Registry key for this civilization, lower case.
    fn key(&self) -> &'static str;

    /// Compute the calendrical state at a civil instant.
    ///
    /// Pure given its inputs and provider calls. Fails with
    /// `InvalidInput`/`MissingLocalTime` on bad civil input; provider
    /// failures propagate unchanged.
    fn compute_snapshot(
        &self,
        civil: &CivilInstant,
        location: &LocationContext,
        language: Language,
    ) -> Result<CalendarSnapshot, EngineError>;

    /// Find the next `count` future instants sharing the origin's
    /// configuration.
    ///
    /// Returns exactly `count` matches, strictly increasing in time and
    /// all strictly later than `search.now()`, or `RecurrenceExhausted`.
    fn find_recurrences(
        &self,
        civil: &CivilInstant,
        location: &LocationContext,
        count: usize,
        language: Language,
        search: &SearchContext,
    ) -> Result<Vec<RecurrenceMatch>, EngineError>;

    /// One-line description of a recurrence for feed entries.
    fn feed_description(&self, matched: &RecurrenceMatch) -> String;

    /// Serialize the next twenty recurrences through the feed collaborator.
    fn render_feed(
        &self,
        civil: &CivilInstant,
        location: &LocationContext,
        title: &str,
        language: Language,
        serializer: &dyn FeedSerializer,
        search: &SearchContext,
    ) -> Result<String, EngineError> {
        let matches =
            self.find_recurrences(civil, location, FEED_RECURRENCE_COUNT, language, search)?;
        let entries: Vec<FeedEntry> = matches
            .iter()
            .map(|m| FeedEntry {
                date: m.civil.date,
                time: m.civil.time,
                description: self.feed_description(m),
            })
            .collect();
        Ok(serializer.serialize(title, &entries))
    }

    /// Identifiers of the visualization modules that apply to a snapshot.
    fn visual_hints(&self, snapshot: &CalendarSnapshot) -> &'static [&'static str];

    /// Opaque context value handed to the external prompt builder.
    fn ai_context(&self, snapshot: &CalendarSnapshot) -> Value;

    /// Civilization-specific guidance text for the prompt builder.
    fn ai_instructions(&self) -> &'static str;
}
