//! Feed entry shape handed to the feed-serialization collaborator.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Number of recurrences a rendered feed carries.
pub const FEED_RECURRENCE_COUNT: usize = 20;

/// One event row for the feed serializer. The engines produce these; the
/// feed grammar belongs to the collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeedEntry {
    /// Civil date of the occurrence.
    pub date: NaiveDate,
    /// Civil time of the occurrence.
    pub time: NaiveTime,
    /// Human-readable description.
    pub description: String,
}
