//! Search context: the clock and cancellation token threaded through
//! recurrence searches.
//!
//! The recurrence scan is the one operation whose cost is unbounded in
//! principle, so callers bound it with a timeout around the call and the
//! token below; the scan checks the token between candidate days.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};

use crate::error::EngineError;

/// Clock plus cancellation token for a recurrence search.
#[derive(Debug, Clone)]
pub struct SearchContext {
    now: DateTime<Utc>,
    cancel: Arc<AtomicBool>,
}

impl SearchContext {
    /// Context anchored at the system clock.
    pub fn new() -> Self {
        Self::at(Utc::now())
    }

    /// Context anchored at an explicit "now" (deterministic searches, tests).
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            cancel: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The "now" all results must be strictly later than.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Token handle for an external watchdog; setting it stops the search
    /// at the next checkpoint.
    pub fn cancel_token(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Fail with [`EngineError::Cancelled`] if cancellation was requested.
    pub fn checkpoint(&self) -> Result<(), EngineError> {
        if self.cancel.load(Ordering::Relaxed) {
            Err(EngineError::Cancelled)
        } else {
            Ok(())
        }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}
