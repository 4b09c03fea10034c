//! Lunar phase search: locating the preceding new moon.
//!
//! The Moon-Sun elongation grows monotonically through each synodic month
//! and wraps 360 -> 0 at the new moon. Walking back in one-day strides
//! finds the bracketing day, bisection refines it.

use chrono::{DateTime, Duration, Utc};

use kala_vedic::normalize_360;

use crate::error::EngineError;
use crate::providers::{AstronomyProvider, Body};

/// Longest stretch without a new moon, with margin over the synodic month.
const MAX_WALKBACK_DAYS: i64 = 35;

/// Bisection refinement limit; one day narrows below a millisecond in 40.
const MAX_BISECTIONS: u32 = 48;

fn elongation_at(
    provider: &dyn AstronomyProvider,
    utc: DateTime<Utc>,
) -> Result<f64, EngineError> {
    let moon = provider.sidereal_longitude(utc, Body::Moon)?;
    let sun = provider.sidereal_longitude(utc, Body::Sun)?;
    Ok(normalize_360(moon - sun))
}

/// Most recent instant at or before `utc` where the elongation crossed 0.
pub fn prev_new_moon(
    provider: &dyn AstronomyProvider,
    utc: DateTime<Utc>,
) -> Result<DateTime<Utc>, EngineError> {
    let mut hi = utc;
    let mut e_hi = elongation_at(provider, hi)?;

    // Bracket the wrap: elongation at the earlier edge exceeds the later.
    let mut lo = hi;
    let mut bracketed = false;
    for _ in 0..MAX_WALKBACK_DAYS {
        lo = hi - Duration::days(1);
        let e_lo = elongation_at(provider, lo)?;
        if e_lo > e_hi {
            bracketed = true;
            break;
        }
        hi = lo;
        e_hi = e_lo;
    }
    if !bracketed {
        return Err(EngineError::NoConvergence(
            "no new moon within the walkback window",
        ));
    }

    // Bisect: inside the bracket the elongation is near 360 before the
    // crossing and near 0 after it.
    for _ in 0..MAX_BISECTIONS {
        if hi - lo < Duration::seconds(1) {
            break;
        }
        let mid = lo + (hi - lo) / 2;
        let e_mid = elongation_at(provider, mid)?;
        if e_mid < 180.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    Ok(hi)
}
