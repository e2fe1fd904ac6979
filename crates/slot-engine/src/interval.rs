//! Absolute time intervals and the two predicates the resolver is built on.
//!
//! Overlap is strict: an interval ending exactly when another starts does NOT
//! overlap it. Containment is closed at both ends: an instant equal to a window
//! boundary is inside the window.

use crate::error::{Result, SlotError};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A span between two absolute instants.
///
/// Used for busy intervals, event intervals, and expanded availability windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// A pre-existing commitment pulled from an external calendar.
pub type BusyInterval = Interval;

impl Interval {
    /// Build an interval, rejecting `end < start`.
    ///
    /// Zero-length intervals are allowed.
    pub fn try_new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if end < start {
            return Err(SlotError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// The event interval implied by a candidate start and a duration.
    pub fn from_start(start: DateTime<Utc>, duration_minutes: u32) -> Self {
        Self {
            start,
            end: start + Duration::minutes(i64::from(duration_minutes)),
        }
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// `true` when the two intervals share more than a boundary instant.
    pub fn overlaps(&self, other: &Interval) -> bool {
        overlaps(self, other)
    }

    /// `true` when `event` lies entirely within `self`, boundaries included.
    pub fn contains(&self, event: &Interval) -> bool {
        contains(self, event)
    }
}

/// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
///
/// Adjacent intervals (`a.end == b.start`) are NOT overlapping.
pub fn overlaps(a: &Interval, b: &Interval) -> bool {
    a.start < b.end && b.start < a.end
}

/// Closed containment of a single instant.
pub fn contains_instant(window: &Interval, t: DateTime<Utc>) -> bool {
    window.start <= t && t <= window.end
}

/// Both endpoints of `event` fall inside `window`.
pub fn contains(window: &Interval, event: &Interval) -> bool {
    contains_instant(window, event.start) && contains_instant(window, event.end)
}
