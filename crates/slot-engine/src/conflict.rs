//! List the busy intervals a candidate event collides with.
//!
//! Adjacent intervals (where one ends exactly when another starts) are NOT
//! conflicts.

use serde::Serialize;

use crate::interval::{BusyInterval, Interval};

/// A busy interval overlapping a candidate event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conflict {
    pub busy: BusyInterval,
    pub overlap_minutes: i64,
}

/// Find every busy interval that overlaps `event`, in input order.
///
/// Two intervals overlap when `a.start < b.end && b.start < a.end`.
/// The overlap duration is `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_conflicts(event: &Interval, busy: &[BusyInterval]) -> Vec<Conflict> {
    busy.iter()
        .filter(|b| event.overlaps(b))
        .map(|b| {
            let overlap_start = event.start.max(b.start);
            let overlap_end = event.end.min(b.end);
            Conflict {
                busy: *b,
                overlap_minutes: (overlap_end - overlap_start).num_minutes(),
            }
        })
        .collect()
}
