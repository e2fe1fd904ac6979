//! Index over busy intervals for fast conflict checks.
//!
//! Sorts busy intervals by start time and merges overlapping or adjacent ones,
//! then answers "does this event overlap anything busy?" by binary search.
//! The answer is identical to scanning every interval with [`overlaps`].
//!
//! [`overlaps`]: crate::interval::overlaps

use crate::interval::{BusyInterval, Interval};

/// Sorted, non-overlapping busy periods.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusyIndex {
    merged: Vec<Interval>,
}

impl BusyIndex {
    pub fn new(busy: &[BusyInterval]) -> Self {
        Self {
            merged: merge_busy_periods(busy),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }

    /// The merged periods, sorted by start.
    pub fn periods(&self) -> &[Interval] {
        &self.merged
    }

    /// `true` if `event` overlaps any busy period.
    ///
    /// Touching a busy period at a boundary is not a conflict.
    pub fn conflicts_with(&self, event: &Interval) -> bool {
        // First period that ends after the event starts; anything earlier ends
        // at or before `event.start` and cannot overlap.
        let i = self.merged.partition_point(|p| p.end <= event.start);
        // A zero-length period at exactly `event.start` sorts before `i` but
        // also cannot overlap, so only the period at `i` needs checking.
        self.merged.get(i).is_some_and(|p| p.overlaps(event))
    }
}

/// Merge overlapping or adjacent busy periods.
///
/// Returns a sorted, non-overlapping list of intervals.
fn merge_busy_periods(busy: &[BusyInterval]) -> Vec<Interval> {
    let mut intervals: Vec<Interval> = busy.to_vec();
    if intervals.is_empty() {
        return Vec::new();
    }

    // Sort by start time (then by end time for stability).
    intervals.sort_by_key(|i| (i.start, i.end));

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        if let Some(last) = merged.last_mut() {
            if interval.start <= last.end {
                // Overlapping or adjacent -- extend the current period.
                last.end = last.end.max(interval.end);
                continue;
            }
        }
        merged.push(interval);
    }

    merged
}
