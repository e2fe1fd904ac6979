//! DST transition policies for availability window boundaries.

use serde::{Deserialize, Serialize};

/// Policy for window boundaries that fall in a DST gap.
///
/// Ambiguous local times (the repeated hour when clocks fall back) always
/// resolve to the earlier of the two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DstPolicy {
    /// Move a nonexistent local time forward by the length of the gap
    /// (e.g., 02:30 during spring forward becomes 03:30).
    #[default]
    ShiftForward,
    /// Drop the window for that date if either boundary does not exist.
    Skip,
}
