//! Error types for slot-engine operations.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    #[error("Invalid day of week: {0}")]
    InvalidWeekday(String),

    #[error("Invalid event duration: {0} minutes (must be greater than zero)")]
    InvalidDuration(u32),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Invalid interval: end {end} is before start {start}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Invalid request JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for SlotError {
    fn from(e: serde_json::Error) -> Self {
        SlotError::Json(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SlotError>;
