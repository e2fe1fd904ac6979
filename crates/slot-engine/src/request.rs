//! JSON loader boundary: a resolution request as a caller sends it.
//!
//! Raw strings are validated here, once, into the engine's typed inputs.
//!
//! ```json
//! {
//!   "schedule": {
//!     "timezone": "America/Chicago",
//!     "availabilities": [
//!       { "dayOfWeek": "Monday", "startTime": "09:00", "endTime": "17:00" }
//!     ]
//!   },
//!   "busy": [{ "start": "2024-01-08T15:00:00Z", "end": "2024-01-08T15:30:00Z" }],
//!   "candidates": ["2024-01-08T22:45:00Z"],
//!   "durationInMinutes": 30
//! }
//! ```

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};
use crate::interval::{BusyInterval, Interval};
use crate::schedule::{RawSchedule, WeeklySchedule};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRequest {
    pub schedule: RawSchedule,
    #[serde(default)]
    pub busy: Vec<RawInterval>,
    #[serde(default)]
    pub candidates: Vec<String>,
    pub duration_in_minutes: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInterval {
    pub start: String,
    pub end: String,
}

/// A validated resolution request.
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub schedule: WeeklySchedule,
    pub busy: Vec<BusyInterval>,
    pub candidates: Vec<DateTime<Utc>>,
    pub duration_minutes: u32,
}

impl ResolveRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawRequest = serde_json::from_str(json)?;
        Self::from_raw(&raw)
    }

    /// # Errors
    /// Fails on the first invalid timezone, window, instant, or busy interval.
    pub fn from_raw(raw: &RawRequest) -> Result<Self> {
        let schedule = WeeklySchedule::from_raw(&raw.schedule)?;
        let busy = raw
            .busy
            .iter()
            .map(|b| Interval::try_new(parse_instant(&b.start)?, parse_instant(&b.end)?))
            .collect::<Result<Vec<_>>>()?;
        let candidates = raw
            .candidates
            .iter()
            .map(|c| parse_instant(c.as_str()))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            schedule,
            busy,
            candidates,
            duration_minutes: raw.duration_in_minutes,
        })
    }
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 (with offset, e.g. "2026-02-17T14:00:00-06:00") and naive
/// datetimes (e.g. "2026-02-17T14:00:00"), which are taken as UTC.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .map_err(|e| SlotError::InvalidInstant(format!("'{}': {}", s, e)))
}
