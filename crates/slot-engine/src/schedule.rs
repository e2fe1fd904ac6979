//! Weekly availability schedule: validated value types and the weekday grouper.
//!
//! Everything here is validated once, when the schedule is loaded. The resolver
//! never re-parses a time-of-day string or a timezone identifier.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// A local wall-clock time of day, minute resolution.
///
/// Always within `00:00..=23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTimeOfDay(format!(
                "{:02}:{:02} is outside 00:00-23:59",
                hour, minute
            )));
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    pub fn to_naive_time(self) -> NaiveTime {
        // Fields are range-checked on construction.
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or_default()
    }

    /// Combine with a calendar date into a local wall-clock datetime.
    pub fn on(self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.to_naive_time())
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    /// Parse `"HH:MM"`, or `"HH:MM:SS"` with zero seconds.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SlotError::InvalidTimeOfDay(s.to_string());

        let mut parts = s.trim().split(':');
        let field = |f: &str| -> Result<u32> {
            if f.is_empty() || f.len() > 2 || !f.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            f.parse().map_err(|_| invalid())
        };

        let hour = parts.next().ok_or_else(invalid)?;
        let minute = parts.next().ok_or_else(invalid)?;
        if let Some(seconds) = parts.next() {
            if field(seconds)? != 0 {
                return Err(invalid());
            }
        }
        if parts.next().is_some() {
            return Err(invalid());
        }

        TimeOfDay::new(field(hour)?, field(minute)?).map_err(|_| invalid())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Parse a weekday label.
///
/// Accepts full English day names (`"Monday"`) and three-letter abbreviations,
/// case-insensitively. Anything else is an error rather than a silent miss.
pub fn parse_weekday(s: &str) -> Result<Weekday> {
    match s.trim().to_ascii_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Mon),
        "tuesday" | "tue" => Ok(Weekday::Tue),
        "wednesday" | "wed" => Ok(Weekday::Wed),
        "thursday" | "thu" => Ok(Weekday::Thu),
        "friday" | "fri" => Ok(Weekday::Fri),
        "saturday" | "sat" => Ok(Weekday::Sat),
        "sunday" | "sun" => Ok(Weekday::Sun),
        _ => Err(SlotError::InvalidWeekday(s.to_string())),
    }
}

/// A recurring weekly local time range on one day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AvailabilityWindow {
    pub day_of_week: Weekday,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl AvailabilityWindow {
    pub fn new(day_of_week: Weekday, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            day_of_week,
            start,
            end,
        }
    }

    /// A window whose start is not before its end can never contain an event.
    pub fn is_degenerate(&self) -> bool {
        self.start >= self.end
    }
}

/// A user's weekly availability, interpreted in a single reference timezone.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySchedule {
    pub timezone: Tz,
    pub windows: Vec<AvailabilityWindow>,
}

impl WeeklySchedule {
    /// Build a schedule, resolving the IANA `timezone` identifier.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTimezone` if the identifier is empty or unknown.
    pub fn new(timezone: &str, windows: Vec<AvailabilityWindow>) -> Result<Self> {
        let tz = parse_timezone(timezone)?;
        for w in windows.iter().filter(|w| w.is_degenerate()) {
            log::warn!(
                "degenerate availability window {:?} {}-{} will never admit an event",
                w.day_of_week,
                w.start,
                w.end
            );
        }
        Ok(Self {
            timezone: tz,
            windows,
        })
    }

    /// Validate a schedule as it arrives from storage.
    ///
    /// Fails fast on the first bad timezone, weekday, or time-of-day value.
    pub fn from_raw(raw: &RawSchedule) -> Result<Self> {
        let windows = raw
            .availabilities
            .iter()
            .map(|a| {
                Ok(AvailabilityWindow::new(
                    parse_weekday(&a.day_of_week)?,
                    a.start_time.parse()?,
                    a.end_time.parse()?,
                ))
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(&raw.timezone, windows)
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// Resolve an IANA timezone identifier.
pub fn parse_timezone(timezone: &str) -> Result<Tz> {
    if timezone.trim().is_empty() {
        return Err(SlotError::InvalidTimezone("empty timezone".to_string()));
    }
    timezone
        .parse()
        .map_err(|_| SlotError::InvalidTimezone(timezone.to_string()))
}

/// A schedule row set as stored: string timezone, string weekdays and times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSchedule {
    pub timezone: String,
    #[serde(default)]
    pub availabilities: Vec<RawAvailability>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAvailability {
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
}

/// Availability windows partitioned by weekday.
///
/// Backed by a fixed seven-slot array indexed by `Weekday::num_days_from_monday`,
/// so every weekday has an entry. Within a day, windows keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdayGroups {
    days: [Vec<AvailabilityWindow>; 7],
}

impl WeekdayGroups {
    pub fn get(&self, day: Weekday) -> &[AvailabilityWindow] {
        &self.days[day.num_days_from_monday() as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.days.iter().all(Vec::is_empty)
    }

    /// Total number of windows across all days.
    pub fn len(&self) -> usize {
        self.days.iter().map(Vec::len).sum()
    }
}

/// Partition windows by their day of week.
pub fn group_by_weekday(windows: &[AvailabilityWindow]) -> WeekdayGroups {
    let mut groups = WeekdayGroups::default();
    for w in windows {
        groups.days[w.day_of_week.num_days_from_monday() as usize].push(*w);
    }
    groups
}
