//! Presentation helpers for callers showing resolved times to a booker.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Offset, TimeZone, Utc};

/// Human-readable event length: `"45 mins"`, `"1 hr"`, `"2 hrs 30 mins"`.
pub fn format_event_description(duration_minutes: u32) -> String {
    let hours = duration_minutes / 60;
    let minutes = duration_minutes % 60;
    let minutes_str = format!("{} {}", minutes, if minutes > 1 { "mins" } else { "min" });
    let hours_str = format!("{} {}", hours, if hours > 1 { "hrs" } else { "hr" });

    if hours == 0 {
        return minutes_str;
    }
    if minutes == 0 {
        return hours_str;
    }
    format!("{} {}", hours_str, minutes_str)
}

/// Short UTC offset label for `tz` at instant `at`: `"GMT"`, `"GMT-6"`, `"GMT+5:30"`.
pub fn format_timezone_offset<Tz: TimeZone>(tz: &Tz, at: DateTime<Utc>) -> String {
    let seconds = tz.offset_from_utc_datetime(&at.naive_utc()).fix().local_minus_utc();
    if seconds == 0 {
        return "GMT".to_string();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let total_minutes = seconds.unsigned_abs() / 60;
    let (hours, minutes) = (total_minutes / 60, total_minutes % 60);
    if minutes == 0 {
        format!("GMT{}{}", sign, hours)
    } else {
        format!("GMT{}{}:{:02}", sign, hours, minutes)
    }
}

/// Project instants into a viewer's timezone and group them by the viewer's
/// calendar date. Order within a date follows input order.
pub fn group_by_local_date<Tz: TimeZone>(
    times: &[DateTime<Utc>],
    tz: &Tz,
) -> BTreeMap<NaiveDate, Vec<DateTime<Tz>>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<DateTime<Tz>>> = BTreeMap::new();
    for t in times {
        let local = t.with_timezone(tz);
        by_date.entry(local.date_naive()).or_default().push(local);
    }
    by_date
}
