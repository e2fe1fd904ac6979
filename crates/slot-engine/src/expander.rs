//! Window expansion -- turns weekly local availability windows into absolute
//! intervals for one concrete calendar date.
//!
//! Weekday classification happens in the schedule's timezone, never in the
//! caller's: a candidate at 23:30 Sunday in Chicago is a Sunday candidate even
//! though it is already Monday in UTC.

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};

use crate::dst::DstPolicy;
use crate::interval::Interval;
use crate::schedule::{AvailabilityWindow, WeekdayGroups};
use crate::zone::{local_date, resolve_local, ZoneConverter};

/// Expand windows onto `date` in the converter's zone.
///
/// Produces one interval per window, in input order. A window whose boundary
/// falls in a DST gap is dropped when `policy` is [`DstPolicy::Skip`].
/// Degenerate windows are dropped before their boundaries are resolved, and so
/// is any window that a gap shift leaves empty or inverted.
///
/// # Arguments
/// - `date` -- Local calendar date in the schedule's timezone
/// - `windows` -- Windows configured for `date`'s weekday
/// - `zone` -- The schedule's timezone
/// - `policy` -- How to treat boundaries in a DST gap
pub fn expand_windows<Z: ZoneConverter + ?Sized>(
    date: NaiveDate,
    windows: &[AvailabilityWindow],
    zone: &Z,
    policy: DstPolicy,
) -> Vec<Interval> {
    windows
        .iter()
        .filter(|w| !w.is_degenerate())
        .filter_map(|w| {
            let start = resolve_local(zone, w.start.on(date), policy);
            let end = resolve_local(zone, w.end.on(date), policy);
            match (start, end) {
                (Some(start), Some(end)) if start < end => Some(Interval { start, end }),
                (Some(_), Some(_)) => {
                    log::debug!(
                        "skipping window {}-{} on {}: empty after DST shift",
                        w.start,
                        w.end,
                        date
                    );
                    None
                }
                _ => {
                    log::debug!(
                        "skipping window {}-{} on {}: boundary falls in a DST gap",
                        w.start,
                        w.end,
                        date
                    );
                    None
                }
            }
        })
        .collect()
}

/// The schedule-local weekday of `instant` and that day's absolute windows.
///
/// The windows are `None` when the weekday has no configured windows at all,
/// and `Some` (possibly empty) otherwise.
pub fn windows_for_instant<Z: ZoneConverter + ?Sized>(
    groups: &WeekdayGroups,
    zone: &Z,
    instant: DateTime<Utc>,
    policy: DstPolicy,
) -> (Weekday, Option<Vec<Interval>>) {
    let date = local_date(zone, instant);
    let weekday = date.weekday();
    let windows = groups.get(weekday);
    if windows.is_empty() {
        return (weekday, None);
    }
    (weekday, Some(expand_windows(date, windows, zone, policy)))
}
