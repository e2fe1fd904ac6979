//! Timezone conversion as an explicit capability.
//!
//! The resolver never consults ambient process-local timezone state. Everything
//! it knows about wall clocks comes through a [`ZoneConverter`], which is
//! implemented for IANA zones (`chrono_tz::Tz`) and for fixed offsets.

use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::dst::DstPolicy;

/// Converts between absolute instants and local wall-clock fields.
pub trait ZoneConverter {
    /// The local wall-clock datetime of `instant`.
    fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime;

    /// Every absolute instant that renders as `local`.
    ///
    /// `None` in a DST gap, `Ambiguous` in a DST fold.
    fn from_local(&self, local: NaiveDateTime) -> LocalResult<DateTime<Utc>>;
}

impl ZoneConverter for Tz {
    fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(self).naive_local()
    }

    fn from_local(&self, local: NaiveDateTime) -> LocalResult<DateTime<Utc>> {
        self.from_local_datetime(&local)
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl ZoneConverter for FixedOffset {
    fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(self).naive_local()
    }

    fn from_local(&self, local: NaiveDateTime) -> LocalResult<DateTime<Utc>> {
        self.from_local_datetime(&local)
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// The calendar date of `instant` as seen in the converter's zone.
pub fn local_date<Z: ZoneConverter + ?Sized>(zone: &Z, instant: DateTime<Utc>) -> NaiveDate {
    zone.to_local(instant).date()
}

/// Longest DST gap searched when shifting a nonexistent time forward.
const MAX_GAP_MINUTES: i64 = 3 * 60;

/// Turn a local wall-clock datetime into one absolute instant under `policy`.
///
/// Returns `None` only when the local time falls in a gap and the policy is
/// [`DstPolicy::Skip`] (or no valid time exists within a plausible gap).
pub fn resolve_local<Z: ZoneConverter + ?Sized>(
    zone: &Z,
    local: NaiveDateTime,
    policy: DstPolicy,
) -> Option<DateTime<Utc>> {
    match zone.from_local(local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earliest, latest) => Some(earliest.min(latest)),
        LocalResult::None => match policy {
            DstPolicy::Skip => None,
            DstPolicy::ShiftForward => shift_forward(zone, local),
        },
    }
}

/// Interpret a nonexistent local time with the UTC offset in force just
/// before the gap, which moves it forward on the wall clock by the gap length.
fn shift_forward<Z: ZoneConverter + ?Sized>(
    zone: &Z,
    local: NaiveDateTime,
) -> Option<DateTime<Utc>> {
    let mut probe = local;
    for _ in 0..MAX_GAP_MINUTES {
        probe -= Duration::minutes(1);
        if let Some(before) = single_or_earliest(zone.from_local(probe)) {
            let offset = zone.to_local(before) - before.naive_utc();
            return Some(Utc.from_utc_datetime(&(local - offset)));
        }
    }
    log::warn!(
        "no valid local time within {} minutes before {}",
        MAX_GAP_MINUTES,
        local
    );
    None
}

fn single_or_earliest(result: LocalResult<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match result {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(a, b) => Some(a.min(b)),
        LocalResult::None => None,
    }
}
