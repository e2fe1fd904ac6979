//! Availability resolution: which candidate start instants are bookable.
//!
//! A candidate `c` with duration `d` implies the event interval `[c, c + d]`.
//! It is accepted iff the event overlaps no busy interval AND both of its
//! endpoints lie inside a single availability window of `c`'s local weekday
//! in the schedule's timezone. Accepted candidates keep their input order;
//! nothing is sorted or deduplicated.

use chrono::{DateTime, Utc, Weekday};
use chrono_tz::Tz;
use serde::Serialize;

use crate::busy::BusyIndex;
use crate::conflict::{find_conflicts, Conflict};
use crate::dst::DstPolicy;
use crate::error::{Result, SlotError};
use crate::expander::windows_for_instant;
use crate::interval::{BusyInterval, Interval};
use crate::schedule::{group_by_weekday, AvailabilityWindow, WeekdayGroups, WeeklySchedule};
use crate::zone::ZoneConverter;

/// Tunables for a resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveOptions {
    pub dst_policy: DstPolicy,
}

/// Why a candidate was accepted or rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Verdict {
    /// Fits entirely inside `window` and collides with nothing.
    Accepted { window: Interval },
    /// Overlaps at least one busy interval.
    Busy { conflicts: Vec<Conflict> },
    /// The schedule has no windows on this local weekday.
    NoWindowsForDay { weekday: Weekday },
    /// Windows exist that day, but none holds the whole event.
    OutsideAvailability { weekday: Weekday },
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted { .. })
    }
}

/// The verdict for one candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub candidate: DateTime<Utc>,
    pub verdict: Verdict,
}

/// Outcome of the core check, before any conflict detail is gathered.
enum Outcome {
    Accepted(Interval),
    Busy,
    NoWindowsForDay(Weekday),
    OutsideAvailability(Weekday),
}

/// A schedule prepared for repeated resolution: windows grouped by weekday
/// once, timezone conversion injected.
#[derive(Debug, Clone)]
pub struct Resolver<Z = Tz> {
    zone: Z,
    groups: WeekdayGroups,
    options: ResolveOptions,
}

impl Resolver<Tz> {
    pub fn new(schedule: &WeeklySchedule) -> Self {
        Self::with_options(schedule, ResolveOptions::default())
    }

    pub fn with_options(schedule: &WeeklySchedule, options: ResolveOptions) -> Self {
        Self::with_zone(schedule.timezone, &schedule.windows, options)
    }
}

impl<Z: ZoneConverter> Resolver<Z> {
    /// Build a resolver over any timezone conversion capability.
    pub fn with_zone(zone: Z, windows: &[AvailabilityWindow], options: ResolveOptions) -> Self {
        Self {
            zone,
            groups: group_by_weekday(windows),
            options,
        }
    }

    pub fn options(&self) -> ResolveOptions {
        self.options
    }

    /// Filter `candidates` down to the bookable ones.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidDuration` if `duration_minutes` is zero.
    pub fn resolve(
        &self,
        candidates: &[DateTime<Utc>],
        busy: &[BusyInterval],
        duration_minutes: u32,
    ) -> Result<Vec<DateTime<Utc>>> {
        check_duration(duration_minutes)?;
        if candidates.is_empty() || self.groups.is_empty() {
            return Ok(Vec::new());
        }

        let index = BusyIndex::new(busy);
        let accepted: Vec<DateTime<Utc>> = candidates
            .iter()
            .copied()
            .filter(|&c| {
                let outcome = self.check(c, &index, duration_minutes);
                log_outcome(c, &outcome);
                matches!(outcome, Outcome::Accepted(_))
            })
            .collect();

        log::debug!(
            "resolved {} of {} candidates ({} busy intervals, {} windows)",
            accepted.len(),
            candidates.len(),
            busy.len(),
            self.groups.len()
        );
        Ok(accepted)
    }

    /// Evaluate every candidate and report why it was accepted or rejected.
    ///
    /// The accepted evaluations are exactly what [`Resolver::resolve`] returns.
    pub fn explain(
        &self,
        candidates: &[DateTime<Utc>],
        busy: &[BusyInterval],
        duration_minutes: u32,
    ) -> Result<Vec<Evaluation>> {
        check_duration(duration_minutes)?;

        let index = BusyIndex::new(busy);
        Ok(candidates
            .iter()
            .map(|&c| {
                let outcome = self.check(c, &index, duration_minutes);
                let verdict = match outcome {
                    Outcome::Accepted(window) => Verdict::Accepted { window },
                    Outcome::Busy => Verdict::Busy {
                        conflicts: find_conflicts(&Interval::from_start(c, duration_minutes), busy),
                    },
                    Outcome::NoWindowsForDay(weekday) => Verdict::NoWindowsForDay { weekday },
                    Outcome::OutsideAvailability(weekday) => {
                        Verdict::OutsideAvailability { weekday }
                    }
                };
                Evaluation {
                    candidate: c,
                    verdict,
                }
            })
            .collect())
    }

    fn check(&self, candidate: DateTime<Utc>, index: &BusyIndex, duration_minutes: u32) -> Outcome {
        let event = Interval::from_start(candidate, duration_minutes);
        if index.conflicts_with(&event) {
            return Outcome::Busy;
        }

        let (weekday, windows) =
            windows_for_instant(&self.groups, &self.zone, candidate, self.options.dst_policy);
        let Some(windows) = windows else {
            return Outcome::NoWindowsForDay(weekday);
        };

        match windows.into_iter().find(|w| w.contains(&event)) {
            Some(window) => Outcome::Accepted(window),
            None => Outcome::OutsideAvailability(weekday),
        }
    }
}

/// Filter `candidates` against `schedule` and `busy` with default options.
///
/// # Arguments
/// - `candidates` -- Prospective event starts, in the order they should be returned
/// - `schedule` -- Weekly availability in the owner's timezone
/// - `busy` -- Already-committed intervals covering the candidates' range
/// - `duration_minutes` -- Length of the event each candidate would start
///
/// # Errors
/// Returns `SlotError::InvalidDuration` if `duration_minutes` is zero.
pub fn resolve(
    candidates: &[DateTime<Utc>],
    schedule: &WeeklySchedule,
    busy: &[BusyInterval],
    duration_minutes: u32,
) -> Result<Vec<DateTime<Utc>>> {
    Resolver::new(schedule).resolve(candidates, busy, duration_minutes)
}

/// The range busy intervals must cover for these candidates: from the earliest
/// start to the latest start plus the event duration.
///
/// `None` for an empty candidate list.
pub fn candidate_bounds(candidates: &[DateTime<Utc>], duration_minutes: u32) -> Option<Interval> {
    let start = candidates.iter().min()?;
    let last = candidates.iter().max()?;
    Some(Interval {
        start: *start,
        end: Interval::from_start(*last, duration_minutes).end,
    })
}

fn check_duration(duration_minutes: u32) -> Result<()> {
    if duration_minutes == 0 {
        return Err(SlotError::InvalidDuration(duration_minutes));
    }
    Ok(())
}

fn log_outcome(candidate: DateTime<Utc>, outcome: &Outcome) {
    match outcome {
        Outcome::Accepted(window) => {
            log::trace!("{} accepted in window {} - {}", candidate, window.start, window.end)
        }
        Outcome::Busy => log::debug!("{} rejected: overlaps a busy interval", candidate),
        Outcome::NoWindowsForDay(day) => {
            log::debug!("{} rejected: no availability on {:?}", candidate, day)
        }
        Outcome::OutsideAvailability(day) => {
            log::debug!("{} rejected: outside every {:?} window", candidate, day)
        }
    }
}
