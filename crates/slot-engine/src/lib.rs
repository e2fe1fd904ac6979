//! # slot-engine
//!
//! Decides which candidate meeting start times are actually bookable.
//!
//! Reconciles a weekly availability pattern (per weekday, in the schedule
//! owner's timezone), busy intervals from an external calendar, and a list of
//! candidate start instants with a fixed event duration. Pure computation: no
//! I/O, no shared state, safe to call concurrently.
//!
//! ## Modules
//!
//! - [`resolver`] — Filter candidates down to the bookable subset
//! - [`schedule`] — Validated weekly schedule types and the weekday grouper
//! - [`expander`] — Local availability windows → absolute intervals for a date
//! - [`zone`] — Injected timezone conversion capability
//! - [`dst`] — DST gap policies for window boundaries
//! - [`interval`] — Interval type, overlap and containment predicates
//! - [`busy`] — Merged, searchable index of busy intervals
//! - [`conflict`] — Which busy intervals a candidate collides with
//! - [`request`] — JSON request loader
//! - [`display`] — Duration, offset and per-date grouping helpers for callers
//! - [`error`] — Error types

pub mod busy;
pub mod conflict;
pub mod display;
pub mod dst;
pub mod error;
pub mod expander;
pub mod interval;
pub mod request;
pub mod resolver;
pub mod schedule;
pub mod zone;

pub use conflict::find_conflicts;
pub use dst::DstPolicy;
pub use error::SlotError;
pub use interval::{BusyInterval, Interval};
pub use request::ResolveRequest;
pub use resolver::{candidate_bounds, resolve, Evaluation, ResolveOptions, Resolver, Verdict};
pub use schedule::{group_by_weekday, AvailabilityWindow, TimeOfDay, WeekdayGroups, WeeklySchedule};
