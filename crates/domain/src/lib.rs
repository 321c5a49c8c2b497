// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and time primitives for the Dispo availability engine.
//!
//! Everything here is a pure function over value types: no I/O, no clock.
//! The evaluation instant is always supplied by the caller.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod incident_intervals;
mod interval;
mod local_time;
mod periods;
mod service_calendar;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use incident_intervals::collect_incident_intervals;
pub use interval::{
    Interval, delta_to_hours, intersect, merge, subtract, total_duration, total_hours,
    total_minutes,
};
pub use local_time::{resolve_local, to_local};
pub use periods::{MAX_PERIOD_COUNT, generate_periods, period_label};
pub use service_calendar::{HourRange, generate_service_intervals, hour_ranges};

// Re-export public types
pub use types::{Incident, PeriodBucket, PeriodType, ServiceHours, Severity, StatsConfig};
pub use validation::{parse_date, parse_timezone, validate_service_hours, validate_stats_config};

// Callers name the timezone type without depending on chrono-tz directly.
pub use chrono_tz::Tz;
