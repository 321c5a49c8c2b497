// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Expansion of the weekly service schedule into concrete intervals.
//!
//! ## Invariants
//!
//! - Days are evaluated in the configured timezone
//! - Excluded dates and (optionally) Saturdays and Sundays produce no service
//! - Consecutive hours collapse into one interval per run; runs on different
//!   days are emitted separately and never merged here
//! - Every emitted interval is clipped to the requested window

use crate::interval::Interval;
use crate::local_time::{resolve_local, to_local};
use crate::types::ServiceHours;
use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeDelta, Utc, Weekday};
use chrono_tz::Tz;
use std::collections::BTreeSet;

/// A run of consecutive service hours, `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourRange {
    /// First hour of the run.
    pub start_hour: u8,
    /// Hour following the last hour of the run (up to 24).
    pub end_hour: u8,
}

/// Collapses a set of hours into runs of consecutive hours.
///
/// Hours are sorted and deduplicated first; values above 23 are ignored.
///
/// # Example
///
/// ```text
/// {8, 9, 10, 14, 15} -> [8, 11), [14, 16)
/// ```
#[must_use]
pub fn hour_ranges(hours: &[u8]) -> Vec<HourRange> {
    let valid: BTreeSet<u8> = hours.iter().copied().filter(|hour| *hour < 24).collect();

    let mut ranges: Vec<HourRange> = Vec::new();
    for hour in valid {
        match ranges.last_mut() {
            Some(range) if range.end_hour == hour => range.end_hour = hour + 1,
            _ => ranges.push(HourRange {
                start_hour: hour,
                end_hour: hour + 1,
            }),
        }
    }
    ranges
}

/// Returns whether a calendar day carries no service at all.
fn is_excluded_day(
    day: NaiveDate,
    exclude_weekends: bool,
    excluded_dates: &BTreeSet<NaiveDate>,
) -> bool {
    excluded_dates.contains(&day)
        || (exclude_weekends && matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
}

/// Generates the service intervals inside `[period_start, period_end)`.
///
/// # Arguments
///
/// * `period_start` - Inclusive start of the window
/// * `period_end` - Exclusive end of the window
/// * `service_hours` - Active hours for each weekday
/// * `exclude_weekends` - Whether Saturdays and Sundays are skipped entirely
/// * `excluded_dates` - Calendar dates skipped entirely
/// * `tz` - Timezone in which days and hours are read
///
/// # Returns
///
/// One interval per run of consecutive hours per day, ordered by start.
/// An empty or inverted window yields no intervals.
#[must_use]
pub fn generate_service_intervals(
    period_start: DateTime<Utc>,
    period_end: DateTime<Utc>,
    service_hours: &ServiceHours,
    exclude_weekends: bool,
    excluded_dates: &BTreeSet<NaiveDate>,
    tz: Tz,
) -> Vec<Interval> {
    if period_end <= period_start {
        return Vec::new();
    }

    let first_day: NaiveDate = to_local(tz, period_start).date();
    let last_day: NaiveDate = to_local(tz, period_end).date();

    let mut intervals: Vec<Interval> = Vec::new();
    for day in first_day.iter_days().take_while(|day| *day <= last_day) {
        if is_excluded_day(day, exclude_weekends, excluded_dates) {
            continue;
        }

        let midnight = day.and_time(NaiveTime::MIN);
        for range in hour_ranges(service_hours.hours_for(day.weekday())) {
            let at_hour = |hour: u8| {
                midnight
                    .checked_add_signed(TimeDelta::hours(i64::from(hour)))
                    .map(|local| resolve_local(tz, local))
            };
            let (Some(start), Some(end)) = (at_hour(range.start_hour), at_hour(range.end_hour))
            else {
                continue;
            };

            if let Some(interval) = Interval::new(start.max(period_start), end.min(period_end)) {
                intervals.push(interval);
            }
        }
    }
    intervals
}
