// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Generation of the period buckets that form the columns of a chart.
//!
//! ## Invariants
//!
//! - Buckets are ordered oldest first and contiguous: each bucket ends where
//!   the next one starts, and the last one ends one unit after its start
//! - Units are calendar units evaluated in the configured timezone, so a
//!   month bucket lasts 28 to 31 days
//! - Without an explicit start the newest bucket starts at `now`; otherwise
//!   the oldest bucket starts at the given date
//! - A non-positive count yields no buckets
//! - Generation stops early where the calendar itself runs out

use crate::local_time::{resolve_local, to_local};
use crate::types::{PeriodBucket, PeriodType};
use chrono::{DateTime, Datelike, Months, NaiveDateTime, TimeDelta, Utc};
use chrono_tz::Tz;

/// Upper bound on the number of buckets generated in one call.
///
/// Larger counts are clamped; strict validation rejects them.
pub const MAX_PERIOD_COUNT: i64 = 10_000;

/// Moves a wall-clock time by `steps` units of `period_type`.
///
/// Months and years keep the day of month, clamped to the last day of
/// shorter months. Returns `None` on calendar overflow.
fn shift(local: NaiveDateTime, period_type: PeriodType, steps: i64) -> Option<NaiveDateTime> {
    match period_type {
        PeriodType::Day => local.checked_add_signed(TimeDelta::try_days(steps)?),
        PeriodType::Week => local.checked_add_signed(TimeDelta::try_weeks(steps)?),
        PeriodType::Month => shift_months(local, steps),
        PeriodType::Year => shift_months(local, steps.checked_mul(12)?),
    }
}

fn shift_months(local: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude: Months = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        local.checked_add_months(magnitude)
    } else {
        local.checked_sub_months(magnitude)
    }
}

/// Formats the label of a bucket starting at `local`.
///
/// - day: `DD/MM`
/// - week: `S<ISO week number>`
/// - month: `<abbreviated month> <2-digit year>`
/// - year: `<4-digit year>`
#[must_use]
pub fn period_label(period_type: PeriodType, local: NaiveDateTime) -> String {
    match period_type {
        PeriodType::Day => local.format("%d/%m").to_string(),
        PeriodType::Week => format!("S{}", local.iso_week().week()),
        PeriodType::Month => local.format("%b %y").to_string(),
        PeriodType::Year => local.format("%Y").to_string(),
    }
}

/// Generates `period_count` contiguous buckets.
///
/// # Arguments
///
/// * `period_type` - Calendar unit of each bucket
/// * `period_count` - Number of buckets; values below 1 yield none, values
///   above [`MAX_PERIOD_COUNT`] are clamped
/// * `start_date` - Start of the oldest bucket, or `None` to trail back from `now`
/// * `now` - Evaluation instant
/// * `tz` - Timezone in which calendar arithmetic and labels are evaluated
///
/// # Example
///
/// ```text
/// month, 3 periods, no start date, now = 2024-03-15
///
/// Jan 24: 2024-01-15 -> 2024-02-15
/// Feb 24: 2024-02-15 -> 2024-03-15
/// Mar 24: 2024-03-15 -> 2024-04-15
/// ```
#[must_use]
pub fn generate_periods(
    period_type: PeriodType,
    period_count: i64,
    start_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    tz: Tz,
) -> Vec<PeriodBucket> {
    if period_count < 1 {
        return Vec::new();
    }
    let period_count: i64 = period_count.min(MAX_PERIOD_COUNT);

    let anchor: NaiveDateTime = to_local(tz, start_date.unwrap_or(now));
    let direction: i64 = if start_date.is_some() { 1 } else { -1 };

    // Walk away from the anchor until the calendar runs out.
    let mut starts: Vec<NaiveDateTime> = (0..period_count)
        .map(|step| shift(anchor, period_type, step * direction))
        .take_while(Option::is_some)
        .flatten()
        .collect();
    if start_date.is_none() {
        starts.reverse();
    }

    starts
        .iter()
        .enumerate()
        .filter_map(|(index, start)| {
            let end: NaiveDateTime = match starts.get(index + 1) {
                Some(next) => *next,
                None => shift(*start, period_type, 1)?,
            };
            Some(PeriodBucket::new(
                period_label(period_type, *start),
                resolve_local(tz, *start),
                resolve_local(tz, end),
            ))
        })
        .collect()
}
