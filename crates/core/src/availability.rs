// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability per period: the stacked percentage series.
//!
//! Each period is split into three shares of its service time:
//!
//! - red: downtime caused by the monitored service (responsible incidents)
//! - blue: downtime with an external cause, minus any time already red
//! - green: the remainder
//!
//! ## Invariants
//!
//! - Only `critique` and `fatal` incidents count
//! - Downtime outside the service calendar is ignored
//! - Responsible time takes precedence where both kinds overlap
//! - The three shares lie in `[0, 100]` and sum to 100
//! - A period with no service time is reported as 100% green

use chrono::{DateTime, Utc};
use dispo_domain::{
    Incident, Interval, PeriodBucket, StatsConfig, collect_incident_intervals, intersect, merge,
    subtract, total_minutes,
};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Availability of a single period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSeriesPoint {
    /// Period label.
    pub label: String,
    /// Period start.
    pub start: DateTime<Utc>,
    /// Period end (exclusive).
    pub end: DateTime<Utc>,
    /// Share of service time without downtime.
    pub green_pct: f64,
    /// Share of service time lost to external causes only.
    pub blue_pct: f64,
    /// Share of service time lost to responsible incidents.
    pub red_pct: f64,
    /// Service time of the period, in minutes.
    pub service_minutes: f64,
    /// Responsible downtime inside service time, in minutes.
    pub responsible_minutes: f64,
    /// External-only downtime inside service time, in minutes.
    pub non_responsible_minutes: f64,
}

/// Availability of every period, plus the mean red share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySeries {
    /// One point per period, in period order.
    pub points: Vec<TopSeriesPoint>,
    /// Unweighted arithmetic mean of `red_pct` across periods.
    pub average_red_pct: f64,
}

fn downtime_in_service(
    bucket: &PeriodBucket,
    incidents: &[Incident],
    responsible: bool,
    service: &[Interval],
    now: DateTime<Utc>,
) -> Vec<Interval> {
    let raw: Vec<Interval> =
        collect_incident_intervals(bucket.start, bucket.end, incidents, Some(responsible), now);
    intersect(&merge(&raw), service)
}

/// Computes the availability of one period.
///
/// # Arguments
///
/// * `bucket` - The period to evaluate
/// * `incidents` - All incidents; filtering happens here
/// * `config` - Service calendar configuration
/// * `now` - Evaluation instant used as the end of open incidents
#[must_use]
pub fn compute_availability_point(
    bucket: &PeriodBucket,
    incidents: &[Incident],
    config: &StatsConfig,
    now: DateTime<Utc>,
) -> TopSeriesPoint {
    let service: Vec<Interval> = config.service_intervals(bucket.start, bucket.end);
    let service_minutes: f64 = total_minutes(&service);

    let responsible: Vec<Interval> = downtime_in_service(bucket, incidents, true, &service, now);
    let non_responsible: Vec<Interval> =
        downtime_in_service(bucket, incidents, false, &service, now);
    let external_only: Vec<Interval> = subtract(&non_responsible, &responsible);

    let responsible_minutes: f64 = total_minutes(&responsible);
    let non_responsible_minutes: f64 = total_minutes(&external_only);

    let (red_pct, blue_pct): (f64, f64) = if service_minutes > 0.0 {
        let red: f64 = (responsible_minutes / service_minutes * 100.0).min(100.0);
        let blue: f64 = (non_responsible_minutes / service_minutes * 100.0).min(100.0 - red);
        (red, blue)
    } else {
        (0.0, 0.0)
    };

    TopSeriesPoint {
        label: bucket.label.clone(),
        start: bucket.start,
        end: bucket.end,
        green_pct: 100.0 - red_pct - blue_pct,
        blue_pct,
        red_pct,
        service_minutes,
        responsible_minutes,
        non_responsible_minutes,
    }
}

/// Computes the availability of every period.
///
/// Periods are independent of each other; they are evaluated in order.
#[must_use]
pub fn compute_availability_series(
    periods: &[PeriodBucket],
    incidents: &[Incident],
    config: &StatsConfig,
    now: DateTime<Utc>,
) -> AvailabilitySeries {
    debug!(
        periods = periods.len(),
        incidents = incidents.len(),
        "Computing availability series"
    );

    let points: Vec<TopSeriesPoint> = periods
        .iter()
        .map(|bucket| compute_availability_point(bucket, incidents, config, now))
        .collect();

    let average_red_pct: f64 = mean(points.iter().map(|point| point.red_pct));

    AvailabilitySeries {
        points,
        average_red_pct,
    }
}

/// Unweighted arithmetic mean; zero for an empty input.
fn mean(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let len: usize = values.len();
    if len == 0 {
        return 0.0;
    }
    values.sum::<f64>() / len.to_f64().unwrap_or(f64::NAN)
}
