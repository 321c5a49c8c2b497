// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::availability::{AvailabilitySeries, compute_availability_series};
use crate::duration::{DurationSeries, compute_duration_series};
use chrono::{DateTime, Utc};
use dispo_domain::{Incident, PeriodBucket, StatsConfig, generate_periods};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Both chart series over the periods described by a configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsReport {
    /// The generated periods, oldest first.
    pub periods: Vec<PeriodBucket>,
    /// Availability per period.
    pub availability: AvailabilitySeries,
    /// Incident hours per cause and period.
    pub durations: DurationSeries,
}

/// Generates the period buckets described by `config`.
#[must_use]
pub fn config_periods(config: &StatsConfig, now: DateTime<Utc>) -> Vec<PeriodBucket> {
    generate_periods(
        config.period_type,
        config.period_count,
        config.start_date,
        now,
        config.timezone,
    )
}

/// Computes the full report for a set of incidents.
///
/// # Arguments
///
/// * `incidents` - Incidents fetched by the caller
/// * `config` - Period and service calendar configuration
/// * `now` - Evaluation instant; anchors trailing periods and ends open incidents
#[must_use]
pub fn compute_stats_report(
    incidents: &[Incident],
    config: &StatsConfig,
    now: DateTime<Utc>,
) -> StatsReport {
    let periods: Vec<PeriodBucket> = config_periods(config, now);
    debug!(
        period_type = %config.period_type,
        periods = periods.len(),
        incidents = incidents.len(),
        "Computing stats report"
    );

    let availability: AvailabilitySeries =
        compute_availability_series(&periods, incidents, config, now);
    let durations: DurationSeries = compute_duration_series(&periods, incidents, now);

    StatsReport {
        periods,
        availability,
        durations,
    }
}
