// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use chrono::{DateTime, Utc};
use dispo::{AvailabilitySeries, DurationSeries};
use dispo_domain::{Incident, Interval, PeriodBucket, StatsConfig};
use serde::{Deserialize, Serialize};

/// Request for any of the statistics computations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRequest {
    /// Incidents fetched by the caller.
    #[serde(default)]
    pub incidents: Vec<Incident>,
    /// Configuration; the server default applies when absent.
    #[serde(default)]
    pub config: Option<StatsConfig>,
    /// Evaluation instant; the caller's clock applies when absent.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// Response carrying the availability series only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityResponse {
    /// The evaluation instant actually used.
    pub now: DateTime<Utc>,
    /// The generated periods.
    pub periods: Vec<PeriodBucket>,
    /// Availability per period.
    pub availability: AvailabilitySeries,
}

/// Response carrying the per-cause duration series only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationResponse {
    /// The evaluation instant actually used.
    pub now: DateTime<Utc>,
    /// The generated periods.
    pub periods: Vec<PeriodBucket>,
    /// Incident hours per cause and period.
    pub durations: DurationSeries,
}

/// Request to expand the service calendar over a window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceIntervalsRequest {
    /// Inclusive start of the window.
    pub start: DateTime<Utc>,
    /// Exclusive end of the window.
    pub end: DateTime<Utc>,
    /// Calendar configuration; the server default applies when absent.
    #[serde(default)]
    pub config: Option<StatsConfig>,
}

/// The service intervals of a window.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceIntervalsResponse {
    /// Service intervals, ordered by start.
    pub intervals: Vec<Interval>,
    /// Summed service time in minutes.
    pub total_minutes: f64,
}
