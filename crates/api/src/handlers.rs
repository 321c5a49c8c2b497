// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers at the API boundary.
//!
//! Handlers are synchronous and clock-free: the transport layer supplies
//! its default configuration and the current instant, and a request may
//! override both.

use chrono::{DateTime, Utc};
use dispo::{
    AvailabilitySeries, DurationSeries, StatsReport, compute_availability_series,
    compute_duration_series, compute_stats_report, config_periods,
};
use dispo_domain::{Interval, PeriodBucket, StatsConfig, total_minutes, validate_stats_config};
use tracing::debug;

use crate::csv_export::export_report_csv;
use crate::error::ApiError;
use crate::request_response::{
    AvailabilityResponse, DurationResponse, ServiceIntervalsRequest, ServiceIntervalsResponse,
    StatsRequest,
};

/// Picks the request configuration over the default and validates it.
fn resolve_config(
    requested: Option<StatsConfig>,
    defaults: &StatsConfig,
) -> Result<StatsConfig, ApiError> {
    let config: StatsConfig = requested.unwrap_or_else(|| defaults.clone());
    validate_stats_config(&config).map_err(ApiError::from)?;
    Ok(config)
}

/// Computes the full statistics report.
///
/// # Arguments
///
/// * `request` - Incidents plus optional configuration and evaluation instant
/// * `defaults` - Configuration used when the request carries none
/// * `clock_now` - Instant used when the request carries none
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if a service hour is outside `0..=23`.
pub fn compute_stats(
    request: StatsRequest,
    defaults: &StatsConfig,
    clock_now: DateTime<Utc>,
) -> Result<StatsReport, ApiError> {
    let config: StatsConfig = resolve_config(request.config, defaults)?;
    let now: DateTime<Utc> = request.now.unwrap_or(clock_now);
    debug!(incidents = request.incidents.len(), %now, "Handling stats request");
    Ok(compute_stats_report(&request.incidents, &config, now))
}

/// Computes the availability series only.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if a service hour is outside `0..=23`.
pub fn compute_availability(
    request: StatsRequest,
    defaults: &StatsConfig,
    clock_now: DateTime<Utc>,
) -> Result<AvailabilityResponse, ApiError> {
    let config: StatsConfig = resolve_config(request.config, defaults)?;
    let now: DateTime<Utc> = request.now.unwrap_or(clock_now);
    let periods: Vec<PeriodBucket> = config_periods(&config, now);
    let availability: AvailabilitySeries =
        compute_availability_series(&periods, &request.incidents, &config, now);
    Ok(AvailabilityResponse {
        now,
        periods,
        availability,
    })
}

/// Computes the per-cause duration series only.
///
/// The service calendar does not apply to durations, but the configuration
/// still decides the periods.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` if a service hour is outside `0..=23`.
pub fn compute_durations(
    request: StatsRequest,
    defaults: &StatsConfig,
    clock_now: DateTime<Utc>,
) -> Result<DurationResponse, ApiError> {
    let config: StatsConfig = resolve_config(request.config, defaults)?;
    let now: DateTime<Utc> = request.now.unwrap_or(clock_now);
    let periods: Vec<PeriodBucket> = config_periods(&config, now);
    let durations: DurationSeries = compute_duration_series(&periods, &request.incidents, now);
    Ok(DurationResponse {
        now,
        periods,
        durations,
    })
}

/// Computes the report and renders it as CSV text.
///
/// # Errors
///
/// Returns `ApiError::DomainRuleViolation` for an invalid configuration, or
/// `ApiError::Internal` if the CSV could not be written.
pub fn compute_stats_csv(
    request: StatsRequest,
    defaults: &StatsConfig,
    clock_now: DateTime<Utc>,
) -> Result<String, ApiError> {
    let report: StatsReport = compute_stats(request, defaults, clock_now)?;
    export_report_csv(&report).map_err(|e| ApiError::Internal {
        message: format!("Failed to export CSV: {e}"),
    })
}

/// Expands the service calendar over a window.
///
/// # Errors
///
/// Returns an error if:
/// - `end` is before `start`
/// - A service hour is outside `0..=23`
pub fn service_intervals(
    request: ServiceIntervalsRequest,
    defaults: &StatsConfig,
) -> Result<ServiceIntervalsResponse, ApiError> {
    if request.end < request.start {
        return Err(ApiError::InvalidInput {
            field: String::from("end"),
            message: String::from("end must not be before start"),
        });
    }

    let config: StatsConfig = resolve_config(request.config, defaults)?;
    let intervals: Vec<Interval> = config.service_intervals(request.start, request.end);
    let total_minutes: f64 = total_minutes(&intervals);
    debug!(
        intervals = intervals.len(),
        total_minutes, "Expanded service calendar"
    );

    Ok(ServiceIntervalsResponse {
        intervals,
        total_minutes,
    })
}
