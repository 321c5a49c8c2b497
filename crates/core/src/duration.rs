// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Incident duration per cause and per period: the breakdown series.
//!
//! Unlike the availability series, every severity counts here and durations
//! are wall-clock hours, not restricted to the service calendar.

use chrono::{DateTime, Utc};
use dispo_domain::{Incident, PeriodBucket, delta_to_hours};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Colors assigned to groups in first-seen order, cycling when exhausted.
pub const PALETTE: [&str; 10] = [
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

/// Fallback name for a missing category or element.
pub const UNKNOWN_NAME: &str = "unknown";

/// Identity of a breakdown group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupKey {
    /// Stable grouping key.
    pub key: String,
    /// Human-readable name shown in legends.
    pub display_name: String,
}

/// Groups incidents by affected category and element.
#[must_use]
pub fn category_element_key(incident: &Incident) -> GroupKey {
    let category: &str = incident
        .target_category_name
        .as_deref()
        .unwrap_or(UNKNOWN_NAME);
    let element: &str = incident
        .target_element_name
        .as_deref()
        .unwrap_or(UNKNOWN_NAME);
    GroupKey {
        key: format!("{category}::{element}"),
        display_name: format!("{category} - {element}"),
    }
}

/// Hours per period for one group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BottomSeriesGroup {
    pub key: String,
    pub display_name: String,
    /// Position in the palette.
    pub color_index: usize,
    /// Palette color at `color_index`.
    pub color: String,
    /// Incident hours per period, in period order.
    pub durations_by_period: Vec<f64>,
    /// Sum of `durations_by_period`.
    pub total_duration: f64,
}

/// Breakdown of incident hours by group and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationSeries {
    /// Groups in first-seen order.
    pub groups: Vec<BottomSeriesGroup>,
    /// Hours per period across all groups.
    pub period_totals: Vec<f64>,
    /// Hours across all groups and periods.
    pub grand_total: f64,
}

/// Computes the breakdown with a caller-supplied grouping.
///
/// Groups are created in the order their first incident appears, which
/// fixes their palette color. Reordering the input may recolor groups.
///
/// # Arguments
///
/// * `periods` - The period buckets
/// * `incidents` - All incidents, of any severity
/// * `now` - Evaluation instant used as the end of open incidents
/// * `key_fn` - Maps an incident to its group
#[must_use]
pub fn compute_duration_series_by<F>(
    periods: &[PeriodBucket],
    incidents: &[Incident],
    now: DateTime<Utc>,
    key_fn: F,
) -> DurationSeries
where
    F: Fn(&Incident) -> GroupKey,
{
    debug!(
        periods = periods.len(),
        incidents = incidents.len(),
        "Computing duration series"
    );

    let mut groups: Vec<BottomSeriesGroup> = Vec::new();
    let mut index_by_key: HashMap<String, usize> = HashMap::new();

    for incident in incidents {
        let group_key: GroupKey = key_fn(incident);
        let index: usize = *index_by_key.entry(group_key.key.clone()).or_insert_with(|| {
            let color_index: usize = groups.len() % PALETTE.len();
            groups.push(BottomSeriesGroup {
                key: group_key.key,
                display_name: group_key.display_name,
                color_index,
                color: PALETTE[color_index].to_string(),
                durations_by_period: vec![0.0; periods.len()],
                total_duration: 0.0,
            });
            groups.len() - 1
        });

        let durations: &mut Vec<f64> = &mut groups[index].durations_by_period;
        for (slot, bucket) in durations.iter_mut().zip(periods) {
            if let Some(overlap) = incident.overlap(bucket.start, bucket.end, now) {
                *slot += delta_to_hours(overlap.duration());
            }
        }
    }

    for group in &mut groups {
        group.total_duration = group.durations_by_period.iter().sum();
    }

    let period_totals: Vec<f64> = (0..periods.len())
        .map(|index| {
            groups
                .iter()
                .map(|group| group.durations_by_period[index])
                .sum()
        })
        .collect();
    let grand_total: f64 = groups.iter().map(|group| group.total_duration).sum();

    DurationSeries {
        groups,
        period_totals,
        grand_total,
    }
}

/// Computes the breakdown grouped by category and element.
#[must_use]
pub fn compute_duration_series(
    periods: &[PeriodBucket],
    incidents: &[Incident],
    now: DateTime<Utc>,
) -> DurationSeries {
    compute_duration_series_by(periods, incidents, now, category_element_key)
}
