// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Projection of downtime incidents onto an analysis window.

use crate::interval::Interval;
use crate::types::Incident;
use chrono::{DateTime, Utc};

/// Collects the raw downtime intervals of `incidents` inside a window.
///
/// Only `critique` and `fatal` incidents contribute. When
/// `responsible_filter` is set, only incidents whose responsibility flag
/// matches are kept. Open incidents end at `now`.
///
/// The result is not merged: callers merge after filtering so that
/// responsible and non-responsible time stay separate.
///
/// # Arguments
///
/// * `period_start` - Inclusive start of the window
/// * `period_end` - Exclusive end of the window
/// * `incidents` - Incidents to project
/// * `responsible_filter` - Responsibility flag to keep, or `None` for all
/// * `now` - Evaluation instant used as the end of open incidents
#[must_use]
pub fn collect_incident_intervals(
    period_start: DateTime<Utc>,
    period_end: DateTime<Utc>,
    incidents: &[Incident],
    responsible_filter: Option<bool>,
    now: DateTime<Utc>,
) -> Vec<Interval> {
    incidents
        .iter()
        .filter(|incident| incident.severity.counts_toward_downtime())
        .filter(|incident| responsible_filter.is_none_or(|wanted| incident.responsible == wanted))
        .filter_map(|incident| incident.overlap(period_start, period_end, now))
        .collect()
}
