// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use chrono::{DateTime, TimeZone, Utc};
use dispo_domain::{Incident, PeriodType, ServiceHours, Severity, StatsConfig};

use crate::StatsRequest;

/// An instant in March 2024, UTC.
pub fn march(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
}

/// One week starting Monday 2024-03-04, service 08:00-18:00 on weekdays.
pub fn create_week_config() -> StatsConfig {
    StatsConfig {
        period_type: PeriodType::Week,
        period_count: 1,
        start_date: Some(march(4, 0)),
        service_hours: ServiceHours::weekdays(8..18),
        exclude_weekends: true,
        ..StatsConfig::default()
    }
}

/// A closed critical incident on the network router.
pub fn create_incident(id: &str, start: DateTime<Utc>, end: DateTime<Utc>) -> Incident {
    Incident::new(id, Severity::Critical, start)
        .with_end(end)
        .with_target("network", "router")
}

/// A request carrying `config` and a fixed evaluation instant.
pub fn create_request(incidents: Vec<Incident>, config: Option<StatsConfig>) -> StatsRequest {
    StatsRequest {
        incidents,
        config,
        now: Some(march(11, 0)),
    }
}
