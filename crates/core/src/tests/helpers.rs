// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, TimeZone, Utc};
use dispo_domain::{Incident, PeriodBucket, ServiceHours, Severity, StatsConfig};

pub const TOLERANCE: f64 = 1e-9;

/// Instant in March 2024 (the 4th is a Monday).
pub fn march(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
}

/// Monday to Friday, 08:00-18:00, weekends excluded, UTC.
pub fn create_business_config() -> StatsConfig {
    StatsConfig {
        service_hours: ServiceHours::weekdays(8..18),
        exclude_weekends: true,
        ..StatsConfig::default()
    }
}

/// The week of Monday 2024-03-04.
pub fn create_week_bucket() -> PeriodBucket {
    PeriodBucket::new(String::from("S10"), march(4, 0), march(11, 0))
}

pub fn create_incident(
    id: &str,
    severity: Severity,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Incident {
    Incident::new(id, severity, start).with_end(end)
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < TOLERANCE,
        "expected {expected}, got {actual}"
    );
}
