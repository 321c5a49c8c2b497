// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Cross-module checks of the interval algebra against the calendar and
//! the incident collector.

use crate::{
    Incident, Interval, ServiceHours, Severity, StatsConfig, collect_incident_intervals,
    intersect, merge, subtract, total_duration, total_minutes,
};
use chrono::{DateTime, TimeZone, Utc};

fn utc(d: u32, h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, d, h, m, 0).unwrap()
}

fn business_week_config() -> StatsConfig {
    StatsConfig {
        service_hours: ServiceHours::weekdays(8..18),
        exclude_weekends: true,
        ..StatsConfig::default()
    }
}

fn overlapping_incidents() -> Vec<Incident> {
    vec![
        Incident::new("a", Severity::Critical, utc(4, 7, 0)).with_end(utc(4, 12, 0)),
        Incident::new("b", Severity::Fatal, utc(4, 11, 0)).with_end(utc(4, 20, 0)),
        Incident::new("c", Severity::Critical, utc(4, 9, 30)).with_end(utc(5, 9, 0)),
        Incident::new("d", Severity::Fatal, utc(6, 8, 0))
            .with_end(utc(6, 10, 0))
            .with_responsible(false),
    ]
}

#[test]
fn test_business_week_has_3000_service_minutes() {
    let config: StatsConfig = business_week_config();
    let service: Vec<Interval> = config.service_intervals(utc(4, 0, 0), utc(11, 0, 0));
    assert_eq!(total_minutes(&service), 3000.0);
}

#[test]
fn test_responsible_downtime_never_exceeds_service_time() {
    let config: StatsConfig = business_week_config();
    let service: Vec<Interval> = config.service_intervals(utc(4, 0, 0), utc(11, 0, 0));
    let raw: Vec<Interval> = collect_incident_intervals(
        utc(4, 0, 0),
        utc(11, 0, 0),
        &overlapping_incidents(),
        Some(true),
        utc(11, 0, 0),
    );

    let counted: Vec<Interval> = intersect(&merge(&raw), &service);
    assert!(total_minutes(&counted) <= total_minutes(&service));
    // Monday 08:00-18:00 fully down, Tuesday 08:00-09:00.
    assert_eq!(total_minutes(&counted), 660.0);
}

#[test]
fn test_external_time_is_not_double_counted() {
    let config: StatsConfig = business_week_config();
    let service: Vec<Interval> = config.service_intervals(utc(4, 0, 0), utc(11, 0, 0));
    let incidents: Vec<Incident> = vec![
        Incident::new("r", Severity::Critical, utc(4, 9, 0)).with_end(utc(4, 11, 0)),
        Incident::new("x", Severity::Critical, utc(4, 10, 0))
            .with_end(utc(4, 12, 0))
            .with_responsible(false),
    ];

    let responsible: Vec<Interval> = intersect(
        &merge(&collect_incident_intervals(
            utc(4, 0, 0),
            utc(11, 0, 0),
            &incidents,
            Some(true),
            utc(11, 0, 0),
        )),
        &service,
    );
    let external: Vec<Interval> = intersect(
        &merge(&collect_incident_intervals(
            utc(4, 0, 0),
            utc(11, 0, 0),
            &incidents,
            Some(false),
            utc(11, 0, 0),
        )),
        &service,
    );
    let external_only: Vec<Interval> = subtract(&external, &responsible);

    assert_eq!(total_minutes(&responsible), 120.0);
    assert_eq!(total_minutes(&external_only), 60.0);
    assert!(total_duration(&external_only) <= total_duration(&external));
}
