// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{assert_close, create_business_config, create_incident, march};
use crate::{StatsReport, compute_stats_report, config_periods};
use chrono::{TimeZone, Utc};
use dispo_domain::{Incident, PeriodType, Severity, StatsConfig};

#[test]
fn test_trailing_months_report() {
    let config: StatsConfig = StatsConfig {
        period_type: PeriodType::Month,
        period_count: 3,
        ..create_business_config()
    };
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();

    let report: StatsReport = compute_stats_report(&[], &config, now);

    let labels: Vec<&str> = report.periods.iter().map(|p| p.label.as_str()).collect();
    assert_eq!(labels, vec!["Jan 24", "Feb 24", "Mar 24"]);
    assert_eq!(report.availability.points.len(), 3);
    assert!(report.durations.groups.is_empty());
    assert_eq!(report.durations.period_totals, vec![0.0, 0.0, 0.0]);
}

#[test]
fn test_weekly_report_from_start_date() {
    let config: StatsConfig = StatsConfig {
        period_type: PeriodType::Week,
        period_count: 2,
        start_date: Some(march(4, 0)),
        ..create_business_config()
    };
    let incidents: Vec<Incident> = vec![
        create_incident("1", Severity::Critical, march(4, 9), march(4, 11))
            .with_target("Network", "Router"),
        create_incident("2", Severity::Minor, march(12, 9), march(12, 12))
            .with_target("Network", "Switch"),
    ];

    let report: StatsReport = compute_stats_report(&incidents, &config, march(20, 0));

    assert_eq!(report.periods.len(), 2);
    assert_close(report.availability.points[0].red_pct, 4.0);
    assert_close(report.availability.points[1].red_pct, 0.0);
    assert_close(report.availability.average_red_pct, 2.0);
    assert_close(report.durations.period_totals[0], 2.0);
    assert_close(report.durations.period_totals[1], 3.0);
    assert_close(report.durations.grand_total, 5.0);
}

#[test]
fn test_non_positive_count_yields_empty_report() {
    let config: StatsConfig = StatsConfig {
        period_count: 0,
        ..create_business_config()
    };

    assert!(config_periods(&config, march(20, 0)).is_empty());
    let report: StatsReport = compute_stats_report(&[], &config, march(20, 0));
    assert!(report.availability.points.is_empty());
    assert_close(report.durations.grand_total, 0.0);
}

#[test]
fn test_report_serializes_camel_case() {
    let config: StatsConfig = StatsConfig {
        period_type: PeriodType::Day,
        period_count: 1,
        start_date: Some(march(4, 0)),
        ..create_business_config()
    };

    let report: StatsReport = compute_stats_report(&[], &config, march(20, 0));
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["periods"][0]["label"], "04/03");
    assert_eq!(json["availability"]["points"][0]["greenPct"], 100.0);
    assert_eq!(json["availability"]["averageRedPct"], 0.0);
    assert_eq!(json["durations"]["grandTotal"], 0.0);
}
