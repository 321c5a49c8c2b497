// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Incident, PeriodType, ServiceHours, Severity, StatsConfig, Tz};
use chrono::{NaiveDate, TimeZone, Utc, Weekday};

#[test]
fn test_severity_parsing() {
    assert_eq!("critique".parse::<Severity>().unwrap(), Severity::Critical);
    assert_eq!("Critical".parse::<Severity>().unwrap(), Severity::Critical);
    assert_eq!("MINEUR".parse::<Severity>().unwrap(), Severity::Minor);
    assert_eq!("fatal".parse::<Severity>().unwrap(), Severity::Fatal);
    assert!(matches!(
        "bloquant".parse::<Severity>(),
        Err(DomainError::InvalidSeverity(_))
    ));
}

#[test]
fn test_severity_downtime_classification() {
    assert!(!Severity::Minor.counts_toward_downtime());
    assert!(Severity::Critical.counts_toward_downtime());
    assert!(Severity::Fatal.counts_toward_downtime());
}

#[test]
fn test_incident_deserializes_tracker_payload() {
    let json: &str = r#"{
        "id": "INC-42",
        "severity": "critique",
        "startDate": "2024-03-04T09:00:00Z",
        "endDate": null,
        "targetCategoryName": "Network",
        "targetElementName": "Core switch"
    }"#;
    let incident: Incident = serde_json::from_str(json).unwrap();

    assert_eq!(incident.id, "INC-42");
    assert_eq!(incident.severity, Severity::Critical);
    assert!(incident.responsible);
    assert_eq!(
        incident.start_date,
        Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap()
    );
    assert!(incident.end_date.is_none());
    assert_eq!(incident.target_element_name.as_deref(), Some("Core switch"));
}

#[test]
fn test_incident_serializes_wire_severity() {
    let incident: Incident = Incident::new(
        "1",
        Severity::Minor,
        Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap(),
    )
    .with_responsible(false);
    let json: serde_json::Value = serde_json::to_value(&incident).unwrap();

    assert_eq!(json["severity"], "mineur");
    assert_eq!(json["responsible"], false);
    assert_eq!(json["startDate"], "2024-03-04T09:00:00Z");
}

#[test]
fn test_incident_resolved_end() {
    let start = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
    let now = Utc.with_ymd_and_hms(2024, 3, 4, 12, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 4, 10, 0, 0).unwrap();

    let open: Incident = Incident::new("1", Severity::Fatal, start);
    assert_eq!(open.resolved_end(now), now);

    let closed: Incident = open.with_end(end);
    assert_eq!(closed.resolved_end(now), end);
}

#[test]
fn test_period_type_falls_back_to_day() {
    assert_eq!(PeriodType::from("week"), PeriodType::Week);
    assert_eq!(PeriodType::from(" MONTH "), PeriodType::Month);
    assert_eq!(PeriodType::from("quarter"), PeriodType::Day);

    let parsed: PeriodType = serde_json::from_str("\"semester\"").unwrap();
    assert_eq!(parsed, PeriodType::Day);
    assert_eq!(
        serde_json::to_string(&PeriodType::Year).unwrap(),
        "\"year\""
    );
}

#[test]
fn test_service_hours_missing_weekday_is_empty() {
    let hours: ServiceHours = serde_json::from_str(r#"{ "monday": [8, 9, 10] }"#).unwrap();
    assert_eq!(hours.hours_for(Weekday::Mon), &[8, 9, 10]);
    assert!(hours.hours_for(Weekday::Sun).is_empty());
}

#[test]
fn test_stats_config_partial_json_uses_defaults() {
    let config: StatsConfig = serde_json::from_str(
        r#"{
            "periodType": "week",
            "periodCount": 4,
            "excludedDates": ["2024-12-25"],
            "timezone": "Europe/Paris"
        }"#,
    )
    .unwrap();

    assert_eq!(config.period_type, PeriodType::Week);
    assert_eq!(config.period_count, 4);
    assert!(config.start_date.is_none());
    assert!(config.exclude_weekends);
    assert_eq!(config.timezone, Tz::Europe__Paris);
    assert!(
        config
            .excluded_dates
            .contains(&NaiveDate::from_ymd_opt(2024, 12, 25).unwrap())
    );
    assert_eq!(config.service_hours, ServiceHours::weekdays(8..18));
}
