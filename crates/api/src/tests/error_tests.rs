// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::Weekday;
use dispo_domain::{DomainError, MAX_PERIOD_COUNT};

use crate::ApiError;

#[test]
fn test_invalid_service_hour_is_rule_violation() {
    let err: ApiError = DomainError::InvalidServiceHour {
        weekday: Weekday::Tue,
        hour: 24,
    }
    .into();
    match err {
        ApiError::DomainRuleViolation { rule, message } => {
            assert_eq!(rule, "service_hours");
            assert!(message.contains("24"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_oversized_period_count_is_rule_violation() {
    let err: ApiError = DomainError::PeriodCountTooLarge {
        count: MAX_PERIOD_COUNT + 1,
        max: MAX_PERIOD_COUNT,
    }
    .into();
    assert!(matches!(
        err,
        ApiError::DomainRuleViolation { ref rule, .. } if rule == "period_count"
    ));
}

#[test]
fn test_invalid_severity_is_invalid_input() {
    let err: ApiError = DomainError::InvalidSeverity(String::from("huge")).into();
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "severity"));
}

#[test]
fn test_display_messages() {
    let err: ApiError = ApiError::InvalidCsvFormat {
        reason: String::from("Missing required headers: id"),
    };
    assert_eq!(
        err.to_string(),
        "Invalid CSV format: Missing required headers: id"
    );

    let err: ApiError = ApiError::InvalidInput {
        field: String::from("end"),
        message: String::from("end must not be before start"),
    };
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'end': end must not be before start"
    );
}
