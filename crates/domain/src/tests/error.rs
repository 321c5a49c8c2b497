// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;
use chrono::Weekday;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidSeverity(String::from("bloquant"));
    assert_eq!(format!("{err}"), "Invalid severity: bloquant");

    let err: DomainError = DomainError::InvalidServiceHour {
        weekday: Weekday::Tue,
        hour: 24,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid service hour 24 on Tue. Must be between 0 and 23"
    );

    let err: DomainError = DomainError::PeriodCountTooLarge {
        count: 20_000,
        max: 10_000,
    };
    assert_eq!(
        format!("{err}"),
        "Period count 20000 exceeds the maximum of 10000"
    );

    let err: DomainError = DomainError::InvalidTimezone(String::from("Mars/Olympus"));
    assert_eq!(format!("{err}"), "Invalid timezone: Mars/Olympus");

    let err: DomainError = DomainError::DateParseError {
        date_string: String::from("2024-13-01"),
        error: String::from("input is out of range"),
    };
    assert_eq!(
        format!("{err}"),
        "Failed to parse date '2024-13-01': input is out of range"
    );
}
