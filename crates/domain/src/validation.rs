// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::periods::MAX_PERIOD_COUNT;
use crate::types::{ServiceHours, StatsConfig};
use chrono::{NaiveDate, Weekday};
use chrono_tz::Tz;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Validates that every declared service hour is a valid hour of the day.
///
/// # Errors
///
/// Returns `DomainError::InvalidServiceHour` for the first hour above 23.
pub fn validate_service_hours(service_hours: &ServiceHours) -> Result<(), DomainError> {
    for weekday in WEEKDAYS {
        if let Some(hour) = service_hours
            .hours_for(weekday)
            .iter()
            .find(|hour| **hour > 23)
        {
            return Err(DomainError::InvalidServiceHour {
                weekday,
                hour: *hour,
            });
        }
    }
    Ok(())
}

/// Validates a configuration strictly.
///
/// The engine tolerates every configuration (out-of-range hours are
/// ignored, non-positive counts produce no periods, oversized counts are
/// clamped); this check is for callers that prefer to reject such input
/// up front.
///
/// # Errors
///
/// Returns an error if:
/// - A service hour is outside `0..=23`
/// - `period_count` exceeds `MAX_PERIOD_COUNT`
pub fn validate_stats_config(config: &StatsConfig) -> Result<(), DomainError> {
    validate_service_hours(&config.service_hours)?;
    if config.period_count > MAX_PERIOD_COUNT {
        return Err(DomainError::PeriodCountTooLarge {
            count: config.period_count,
            max: MAX_PERIOD_COUNT,
        });
    }
    Ok(())
}

/// Parses an IANA timezone name.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimezone` if the name is unknown.
pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| DomainError::InvalidTimezone(name.to_string()))
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|err| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: err.to_string(),
        }
    })
}
