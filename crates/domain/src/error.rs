// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised by strict input parsing and validation.
///
/// The aggregation functions themselves never fail; these errors only come
/// from the parsing helpers and `validate_stats_config`, which callers use
/// when they want to reject malformed input instead of tolerating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Severity string is not one of the known levels.
    InvalidSeverity(String),
    /// A service hour lies outside `0..=23`.
    InvalidServiceHour {
        /// The weekday the hour was declared for.
        weekday: chrono::Weekday,
        /// The offending hour value.
        hour: u8,
    },
    /// More periods requested than a single computation allows.
    PeriodCountTooLarge {
        /// The requested count.
        count: i64,
        /// The largest accepted count.
        max: i64,
    },
    /// Timezone name is not a known IANA zone.
    InvalidTimezone(String),
    /// Failed to parse a date or timestamp from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSeverity(value) => write!(f, "Invalid severity: {value}"),
            Self::InvalidServiceHour { weekday, hour } => {
                write!(
                    f,
                    "Invalid service hour {hour} on {weekday}. Must be between 0 and 23"
                )
            }
            Self::PeriodCountTooLarge { count, max } => {
                write!(f, "Period count {count} exceeds the maximum of {max}")
            }
            Self::InvalidTimezone(name) => write!(f, "Invalid timezone: {name}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
