// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use dispo_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// CSV content could not be read.
    InvalidCsvFormat {
        /// Why the CSV was rejected.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::InvalidCsvFormat { reason } => write!(f, "Invalid CSV format: {reason}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidSeverity(value) => Self::InvalidInput {
                field: String::from("severity"),
                message: format!("unknown severity '{value}'"),
            },
            DomainError::InvalidServiceHour { .. } => Self::DomainRuleViolation {
                rule: String::from("service_hours"),
                message: err.to_string(),
            },
            DomainError::PeriodCountTooLarge { .. } => Self::DomainRuleViolation {
                rule: String::from("period_count"),
                message: err.to_string(),
            },
            DomainError::InvalidTimezone(name) => Self::InvalidInput {
                field: String::from("timezone"),
                message: format!("unknown timezone '{name}'"),
            },
            DomainError::DateParseError { .. } => Self::InvalidInput {
                field: String::from("date"),
                message: err.to_string(),
            },
        }
    }
}
