// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV preview and validation for incident import.
//!
//! Parses an incident tracker export into `Incident` values row by row.
//! Nothing is stored; the caller decides what to do with valid rows.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use csv::StringRecord;
use dispo_domain::{Incident, Severity, Tz, parse_date, resolve_local};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::error::ApiError;

/// A single row result from CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    /// The parsed incident (if valid).
    pub incident: Option<Incident>,
    /// The row status.
    pub status: CsvRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

/// Status of a CSV row validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvRowStatus {
    /// Row is valid and can be imported.
    Valid,
    /// Row has validation errors and cannot be imported.
    Invalid,
}

/// Result of CSV preview validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvPreviewResult {
    /// Per-row validation results.
    pub rows: Vec<CsvRowResult>,
    /// Total number of rows.
    pub total_rows: usize,
    /// Number of valid rows.
    pub valid_count: usize,
    /// Number of invalid rows.
    pub invalid_count: usize,
}

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &["id", "severity", "start_date"];

/// Formats accepted for timestamps without an offset.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let header_map: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(idx, header)| (normalize_header(header), idx))
        .collect();

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !header_map.contains_key(*required))
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Extracts a required field from a CSV row.
fn parse_required_field(
    get_field: &impl Fn(&str) -> Option<String>,
    field_name: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    let value: Option<String> = get_field(field_name);
    if value.is_none() {
        errors.push(format!("{field_name}: required field is missing or empty"));
    }
    value
}

/// Parses a timestamp cell.
///
/// RFC 3339 values carry their own offset. Values without one are read as
/// wall-clock time in `tz`; a bare date means local midnight.
fn parse_timestamp(value: &str, tz: Tz) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    if let Some(local) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Some(resolve_local(tz, local));
    }
    let date: NaiveDate = parse_date(value).ok()?;
    Some(resolve_local(tz, date.and_time(NaiveTime::MIN)))
}

fn parse_responsible(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "oui" => Some(true),
        "false" | "no" | "n" | "0" | "non" => Some(false),
        _ => None,
    }
}

/// Parses one CSV row into an `Incident`, collecting every error found.
fn parse_row(
    get_field: &impl Fn(&str) -> Option<String>,
    tz: Tz,
    errors: &mut Vec<String>,
) -> Option<Incident> {
    let id: Option<String> = parse_required_field(get_field, "id", errors);

    let severity: Option<Severity> = parse_required_field(get_field, "severity", errors)
        .and_then(|raw| match raw.parse::<Severity>() {
            Ok(severity) => Some(severity),
            Err(e) => {
                errors.push(format!("severity: {e}"));
                None
            }
        });

    let start_date: Option<DateTime<Utc>> = parse_required_field(get_field, "start_date", errors)
        .and_then(|raw| {
            let parsed: Option<DateTime<Utc>> = parse_timestamp(&raw, tz);
            if parsed.is_none() {
                errors.push(format!("start_date: invalid timestamp '{raw}'"));
            }
            parsed
        });

    let end_date: Option<DateTime<Utc>> = get_field("end_date").and_then(|raw| {
        let parsed: Option<DateTime<Utc>> = parse_timestamp(&raw, tz);
        if parsed.is_none() {
            errors.push(format!("end_date: invalid timestamp '{raw}'"));
        }
        parsed
    });

    let responsible: bool = match get_field("responsible") {
        None => true,
        Some(raw) => parse_responsible(&raw).unwrap_or_else(|| {
            errors.push(format!("responsible: expected a boolean, got '{raw}'"));
            true
        }),
    };

    if matches!((start_date, end_date), (Some(start), Some(end)) if end < start) {
        errors.push(String::from("end_date: must not be before start_date"));
    }

    if !errors.is_empty() {
        return None;
    }

    let mut incident: Incident = Incident::new(id?, severity?, start_date?);
    incident.end_date = end_date;
    incident.responsible = responsible;
    incident.target_category_name = get_field("category");
    incident.target_element_name = get_field("element");
    Some(incident)
}

/// Previews an incident CSV without storing anything.
///
/// Every data row yields a `CsvRowResult`. A row is invalid when a required
/// field is missing or unparsable, when `end_date` precedes `start_date`, or
/// when its `id` repeats an earlier row of the same file.
///
/// # Arguments
///
/// * `csv_content` - Raw CSV text including the header row
/// * `tz` - Timezone for timestamps written without an offset
///
/// # Errors
///
/// Returns `ApiError::InvalidCsvFormat` if the header row cannot be read or
/// lacks a required column. Row-level problems never fail the preview.
pub fn preview_incidents_csv(csv_content: &str, tz: Tz) -> Result<CsvPreviewResult, ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();
    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let mut results: Vec<CsvRowResult> = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    for (idx, record_result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;
        let mut errors: Vec<String> = Vec::new();

        let incident: Option<Incident> = match record_result {
            Ok(record) => {
                let get_field = |name: &str| -> Option<String> {
                    header_map
                        .get(name)
                        .and_then(|&col| record.get(col))
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                };
                parse_row(&get_field, tz, &mut errors)
            }
            Err(e) => {
                errors.push(format!("Failed to parse CSV row: {e}"));
                None
            }
        };

        let incident: Option<Incident> = incident.filter(|incident| {
            let fresh: bool = seen_ids.insert(incident.id.clone());
            if !fresh {
                errors.push(format!("id: duplicate incident id '{}'", incident.id));
            }
            fresh
        });

        let status: CsvRowStatus = if incident.is_some() {
            CsvRowStatus::Valid
        } else {
            CsvRowStatus::Invalid
        };

        results.push(CsvRowResult {
            row_number,
            incident,
            status,
            errors,
        });
    }

    let total_rows: usize = results.len();
    let valid_count: usize = results
        .iter()
        .filter(|r| r.status == CsvRowStatus::Valid)
        .count();
    let invalid_count: usize = total_rows - valid_count;

    debug!(total_rows, valid_count, invalid_count, "Previewed incident CSV");

    Ok(CsvPreviewResult {
        rows: results,
        total_rows,
        valid_count,
        invalid_count,
    })
}
