// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV rendering of a statistics report.
//!
//! One row per period. Fixed columns come first, then one column of
//! incident hours per group in group order, then the period total:
//!
//! ```text
//! period,start,end,green_pct,blue_pct,red_pct,<group>...,total
//! ```
//!
//! Percentages and hours are written with two decimals; instants as RFC 3339.

use chrono::SecondsFormat;
use dispo::StatsReport;
use thiserror::Error;

/// Fixed leading columns of the export.
pub const EXPORT_FIXED_HEADERS: [&str; 6] =
    ["period", "start", "end", "green_pct", "blue_pct", "red_pct"];

/// Errors raised while rendering CSV.
#[derive(Debug, Error)]
pub enum CsvExportError {
    #[error("failed to write CSV record: {0}")]
    Write(#[from] csv::Error),
    #[error("failed to flush CSV writer: {0}")]
    Flush(String),
    #[error("CSV output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

fn two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

/// Renders `report` as CSV text, header row included.
///
/// # Errors
///
/// Returns an error if a record cannot be written or the output is not UTF-8.
pub fn export_report_csv(report: &StatsReport) -> Result<String, CsvExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header: Vec<&str> = EXPORT_FIXED_HEADERS.to_vec();
    header.extend(
        report
            .durations
            .groups
            .iter()
            .map(|group| group.display_name.as_str()),
    );
    header.push("total");
    writer.write_record(&header)?;

    for (index, point) in report.availability.points.iter().enumerate() {
        let mut record: Vec<String> = vec![
            point.label.clone(),
            point.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            point.end.to_rfc3339_opts(SecondsFormat::Secs, true),
            two_decimals(point.green_pct),
            two_decimals(point.blue_pct),
            two_decimals(point.red_pct),
        ];
        for group in &report.durations.groups {
            let hours: f64 = group
                .durations_by_period
                .get(index)
                .copied()
                .unwrap_or_default();
            record.push(two_decimals(hours));
        }
        let total: f64 = report
            .durations
            .period_totals
            .get(index)
            .copied()
            .unwrap_or_default();
        record.push(two_decimals(total));
        writer.write_record(&record)?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|e| CsvExportError::Flush(e.error().to_string()))?;
    Ok(String::from_utf8(bytes)?)
}
