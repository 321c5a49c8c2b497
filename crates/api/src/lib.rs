// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the Dispo availability engine.
//!
//! Translates requests into engine calls, maps domain errors into the API
//! contract, and handles the CSV import and export formats.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod csv_export;
mod csv_preview;
mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use csv_export::{CsvExportError, EXPORT_FIXED_HEADERS, export_report_csv};
pub use csv_preview::{CsvPreviewResult, CsvRowResult, CsvRowStatus, preview_incidents_csv};
pub use error::ApiError;
pub use handlers::{
    compute_availability, compute_durations, compute_stats, compute_stats_csv, service_intervals,
};
pub use request_response::{
    AvailabilityResponse, DurationResponse, ServiceIntervalsRequest, ServiceIntervalsResponse,
    StatsRequest,
};
