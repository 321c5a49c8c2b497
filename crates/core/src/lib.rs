// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Aggregation of incidents into availability and downtime series.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod availability;
mod duration;
mod report;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use availability::{
    AvailabilitySeries, TopSeriesPoint, compute_availability_point, compute_availability_series,
};
pub use duration::{
    BottomSeriesGroup, DurationSeries, GroupKey, PALETTE, UNKNOWN_NAME, category_element_key,
    compute_duration_series, compute_duration_series_by,
};
pub use report::{StatsReport, compute_stats_report, config_periods};
