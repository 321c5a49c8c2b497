// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::interval::Interval;
use chrono::{DateTime, NaiveDate, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Severity level attached to an incident.
///
/// Wire names follow the incident tracker (`mineur`, `critique`, `fatal`);
/// English spellings are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Minor incident. Recorded, but never counted as downtime.
    #[serde(rename = "mineur", alias = "minor")]
    Minor,
    /// Critical incident. Counted as downtime.
    #[serde(rename = "critique", alias = "critical")]
    Critical,
    /// Fatal incident. Counted as downtime.
    #[serde(rename = "fatal")]
    Fatal,
}

impl Severity {
    /// Converts this severity to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "mineur",
            Self::Critical => "critique",
            Self::Fatal => "fatal",
        }
    }

    /// Returns whether incidents of this severity reduce availability.
    #[must_use]
    pub const fn counts_toward_downtime(&self) -> bool {
        matches!(self, Self::Critical | Self::Fatal)
    }
}

impl FromStr for Severity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mineur" | "minor" => Ok(Self::Minor),
            "critique" | "critical" => Ok(Self::Critical),
            "fatal" => Ok(Self::Fatal),
            _ => Err(DomainError::InvalidSeverity(s.to_string())),
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const fn default_responsible() -> bool {
    true
}

/// A recorded incident against a monitored element.
///
/// `end_date == None` means the incident is still open; it is treated as
/// ending at the evaluation instant supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Identifier assigned by the incident tracker.
    pub id: String,
    /// The incident severity.
    pub severity: Severity,
    /// Whether the monitored service is at fault. Defaults to `true`.
    #[serde(default = "default_responsible")]
    pub responsible: bool,
    /// When the incident started.
    pub start_date: DateTime<Utc>,
    /// When the incident ended, if it has.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    /// Category of the affected element.
    #[serde(default)]
    pub target_category_name: Option<String>,
    /// Name of the affected element.
    #[serde(default)]
    pub target_element_name: Option<String>,
}

impl Incident {
    /// Creates a new open, responsible incident with no target.
    ///
    /// # Arguments
    ///
    /// * `id` - The incident identifier
    /// * `severity` - The incident severity
    /// * `start_date` - When the incident started
    #[must_use]
    pub fn new(id: impl Into<String>, severity: Severity, start_date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            severity,
            responsible: true,
            start_date,
            end_date: None,
            target_category_name: None,
            target_element_name: None,
        }
    }

    /// Sets the end date.
    #[must_use]
    pub fn with_end(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Sets the responsibility flag.
    #[must_use]
    pub fn with_responsible(mut self, responsible: bool) -> Self {
        self.responsible = responsible;
        self
    }

    /// Sets the affected category and element.
    #[must_use]
    pub fn with_target(mut self, category: impl Into<String>, element: impl Into<String>) -> Self {
        self.target_category_name = Some(category.into());
        self.target_element_name = Some(element.into());
        self
    }

    /// Returns the end of the incident, substituting `now` for open incidents.
    #[must_use]
    pub fn resolved_end(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.end_date.unwrap_or(now)
    }

    /// Returns the part of this incident that falls inside `[start, end)`.
    ///
    /// Returns `None` when the overlap is empty, which includes incidents
    /// whose end precedes their start.
    #[must_use]
    pub fn overlap(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Option<Interval> {
        let overlap_start: DateTime<Utc> = start.max(self.start_date);
        let overlap_end: DateTime<Utc> = end.min(self.resolved_end(now));
        Interval::new(overlap_start, overlap_end)
    }
}

/// Granularity of a period bucket.
///
/// Unknown strings fall back to [`PeriodType::Day`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PeriodType {
    /// One calendar day.
    Day,
    /// Seven calendar days.
    Week,
    /// One calendar month.
    #[default]
    Month,
    /// One calendar year.
    Year,
}

impl PeriodType {
    /// Converts this period type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }
}

impl From<&str> for PeriodType {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "week" => Self::Week,
            "month" => Self::Month,
            "year" => Self::Year,
            _ => Self::Day,
        }
    }
}

impl From<String> for PeriodType {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Hours of the day, per weekday, during which the service is measured.
///
/// Each list holds hour-of-day values; hour `h` covers `[h:00, h+1:00)`.
/// A weekday without an entry has no service hours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceHours {
    pub monday: Vec<u8>,
    pub tuesday: Vec<u8>,
    pub wednesday: Vec<u8>,
    pub thursday: Vec<u8>,
    pub friday: Vec<u8>,
    pub saturday: Vec<u8>,
    pub sunday: Vec<u8>,
}

impl ServiceHours {
    /// Creates a schedule with the same hours on Monday through Friday.
    #[must_use]
    pub fn weekdays(hours: impl IntoIterator<Item = u8>) -> Self {
        let hours: Vec<u8> = hours.into_iter().collect();
        Self {
            monday: hours.clone(),
            tuesday: hours.clone(),
            wednesday: hours.clone(),
            thursday: hours.clone(),
            friday: hours,
            saturday: Vec::new(),
            sunday: Vec::new(),
        }
    }

    /// Creates a schedule covering every hour of every day.
    #[must_use]
    pub fn always() -> Self {
        Self::default()
            .with(Weekday::Mon, 0..24)
            .with(Weekday::Tue, 0..24)
            .with(Weekday::Wed, 0..24)
            .with(Weekday::Thu, 0..24)
            .with(Weekday::Fri, 0..24)
            .with(Weekday::Sat, 0..24)
            .with(Weekday::Sun, 0..24)
    }

    /// Replaces the hours declared for one weekday.
    #[must_use]
    pub fn with(mut self, weekday: Weekday, hours: impl IntoIterator<Item = u8>) -> Self {
        *self.hours_mut(weekday) = hours.into_iter().collect();
        self
    }

    /// Returns the hours declared for a weekday.
    #[must_use]
    pub fn hours_for(&self, weekday: Weekday) -> &[u8] {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    fn hours_mut(&mut self, weekday: Weekday) -> &mut Vec<u8> {
        match weekday {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        }
    }
}

/// Configuration of an availability computation.
///
/// All fields have defaults so a partial JSON object deserializes into a
/// usable configuration: monthly periods, six of them, trailing back from
/// the evaluation instant, business hours 08:00-18:00 Monday to Friday,
/// evaluated in UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatsConfig {
    /// Granularity of each period bucket.
    pub period_type: PeriodType,
    /// Number of buckets. Values below 1 produce no buckets.
    pub period_count: i64,
    /// First bucket start. When absent, buckets trail back from `now`.
    pub start_date: Option<DateTime<Utc>>,
    /// Weekly service schedule.
    pub service_hours: ServiceHours,
    /// Whether Saturdays and Sundays are excluded regardless of `service_hours`.
    pub exclude_weekends: bool,
    /// Calendar dates excluded entirely from the service calendar.
    pub excluded_dates: BTreeSet<NaiveDate>,
    /// Timezone in which calendar days and period boundaries are evaluated.
    pub timezone: Tz,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            period_type: PeriodType::Month,
            period_count: 6,
            start_date: None,
            service_hours: ServiceHours::weekdays(8..18),
            exclude_weekends: true,
            excluded_dates: BTreeSet::new(),
            timezone: Tz::UTC,
        }
    }
}

impl StatsConfig {
    /// Returns the service intervals of this calendar inside `[start, end)`.
    #[must_use]
    pub fn service_intervals(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<Interval> {
        crate::service_calendar::generate_service_intervals(
            start,
            end,
            &self.service_hours,
            self.exclude_weekends,
            &self.excluded_dates,
            self.timezone,
        )
    }
}

/// One column of a time-series chart: a half-open `[start, end)` period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBucket {
    /// Display label (`15/03`, `S11`, `Mar 24`, `2024`).
    pub label: String,
    /// Inclusive start.
    pub start: DateTime<Utc>,
    /// Exclusive end.
    pub end: DateTime<Utc>,
}

impl PeriodBucket {
    /// Creates a new `PeriodBucket`.
    #[must_use]
    pub const fn new(label: String, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { label, start, end }
    }
}
