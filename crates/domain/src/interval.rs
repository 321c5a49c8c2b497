// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Half-open time intervals and the set operations built on them.
//!
//! ## Invariants
//!
//! - An `Interval` always satisfies `end > start`; empty intervals cannot be
//!   constructed, so no operation can return one
//! - `merge`, `intersect` and `subtract` return intervals sorted by start
//!   with no overlaps
//! - Every operation is total: empty inputs yield empty outputs, except
//!   `subtract` with nothing to remove, which returns its input unchanged

use chrono::{DateTime, TimeDelta, Utc};
use num_traits::ToPrimitive;
use serde::Serialize;

const MILLIS_PER_MINUTE: f64 = 60_000.0;
const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// A non-empty half-open time range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Interval {
    /// Creates a new interval.
    ///
    /// Returns `None` when `end <= start`.
    #[must_use]
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Option<Self> {
        (end > start).then_some(Self { start, end })
    }

    /// Returns the inclusive start.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the exclusive end.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns the length of the interval.
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns the overlap of two intervals, if any.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        Self::new(self.start.max(other.start), self.end.min(other.end))
    }
}

/// Coalesces overlapping or touching intervals.
///
/// Intervals are sorted by start and walked once; a run is extended while
/// the next interval starts at or before its current end.
#[must_use]
pub fn merge(intervals: &[Interval]) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for next in sorted {
        match merged.last_mut() {
            Some(current) if next.start <= current.end => {
                if next.end > current.end {
                    current.end = next.end;
                }
            }
            _ => merged.push(next),
        }
    }
    merged
}

/// Returns the time covered by both `a` and `b`.
///
/// Every pair is intersected and the products merged, so inputs need not be
/// disjoint.
#[must_use]
pub fn intersect(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    let products: Vec<Interval> = a
        .iter()
        .flat_map(|left| b.iter().filter_map(|right| left.intersection(right)))
        .collect();
    merge(&products)
}

/// Returns the time covered by `a` but not by `b`.
///
/// Each interval of `a` is clipped against every interval of `b` in turn,
/// leaving zero, one or two pieces after each clip.
#[must_use]
pub fn subtract(a: &[Interval], b: &[Interval]) -> Vec<Interval> {
    if b.is_empty() {
        return a.to_vec();
    }

    let mut remaining: Vec<Interval> = Vec::new();
    for interval in a {
        let mut pieces: Vec<Interval> = vec![*interval];
        for cut in b {
            pieces = pieces
                .into_iter()
                .flat_map(|piece| clip(piece, cut))
                .collect();
            if pieces.is_empty() {
                break;
            }
        }
        remaining.extend(pieces);
    }
    merge(&remaining)
}

/// Removes `cut` from `piece`, returning what is left before and after it.
fn clip(piece: Interval, cut: &Interval) -> Vec<Interval> {
    if cut.end <= piece.start || cut.start >= piece.end {
        return vec![piece];
    }
    [
        Interval::new(piece.start, cut.start),
        Interval::new(cut.end, piece.end),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Returns the summed length of the intervals.
///
/// Overlaps are counted twice; merge first when that matters.
#[must_use]
pub fn total_duration(intervals: &[Interval]) -> TimeDelta {
    intervals
        .iter()
        .fold(TimeDelta::zero(), |acc, interval| acc + interval.duration())
}

/// Returns the summed length of the intervals in minutes.
#[must_use]
pub fn total_minutes(intervals: &[Interval]) -> f64 {
    millis_to_f64(total_duration(intervals)) / MILLIS_PER_MINUTE
}

/// Returns the summed length of the intervals in hours.
#[must_use]
pub fn total_hours(intervals: &[Interval]) -> f64 {
    millis_to_f64(total_duration(intervals)) / MILLIS_PER_HOUR
}

/// Converts a duration to hours.
#[must_use]
pub fn delta_to_hours(delta: TimeDelta) -> f64 {
    millis_to_f64(delta) / MILLIS_PER_HOUR
}

fn millis_to_f64(delta: TimeDelta) -> f64 {
    delta.num_milliseconds().to_f64().unwrap_or_default()
}
