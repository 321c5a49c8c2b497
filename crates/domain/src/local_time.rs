// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion of wall-clock times in a configured timezone to UTC instants.

use chrono::{DateTime, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

/// Resolves a wall-clock time in `tz` to a UTC instant.
///
/// Ambiguous times (DST fall-back) resolve to the earliest candidate. Times
/// inside a DST gap resolve to the same wall-clock time one hour later,
/// which is the first valid instant after a one-hour gap. If neither can be
/// resolved the wall-clock time is read as UTC.
#[must_use]
pub fn resolve_local(tz: Tz, local: NaiveDateTime) -> DateTime<Utc> {
    tz.from_local_datetime(&local)
        .earliest()
        .or_else(|| {
            let shifted: NaiveDateTime = local.checked_add_signed(TimeDelta::hours(1))?;
            tz.from_local_datetime(&shifted).earliest()
        })
        .map_or_else(
            || Utc.from_utc_datetime(&local),
            |resolved| resolved.with_timezone(&Utc),
        )
}

/// Returns the wall-clock time of a UTC instant in `tz`.
#[must_use]
pub fn to_local(tz: Tz, instant: DateTime<Utc>) -> NaiveDateTime {
    instant.with_timezone(&tz).naive_local()
}
