// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Whole-day arithmetic over timestamps.
//!
//! Day counts are derived from raw elapsed seconds divided by the length of
//! a day and rounded, not from calendar-aware day counting. For UTC midnight
//! timestamps the two agree; for anything else this is a known approximation
//! and the rounding must stay as it is, because proration results depend on it.

use time::OffsetDateTime;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Rounds half-way values up, toward positive infinity.
///
/// `-2.5` rounds to `-2.0`, `2.5` rounds to `3.0`.
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Number of whole days from `earlier` to `later`, rounded.
///
/// Negative when `later` precedes `earlier`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn whole_days_between(later: OffsetDateTime, earlier: OffsetDateTime) -> i64 {
    let seconds: i64 = (later - earlier).whole_seconds();
    round_half_up(seconds as f64 / SECONDS_PER_DAY) as i64
}
