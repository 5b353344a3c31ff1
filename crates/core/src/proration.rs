// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Monthly proration of reservation prices.
//!
//! A reservation overlaps the queried month when it starts before the month
//! ends and either never ends or ends after the month starts. Overlapping
//! reservations contribute revenue; the rest contribute their capacity to
//! the month's unreserved total.
//!
//! ## Invariants
//!
//! - The daily rate is always `price / month_length` of the queried month,
//!   never the reservation's own duration
//! - Boundary-touching intervals (`start == first_day`, `end == end_day`)
//!   count as covering that side of the month
//! - A reservation covering the whole month contributes its `price` as-is,
//!   not `daily_rate * month_length`
//! - No validation is performed: a NaN or infinite price yields a revenue
//!   of `None`, never a panic

use space_revenue_domain::{MonthWindow, QueryResult, ReservationRecord, whole_days_between};
use time::OffsetDateTime;
use tracing::debug;

/// How a reservation's interval relates to the queried month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coverage {
    /// No overlap; the capacity is unreserved for the month.
    Unreserved,
    /// Starts after the 1st and ends before the month is over.
    StartsAndEndsInside,
    /// Starts after the 1st and runs to the month end or beyond.
    StartsInside,
    /// Started on or before the 1st and ends before the month is over.
    EndsInside,
    /// Started on or before the 1st and runs to the month end or beyond.
    SpansMonth,
}

/// Classifies a reservation against a month window.
#[must_use]
pub fn classify(record: &ReservationRecord, window: &MonthWindow) -> Coverage {
    let first_day: OffsetDateTime = window.first_day();
    let end_day: OffsetDateTime = window.end_day();

    let overlaps: bool =
        record.start < end_day && record.end.is_none_or(|end| end > first_day);
    if !overlaps {
        return Coverage::Unreserved;
    }

    let ends_inside: bool = record.end.is_some_and(|end| end < end_day);

    match (record.start > first_day, ends_inside) {
        (true, true) => Coverage::StartsAndEndsInside,
        (true, false) => Coverage::StartsInside,
        (false, true) => Coverage::EndsInside,
        (false, false) => Coverage::SpansMonth,
    }
}

/// Unrounded revenue one reservation contributes to the month.
///
/// Returns `0.0` for reservations that do not overlap the month.
#[must_use]
pub fn prorated_revenue(record: &ReservationRecord, window: &MonthWindow) -> f64 {
    revenue_for(record, window, classify(record, window))
}

/// Revenue for a reservation whose coverage is already known.
#[allow(clippy::cast_precision_loss)]
fn revenue_for(record: &ReservationRecord, window: &MonthWindow, coverage: Coverage) -> f64 {
    let price_per_day: f64 = record.price / f64::from(window.month_length());

    // The end bound only matters for the two *EndsInside cases, where it is set.
    let end: OffsetDateTime = record.end.unwrap_or_else(|| window.end_day());

    let days: i64 = match coverage {
        Coverage::Unreserved => return 0.0,
        Coverage::SpansMonth => return record.price,
        Coverage::StartsAndEndsInside => whole_days_between(end, record.start),
        Coverage::StartsInside => whole_days_between(window.end_day(), record.start),
        Coverage::EndsInside => whole_days_between(end, window.first_day()),
    };

    price_per_day * days as f64
}

/// Computes the prorated revenue and unreserved capacity for a month.
///
/// Pure function of its inputs; records are read, never modified. A NaN or
/// infinite price makes the revenue `None` rather than a plausible number.
#[must_use]
pub fn compute_expected(records: &[ReservationRecord], window: &MonthWindow) -> QueryResult {
    let mut revenue: f64 = 0.0;
    let mut capacity: u64 = 0;
    let mut overlapping: usize = 0;

    for record in records {
        match classify(record, window) {
            Coverage::Unreserved => capacity += u64::from(record.capacity),
            coverage => {
                overlapping += 1;
                revenue += revenue_for(record, window, coverage);
            }
        }
    }

    debug!(
        month = %window,
        records = records.len(),
        overlapping,
        unreserved = records.len() - overlapping,
        "Computed expected revenue"
    );

    QueryResult::from_total(revenue, capacity)
}
