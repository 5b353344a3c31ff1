// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod proration;

#[cfg(test)]
mod tests;

use space_revenue_domain::{DomainError, MonthWindow, QueryResult, ReservationRecord};

// Re-export public types and functions
pub use proration::{Coverage, classify, compute_expected, prorated_revenue};

/// Computes revenue and unreserved capacity for a numeric month and year.
///
/// # Arguments
///
/// * `records` - The full reservation dataset
/// * `month` - Month number, 1-12
/// * `year` - Calendar year
///
/// # Returns
///
/// * `Ok(QueryResult)` with rounded revenue and summed capacity
/// * `Err(DomainError)` if the month cannot be resolved
///
/// # Errors
///
/// Returns an error if:
/// - `month` is outside 1..=12
/// - The month or the month after it is outside the representable date range
pub fn expected_for(
    records: &[ReservationRecord],
    month: u8,
    year: i32,
) -> Result<QueryResult, DomainError> {
    let window: MonthWindow = MonthWindow::from_parts(month, year)?;
    Ok(compute_expected(records, &window))
}
