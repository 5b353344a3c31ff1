// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::days::round_half_up;
use serde::{Deserialize, Serialize};

/// Revenue and unreserved capacity for one month.
///
/// `revenue` is `None` when the summed revenue is not a finite number, which
/// happens when a record carries a NaN or infinite price. It serializes as
/// JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryResult {
    /// Prorated revenue, rounded to the nearest whole unit.
    pub revenue: Option<i64>,
    /// Total capacity of reservations not active during the month.
    pub capacity: u64,
}

impl QueryResult {
    /// Creates a query result with a known revenue.
    #[must_use]
    pub const fn new(revenue: i64, capacity: u64) -> Self {
        Self {
            revenue: Some(revenue),
            capacity,
        }
    }

    /// Creates a query result from an unrounded revenue total.
    ///
    /// The total is rounded half up. Non-finite totals, and totals outside the
    /// `i64` range, yield `revenue: None`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_total(total: f64, capacity: u64) -> Self {
        let rounded: f64 = round_half_up(total);
        let revenue: Option<i64> =
            (rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64)
                .then_some(rounded as i64);
        Self { revenue, capacity }
    }

    /// Returns whether the revenue is a meaningful number.
    #[must_use]
    pub const fn has_valid_revenue(&self) -> bool {
        self.revenue.is_some()
    }
}
