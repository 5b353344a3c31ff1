// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::prorated_revenue;
use crate::tests::helpers::{reservation, window};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_unreserved_contributes_nothing() {
    let record = reservation(8, 1000.0, "2023-06-01", Some("2023-06-15"));
    assert_close(prorated_revenue(&record, &window(7, 2023)), 0.0);
}

#[test]
fn test_starts_and_ends_inside_uses_reservation_days() {
    let record = reservation(5, 300.0, "2024-01-10", Some("2024-01-20"));
    assert_close(
        prorated_revenue(&record, &window(1, 2024)),
        300.0 / 31.0 * 10.0,
    );
}

#[test]
fn test_starts_inside_counts_days_to_month_end() {
    let record = reservation(1, 310.0, "2024-01-22", None);
    // Jan 22 through Jan 31 is 10 days.
    assert_close(prorated_revenue(&record, &window(1, 2024)), 100.0);
}

#[test]
fn test_ends_inside_counts_days_from_month_start() {
    let record = reservation(1, 620.0, "2023-12-01", Some("2024-01-11"));
    assert_close(prorated_revenue(&record, &window(1, 2024)), 200.0);
}

#[test]
fn test_spanning_reservation_contributes_full_price() {
    let record = reservation(10, 3100.0, "2024-01-01", None);
    assert_close(prorated_revenue(&record, &window(1, 2024)), 3100.0);
}

#[test]
fn test_spanning_price_is_not_scaled_to_short_month() {
    // A price quoted against a 31-day month is taken unchanged in February.
    let record = reservation(10, 3100.0, "2023-01-01", None);
    assert_close(prorated_revenue(&record, &window(2, 2023)), 3100.0);
}

#[test]
fn test_daily_rate_uses_queried_month_length() {
    // Same 10-day stay, priced against February (28 days) instead of January.
    let record = reservation(1, 280.0, "2023-02-10", Some("2023-02-20"));
    assert_close(prorated_revenue(&record, &window(2, 2023)), 100.0);
}

#[test]
fn test_zero_length_interval_contributes_nothing() {
    let record = reservation(1, 620.0, "2024-01-10", Some("2024-01-10"));
    assert_close(prorated_revenue(&record, &window(1, 2024)), 0.0);
}

#[test]
fn test_nan_price_propagates() {
    let record = reservation(1, f64::NAN, "2024-01-10", Some("2024-01-20"));
    assert!(prorated_revenue(&record, &window(1, 2024)).is_nan());
}
