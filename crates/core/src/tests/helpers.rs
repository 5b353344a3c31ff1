// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use space_revenue_domain::{MonthWindow, ReservationRecord, parse_reservation_date};

pub fn reservation(capacity: u32, price: f64, start: &str, end: Option<&str>) -> ReservationRecord {
    ReservationRecord::new(
        capacity,
        price,
        parse_reservation_date(start).unwrap(),
        end.map(|e| parse_reservation_date(e).unwrap()),
    )
}

pub fn window(month: u8, year: i32) -> MonthWindow {
    MonthWindow::from_parts(month, year).unwrap()
}

pub fn mixed_dataset() -> Vec<ReservationRecord> {
    vec![
        // Spans January 2024
        reservation(10, 3100.0, "2024-01-01", None),
        // Inside January 2024
        reservation(5, 300.0, "2024-01-10", Some("2024-01-20")),
        // Ended before January 2024
        reservation(8, 1000.0, "2023-06-01", Some("2023-06-15")),
        // Starts after January 2024
        reservation(4, 900.0, "2024-02-01", None),
        // Ends exactly on the 1st of January 2024
        reservation(2, 500.0, "2023-11-01", Some("2024-01-01")),
    ]
}
