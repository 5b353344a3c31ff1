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

mod days;
mod error;
mod month_window;
mod query_result;
mod reservation;

#[cfg(test)]
mod tests;

pub use days::{SECONDS_PER_DAY, round_half_up, whole_days_between};
pub use error::DomainError;
pub use month_window::{MonthWindow, month_length};
pub use query_result::QueryResult;
pub use reservation::{ReservationRecord, parse_reservation_date};
