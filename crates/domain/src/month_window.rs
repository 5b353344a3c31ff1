// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar month windows.
//!
//! A `MonthWindow` is the half-open interval `[first_day, end_day)` covering
//! one calendar month, with both bounds at UTC midnight. It is derived from a
//! `(month, year)` pair and never stored.
//!
//! ## Invariants
//!
//! - `first_day` is the 1st of the queried month
//! - `end_day` is the 1st of the following month (December rolls into January
//!   of the next year)
//! - `month_length` is the rounded day count between the two bounds (28-31)

use crate::days::whole_days_between;
use crate::error::DomainError;
use time::{Date, Month, OffsetDateTime};

/// The `[first_day, end_day)` window of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    year: i32,
    month: Month,
    first_day: OffsetDateTime,
    end_day: OffsetDateTime,
    month_length: u8,
}

impl MonthWindow {
    /// Resolves the window for a calendar month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateOutOfRange` if the month or the month after
    /// it cannot be represented.
    pub fn new(year: i32, month: Month) -> Result<Self, DomainError> {
        let first_day: OffsetDateTime = first_of_month(year, month)?;

        let (next_year, next_month): (i32, Month) = if month == Month::December {
            let next_year: i32 = year.checked_add(1).ok_or(DomainError::DateOutOfRange {
                year,
                month: u8::from(month),
            })?;
            (next_year, Month::January)
        } else {
            (year, month.next())
        };
        let end_day: OffsetDateTime = first_of_month(next_year, next_month)?;

        let month_length: u8 = u8::try_from(whole_days_between(end_day, first_day)).map_err(
            |_| DomainError::DateOutOfRange {
                year,
                month: u8::from(month),
            },
        )?;

        Ok(Self {
            year,
            month,
            first_day,
            end_day,
            month_length,
        })
    }

    /// Resolves the window from a numeric month (1-12) and a year.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if `month` is outside 1..=12, or
    /// `DomainError::DateOutOfRange` if the year cannot be represented.
    pub fn from_parts(month: u8, year: i32) -> Result<Self, DomainError> {
        let month: Month = Month::try_from(month).map_err(|_| DomainError::InvalidMonth(month))?;
        Self::new(year, month)
    }

    /// The queried year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The queried month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Midnight UTC on the 1st of the queried month.
    #[must_use]
    pub const fn first_day(&self) -> OffsetDateTime {
        self.first_day
    }

    /// Midnight UTC on the 1st of the following month.
    #[must_use]
    pub const fn end_day(&self) -> OffsetDateTime {
        self.end_day
    }

    /// Number of days in the queried month.
    #[must_use]
    pub const fn month_length(&self) -> u8 {
        self.month_length
    }
}

impl std::fmt::Display for MonthWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, u8::from(self.month))
    }
}

/// Number of days in the given month.
///
/// # Errors
///
/// Returns an error under the same conditions as [`MonthWindow::from_parts`].
pub fn month_length(year: i32, month: u8) -> Result<u8, DomainError> {
    MonthWindow::from_parts(month, year).map(|window| window.month_length())
}

fn first_of_month(year: i32, month: Month) -> Result<OffsetDateTime, DomainError> {
    let date: Date =
        Date::from_calendar_date(year, month, 1).map_err(|_| DomainError::DateOutOfRange {
            year,
            month: u8::from(month),
        })?;
    Ok(date.midnight().assume_utc())
}
