// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while building domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Month number outside 1..=12.
    InvalidMonth(u8),
    /// The requested calendar date cannot be represented.
    DateOutOfRange {
        /// The year of the offending date.
        year: i32,
        /// The month number of the offending date.
        month: u8,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth(month) => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::DateOutOfRange { year, month } => {
                write!(f, "Date out of range: month {month} of year {year}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
