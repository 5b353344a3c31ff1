// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

/// One reserved block of office capacity.
///
/// `price` is the monthly price of the reservation. A reservation with no
/// `end` is open-ended and continues indefinitely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationRecord {
    /// Number of desks/offices in the block.
    pub capacity: u32,
    /// Monthly price.
    pub price: f64,
    /// First reserved day.
    pub start: OffsetDateTime,
    /// Day the reservation stops, or `None` when open-ended.
    pub end: Option<OffsetDateTime>,
}

impl ReservationRecord {
    /// Creates a reservation record.
    ///
    /// No validation is performed; `end` is not checked against `start`.
    #[must_use]
    pub const fn new(
        capacity: u32,
        price: f64,
        start: OffsetDateTime,
        end: Option<OffsetDateTime>,
    ) -> Self {
        Self {
            capacity,
            price,
            start,
            end,
        }
    }

    /// Returns whether the reservation has no end date.
    #[must_use]
    pub const fn is_open_ended(&self) -> bool {
        self.end.is_none()
    }
}

/// Parses a reservation date.
///
/// Accepts a calendar date (`2024-01-31`, taken as midnight UTC) or a full
/// RFC 3339 timestamp, which is normalized to UTC. Surrounding whitespace is
/// ignored.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if neither form matches.
pub fn parse_reservation_date(input: &str) -> Result<OffsetDateTime, DomainError> {
    let trimmed: &str = input.trim();

    let date_format = format_description!("[year]-[month]-[day]");
    if let Ok(date) = Date::parse(trimmed, &date_format) {
        return Ok(date.midnight().assume_utc());
    }

    OffsetDateTime::parse(trimmed, &Rfc3339)
        .map(|timestamp| timestamp.to_offset(UtcOffset::UTC))
        .map_err(|e| DomainError::DateParseError {
            date_string: trimmed.to_string(),
            error: e.to_string(),
        })
}
