// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV import of reservation records.
//!
//! The dataset has a header row followed by rows of
//! `capacity, price, start, end`. Columns are read by position; the header
//! text is not interpreted. An empty or missing `end` marks an open-ended
//! reservation.
//!
//! Import never fails as a whole. Numeric fields are read by their leading
//! integer (`"2.0"` is `2`, `"600.5"` is `600`); a price with no leading
//! integer becomes NaN and surfaces as an unknown revenue. A row whose
//! capacity or dates cannot be read is skipped with a warning.

use csv::StringRecord;
use space_revenue_domain::{ReservationRecord, parse_reservation_date};
use time::OffsetDateTime;
use tracing::warn;

const CAPACITY_COLUMN: usize = 0;
const PRICE_COLUMN: usize = 1;
const START_COLUMN: usize = 2;
const END_COLUMN: usize = 3;

/// Parses reservation CSV text into records, preserving row order.
///
/// Rows that cannot be turned into a record are logged and skipped, so one
/// bad row never hides the rest of the dataset.
///
/// # Arguments
///
/// * `csv_content` - The raw CSV content, header row included
#[must_use]
pub fn parse_reservations(csv_content: &str) -> Vec<ReservationRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let mut records: Vec<ReservationRecord> = Vec::new();
    let mut skipped: usize = 0;

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;
        let row: StringRecord = match result {
            Ok(row) => row,
            Err(e) => {
                warn!(row = row_number, error = %e, "Skipping unreadable reservation row");
                skipped += 1;
                continue;
            }
        };

        // A whitespace-only line survives as a single empty field
        if row.iter().all(str::is_empty) {
            continue;
        }

        match parse_row(&row) {
            Ok(record) => records.push(record),
            Err(reason) => {
                warn!(row = row_number, %reason, "Skipping malformed reservation row");
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        warn!(
            imported = records.len(),
            skipped, "Reservation dataset contained malformed rows"
        );
    }

    records
}

/// Returns the optional sign and leading digits of a numeric field.
///
/// Mirrors the usual "parse the integer prefix" rule: `"2.0"` gives `"2"`,
/// `"-3x"` gives `"-3"`, and `"abc"` or `"-"` give `None`.
fn leading_integer(value: &str) -> Option<&str> {
    let sign_len: usize = usize::from(value.starts_with(['+', '-']));
    let digits_len: usize = value[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    (digits_len > 0).then(|| &value[..sign_len + digits_len])
}

/// Reads a price by its leading integer, or NaN when it has none.
fn parse_price(value: &str) -> f64 {
    leading_integer(value)
        .and_then(|digits| digits.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Reads a capacity by its leading integer.
fn parse_capacity(value: &str) -> Result<u32, String> {
    leading_integer(value)
        .and_then(|digits| digits.parse::<u32>().ok())
        .ok_or_else(|| format!("capacity: not a usable count '{value}'"))
}

/// Parses one data row, returning a field-level message on failure.
fn parse_row(row: &StringRecord) -> Result<ReservationRecord, String> {
    let capacity: u32 = parse_capacity(row.get(CAPACITY_COLUMN).unwrap_or_default())?;
    let price: f64 = parse_price(row.get(PRICE_COLUMN).unwrap_or_default());

    let start_str: &str = row
        .get(START_COLUMN)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| String::from("start: required field is missing or empty"))?;
    let start: OffsetDateTime =
        parse_reservation_date(start_str).map_err(|e| format!("start: {e}"))?;

    let end: Option<OffsetDateTime> = match row.get(END_COLUMN).filter(|v| !v.is_empty()) {
        Some(value) => Some(parse_reservation_date(value).map_err(|e| format!("end: {e}"))?),
        None => None,
    };

    Ok(ReservationRecord::new(capacity, price, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    const HEADER: &str = "Capacity,Monthly Price,Start Day,End Day\n";

    #[test]
    fn test_parses_bounded_and_open_ended_rows() {
        let csv: String = format!("{HEADER}1,600,2014-07-01,\n6,2400,2014-05-01,2014-08-31\n");

        let records: Vec<ReservationRecord> = parse_reservations(&csv);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].capacity, 1);
        assert!((records[0].price - 600.0).abs() < f64::EPSILON);
        assert_eq!(records[0].start, datetime!(2014-07-01 0:00 UTC));
        assert_eq!(records[0].end, None);
        assert_eq!(records[1].end, Some(datetime!(2014-08-31 0:00 UTC)));
    }

    #[test]
    fn test_missing_end_column_is_open_ended() {
        let csv: String = format!("{HEADER}4,1000,2015-01-01\n");

        let records: Vec<ReservationRecord> = parse_reservations(&csv);

        assert_eq!(records.len(), 1);
        assert!(records[0].is_open_ended());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let csv: String = format!("{HEADER} 2 , 500 ,  2015-03-01 , 2015-04-01 \r\n");

        let records: Vec<ReservationRecord> = parse_reservations(&csv);

        assert_eq!(records[0].capacity, 2);
        assert_eq!(records[0].end, Some(datetime!(2015-04-01 0:00 UTC)));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let csv: String = format!("{HEADER}1,600,2014-07-01,\n\n   \n2,700,2014-08-01,\n");

        let records: Vec<ReservationRecord> = parse_reservations(&csv);

        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_row_order_is_preserved() {
        let csv: String =
            format!("{HEADER}3,300,2014-03-01,\n1,100,2014-01-01,\n2,200,2014-02-01,\n");

        let capacities: Vec<u32> = parse_reservations(&csv)
            .iter()
            .map(|r| r.capacity)
            .collect();

        assert_eq!(capacities, vec![3, 1, 2]);
    }

    #[test]
    fn test_header_only_yields_no_records() {
        assert!(parse_reservations(HEADER).is_empty());
        assert!(parse_reservations("").is_empty());
    }

    #[test]
    fn test_decimal_fields_use_their_integer_part() {
        let csv: String = format!("{HEADER}2.0,600.5,2014-07-01,\n");

        let records: Vec<ReservationRecord> = parse_reservations(&csv);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].capacity, 2);
        assert!((records[0].price - 600.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_price_without_leading_integer_is_nan() {
        let csv: String = format!("{HEADER}10,NaN,2024-01-01,\n3,,2024-01-01,\n");

        let records: Vec<ReservationRecord> = parse_reservations(&csv);

        assert_eq!(records.len(), 2);
        assert!(records[0].price.is_nan());
        assert!(records[1].price.is_nan());
    }

    #[test]
    fn test_unusable_capacity_skips_only_that_row() {
        let csv: String =
            format!("{HEADER}1,600,2014-07-01,\nmany,600,2014-07-01,\n-4,600,2014-07-01,\n5,100,2014-08-01,\n");

        let capacities: Vec<u32> = parse_reservations(&csv)
            .iter()
            .map(|r| r.capacity)
            .collect();

        assert_eq!(capacities, vec![1, 5]);
    }

    #[test]
    fn test_bad_dates_skip_only_that_row() {
        let csv: String = format!(
            "{HEADER}1,600,,\n2,600,2014-07-01,someday\n3,600,yesterday,\n4,600,2014-07-01,\n"
        );

        let records: Vec<ReservationRecord> = parse_reservations(&csv);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].capacity, 4);
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("2.0"), Some("2"));
        assert_eq!(leading_integer("600.5"), Some("600"));
        assert_eq!(leading_integer("-3x"), Some("-3"));
        assert_eq!(leading_integer("+7"), Some("+7"));
        assert_eq!(leading_integer("1e3"), Some("1"));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(""), None);
    }
}
