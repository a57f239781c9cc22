//! Cell-to-date coercion for the DATE_PAST rule.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use dq_model::Cell;

/// Days between the spreadsheet 1900 epoch (with its documented leap-year
/// off-by-two) and the Unix epoch.
const UNIX_EPOCH_SERIAL_DAYS: f64 = 25569.0;

const SECONDS_PER_DAY: f64 = 86400.0;

/// Interpret a cell as a calendar date.
///
/// Numeric cells are spreadsheet date serials; text cells must be one of the
/// accepted date formats. `None` means unparseable, which DATE_PAST treats
/// as a failure, never as an error.
pub fn parse_cell_date(cell: &Cell) -> Option<NaiveDate> {
    match cell {
        Cell::Number(serial) => serial_to_date(*serial),
        Cell::Text(text) => parse_date_string(text.trim()),
        Cell::Empty => None,
    }
}

fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let seconds = ((serial - UNIX_EPOCH_SERIAL_DAYS) * SECONDS_PER_DAY).round();
    if seconds.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp(seconds as i64, 0).map(|datetime| datetime.date_naive())
}

fn parse_date_string(text: &str) -> Option<NaiveDate> {
    if text.is_empty() {
        return None;
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(text, format) {
            return Some(datetime.date());
        }
    }
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }
    None
}
