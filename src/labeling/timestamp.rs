//! Timestamp construction from transaction date and time columns.
//!
//! Timestamps are fixed-width strings of the form `"YYYYMMDD HHMMSS"`. The
//! time part is zero-padded to 6 digits before concatenation; every later
//! comparison and sort in the pipeline relies on that padding, since
//! ordering is plain string comparison.

use crate::error::PipelineError;
use crate::types::schema;
use crate::types::table::Table;

/// Combine a transaction date and time into one sort key.
/// E.g. `"20130903"`, `"1641"` -> `"20130903 001641"`.
pub fn compute_timestamp(date: &str, time: &str) -> Result<String, PipelineError> {
    if date.is_empty() {
        return Err(PipelineError::MissingTimestampPart {
            part: schema::TRANSACTION_DATE,
        });
    }
    if time.is_empty() {
        return Err(PipelineError::MissingTimestampPart {
            part: schema::TRANSACTION_TIME,
        });
    }
    Ok(format!("{} {:0>6}", date, time))
}

/// Derive the `timestamp` column for every row of a table.
///
/// Rows missing the date or the time get a null timestamp; the cleaning
/// step drops them later.
pub fn add_timestamp_column(table: &mut Table, date_index: usize, time_index: usize) {
    let timestamps = table
        .rows()
        .iter()
        .map(|row| compute_timestamp(&row[date_index], &row[time_index]).unwrap_or_default())
        .collect();
    table.set_column(schema::TIMESTAMP, timestamps);
}
