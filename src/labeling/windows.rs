//! Per-account fraud window aggregation.

use std::collections::HashMap;

use crate::error::PipelineError;
use crate::types::schema;
use crate::types::table::Table;

/// Inclusive timestamp interval spanning an account's confirmed-fraud
/// transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FraudWindow {
    pub start: String,
    pub end: String,
}

impl FraudWindow {
    /// Whether a timestamp falls inside the window. String comparison is
    /// correct only because timestamps are fixed-width and zero-padded.
    pub fn contains(&self, timestamp: &str) -> bool {
        self.start.as_str() <= timestamp && timestamp <= self.end.as_str()
    }
}

/// Group fraud report rows by account and keep the earliest and latest
/// fraud timestamp per account.
///
/// The table must already carry the derived `timestamp` column. Rows with a
/// null account or a null timestamp cannot contribute a window and are
/// skipped; accounts absent from the fraud report never appear in the map.
pub fn compute_fraud_windows(fraud: &Table) -> Result<HashMap<String, FraudWindow>, PipelineError> {
    let account_index = fraud.require_column(schema::ACCOUNT_ID)?;
    let timestamp_index = fraud.require_column(schema::TIMESTAMP)?;

    let mut windows: HashMap<String, FraudWindow> = HashMap::new();
    for row in fraud.rows() {
        let account = &row[account_index];
        let timestamp = &row[timestamp_index];
        if account.is_empty() || timestamp.is_empty() {
            continue;
        }

        let window = windows
            .entry(account.clone())
            .or_insert_with(|| FraudWindow {
                start: timestamp.clone(),
                end: timestamp.clone(),
            });
        if timestamp.as_str() < window.start.as_str() {
            window.start = timestamp.clone();
        }
        if timestamp.as_str() > window.end.as_str() {
            window.end = timestamp.clone();
        }
    }
    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fraud_table(rows: &[(&str, &str)]) -> Table {
        let mut table = Table::new(
            "fraud_transactions.csv",
            vec!["accountID".to_string(), "timestamp".to_string()],
        );
        for (account, timestamp) in rows {
            table.push_row(vec![account.to_string(), timestamp.to_string()]);
        }
        table
    }

    #[test]
    fn test_window_is_min_and_max_timestamp() {
        let table = fraud_table(&[
            ("A1", "20130101 000000"),
            ("A1", "20130105 120000"),
            ("A1", "20130103 000000"),
        ]);

        let windows = compute_fraud_windows(&table).unwrap();
        let window = &windows["A1"];
        assert_eq!(window.start, "20130101 000000");
        assert_eq!(window.end, "20130105 120000");
    }

    #[test]
    fn test_accounts_are_grouped_independently() {
        let table = fraud_table(&[
            ("A1", "20130101 000000"),
            ("A2", "20130201 090000"),
            ("A1", "20130102 000000"),
        ]);

        let windows = compute_fraud_windows(&table).unwrap();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows["A1"].end, "20130102 000000");
        assert_eq!(windows["A2"].start, "20130201 090000");
    }

    #[test]
    fn test_null_keys_and_timestamps_are_skipped() {
        let table = fraud_table(&[("", "20130101 000000"), ("A1", "")]);
        let windows = compute_fraud_windows(&table).unwrap();
        assert!(windows.is_empty());
    }

    #[test]
    fn test_window_membership_is_inclusive() {
        let window = FraudWindow {
            start: "20130101 000000".to_string(),
            end: "20130105 120000".to_string(),
        };
        assert!(window.contains("20130101 000000"));
        assert!(window.contains("20130105 120000"));
        assert!(window.contains("20130103 000000"));
        assert!(!window.contains("20121231 235959"));
        assert!(!window.contains("20140101 000000"));
    }
}
