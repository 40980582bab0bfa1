//! Assembly of the labeled transaction dataset.
//!
//! Combines the fraud report and the untagged transactions into one table,
//! cleans it, and labels every surviving row with `is_fraud`.

use crate::error::PipelineError;
use crate::labeling::timestamp;
use crate::labeling::windows;
use crate::types::schema::{self, FraudColumns, UntaggedColumns};
use crate::types::table::Table;

/// Build the labeled transaction table from the two raw inputs.
///
/// Steps, in order: derive `timestamp` on both inputs, aggregate the
/// per-account fraud windows, concatenate both inputs over the union of
/// their columns, attach the window bounds per account, drop rows with a
/// null required value, sort ascending by `timestamp`, remove exact
/// duplicates, and compute `is_fraud`.
///
/// The whole procedure is a pure function of its inputs; identical inputs
/// produce identical output rows in identical order.
pub fn assemble(mut fraud: Table, mut untagged: Table) -> Result<Table, PipelineError> {
    let fraud_columns = FraudColumns::resolve(&fraud)?;
    let untagged_columns = UntaggedColumns::resolve(&untagged)?;

    timestamp::add_timestamp_column(
        &mut fraud,
        fraud_columns.transaction_date,
        fraud_columns.transaction_time,
    );
    timestamp::add_timestamp_column(
        &mut untagged,
        untagged_columns.transaction_date,
        untagged_columns.transaction_time,
    );

    let windows = windows::compute_fraud_windows(&fraud)?;

    let mut combined = Table::concat(&fraud, &untagged, "transactions");
    let account_index = combined.require_column(schema::ACCOUNT_ID)?;
    let timestamp_index = combined.require_column(schema::TIMESTAMP)?;

    // Attach the per-account window bounds. Accounts without a fraud report
    // keep null bounds.
    let (starts, ends): (Vec<String>, Vec<String>) = combined
        .rows()
        .iter()
        .map(|row| match windows.get(row[account_index].as_str()) {
            Some(window) => (window.start.clone(), window.end.clone()),
            None => (String::new(), String::new()),
        })
        .unzip();
    combined.set_column(schema::TIMESTAMP_MIN, starts);
    combined.set_column(schema::TIMESTAMP_MAX, ends);

    // Cleaning: a row must carry every required value. This also removes
    // the fraud-report rows themselves, which have no transactionID.
    let required: Vec<usize> = schema::REQUIRED_OUTPUT
        .iter()
        .map(|column| combined.require_column(column))
        .collect::<Result<_, _>>()?;
    combined.retain_rows(|row| required.iter().all(|&index| !row[index].is_empty()));

    combined.sort_by_column(timestamp_index);
    combined.dedup_exact();

    let labels: Vec<String> = combined
        .rows()
        .iter()
        .map(|row| {
            let fraudulent = windows
                .get(row[account_index].as_str())
                .map_or(false, |window| window.contains(&row[timestamp_index]));
            let label = if fraudulent { "1" } else { "0" };
            label.to_string()
        })
        .collect();
    combined.set_column(schema::IS_FRAUD, labels);

    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fraud_input(rows: &[(&str, &str, &str)]) -> Table {
        let mut table = Table::new(
            "fraud_transactions.csv",
            vec![
                "accountID".to_string(),
                "transactionDate".to_string(),
                "transactionTime".to_string(),
            ],
        );
        for (account, date, time) in rows {
            table.push_row(vec![account.to_string(), date.to_string(), time.to_string()]);
        }
        table
    }

    fn untagged_input(rows: &[(&str, &str, &str, &str, &str, &str)]) -> Table {
        let mut table = Table::new(
            "untagged_transactions.csv",
            vec![
                "accountID".to_string(),
                "transactionID".to_string(),
                "transactionAmount".to_string(),
                "localHour".to_string(),
                "transactionDate".to_string(),
                "transactionTime".to_string(),
            ],
        );
        for (account, id, amount, hour, date, time) in rows {
            table.push_row(vec![
                account.to_string(),
                id.to_string(),
                amount.to_string(),
                hour.to_string(),
                date.to_string(),
                time.to_string(),
            ]);
        }
        table
    }

    fn column<'a>(table: &'a Table, name: &str) -> Vec<&'a str> {
        let index = table.column_index(name).unwrap();
        table.rows().iter().map(|row| row[index].as_str()).collect()
    }

    #[test]
    fn test_labels_inside_and_outside_window() {
        let fraud = fraud_input(&[
            ("A1", "20130101", "0"),
            ("A1", "20130105", "120000"),
            ("A1", "20130103", "0"),
        ]);
        let untagged = untagged_input(&[
            ("A1", "T1", "25.0", "10", "20130103", "0"),
            ("A1", "T2", "30.0", "11", "20140101", "0"),
        ]);

        let labeled = assemble(fraud, untagged).unwrap();
        assert_eq!(column(&labeled, "transactionID"), vec!["T1", "T2"]);
        assert_eq!(column(&labeled, "is_fraud"), vec!["1", "0"]);
    }

    #[test]
    fn test_unknown_account_is_never_fraud() {
        let fraud = fraud_input(&[("A1", "20130101", "0")]);
        let untagged = untagged_input(&[("B1", "T1", "25.0", "10", "20130101", "0")]);

        let labeled = assemble(fraud, untagged).unwrap();
        assert_eq!(column(&labeled, "is_fraud"), vec!["0"]);
        assert_eq!(column(&labeled, "timestamp_min"), vec![""]);
        assert_eq!(column(&labeled, "timestamp_max"), vec![""]);
    }

    #[test]
    fn test_rows_missing_required_values_are_dropped() {
        let fraud = fraud_input(&[("A1", "20130101", "0")]);
        let untagged = untagged_input(&[
            ("A1", "T1", "", "10", "20130101", "0"),
            ("A1", "T2", "25.0", "10", "20130102", "0"),
        ]);

        let labeled = assemble(fraud, untagged).unwrap();
        assert_eq!(column(&labeled, "transactionID"), vec!["T2"]);
    }

    #[test]
    fn test_fraud_report_rows_do_not_survive_cleaning() {
        // Fraud-report rows carry no transactionID, so only untagged rows
        // can appear in the output.
        let fraud = fraud_input(&[("A1", "20130101", "0"), ("A1", "20130105", "0")]);
        let untagged = untagged_input(&[("A1", "T1", "25.0", "10", "20130103", "0")]);

        let labeled = assemble(fraud, untagged).unwrap();
        assert_eq!(labeled.len(), 1);
        assert_eq!(column(&labeled, "transactionID"), vec!["T1"]);
        assert_eq!(column(&labeled, "is_fraud"), vec!["1"]);
    }

    #[test]
    fn test_output_is_sorted_by_timestamp() {
        let fraud = fraud_input(&[("A1", "20130101", "0")]);
        let untagged = untagged_input(&[
            ("B1", "T3", "10.0", "9", "20130105", "90000"),
            ("B1", "T1", "10.0", "9", "20130101", "1641"),
            ("B1", "T2", "10.0", "9", "20130102", "235959"),
        ]);

        let labeled = assemble(fraud, untagged).unwrap();
        assert_eq!(column(&labeled, "transactionID"), vec!["T1", "T2", "T3"]);
        assert_eq!(
            column(&labeled, "timestamp"),
            vec!["20130101 001641", "20130102 235959", "20130105 090000"]
        );
    }

    #[test]
    fn test_exact_duplicates_collapse_to_one_row() {
        let fraud = fraud_input(&[("A1", "20130101", "0")]);
        let untagged = untagged_input(&[
            ("B1", "T1", "10.0", "9", "20130101", "0"),
            ("B1", "T1", "10.0", "9", "20130101", "0"),
        ]);

        let labeled = assemble(fraud, untagged).unwrap();
        assert_eq!(labeled.len(), 1);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let fraud = fraud_input(&[("A1", "20130101", "0"), ("A1", "20130105", "0")]);
        let untagged = untagged_input(&[
            ("A1", "T1", "25.0", "10", "20130103", "0"),
            ("B1", "T2", "30.0", "11", "20130103", "0"),
            ("B1", "T3", "30.0", "11", "20130102", "0"),
        ]);

        let first = assemble(fraud.clone(), untagged.clone()).unwrap();
        let second = assemble(fraud, untagged).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_required_column_aborts_assembly() {
        let fraud = fraud_input(&[("A1", "20130101", "0")]);
        let mut untagged = Table::new(
            "untagged_transactions.csv",
            vec!["accountID".to_string(), "transactionID".to_string()],
        );
        untagged.push_row(vec!["B1".to_string(), "T1".to_string()]);

        let err = assemble(fraud, untagged).unwrap_err();
        assert_eq!(
            err.to_string(),
            "required column 'transactionAmount' is missing from 'untagged_transactions.csv'"
        );
    }

    #[test]
    fn test_all_input_columns_are_preserved() {
        let fraud = fraud_input(&[("A1", "20130101", "0")]);
        let mut untagged = untagged_input(&[("B1", "T1", "10.0", "9", "20130101", "0")]);
        untagged.set_column("ipCountryCode", vec!["US".to_string()]);

        let labeled = assemble(fraud, untagged).unwrap();
        assert_eq!(
            labeled.columns(),
            &[
                "accountID",
                "transactionDate",
                "transactionTime",
                "timestamp",
                "transactionID",
                "transactionAmount",
                "localHour",
                "ipCountryCode",
                "timestamp_min",
                "timestamp_max",
                "is_fraud",
            ]
        );
        assert_eq!(column(&labeled, "ipCountryCode"), vec!["US"]);
    }
}
