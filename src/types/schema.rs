//! Column names and per-source schema validation for the input files.

use crate::error::PipelineError;
use crate::types::table::Table;

pub const ACCOUNT_ID: &str = "accountID";
pub const TRANSACTION_ID: &str = "transactionID";
pub const TRANSACTION_AMOUNT: &str = "transactionAmount";
pub const LOCAL_HOUR: &str = "localHour";
pub const TRANSACTION_DATE: &str = "transactionDate";
pub const TRANSACTION_TIME: &str = "transactionTime";

/// Derived columns added during assembly.
pub const TIMESTAMP: &str = "timestamp";
pub const TIMESTAMP_MIN: &str = "timestamp_min";
pub const TIMESTAMP_MAX: &str = "timestamp_max";
pub const IS_FRAUD: &str = "is_fraud";

/// Columns that must be non-null for a row to survive cleaning.
pub const REQUIRED_OUTPUT: &[&str] = &[
    ACCOUNT_ID,
    TRANSACTION_ID,
    TRANSACTION_AMOUNT,
    LOCAL_HOUR,
    TIMESTAMP,
];

/// Resolved column positions for the fraud report file.
///
/// Resolution doubles as boundary validation: a missing column aborts the
/// run with an error naming the column and the source file.
#[derive(Debug, Clone, Copy)]
pub struct FraudColumns {
    pub account_id: usize,
    pub transaction_date: usize,
    pub transaction_time: usize,
}

impl FraudColumns {
    pub fn resolve(table: &Table) -> Result<Self, PipelineError> {
        Ok(Self {
            account_id: table.require_column(ACCOUNT_ID)?,
            transaction_date: table.require_column(TRANSACTION_DATE)?,
            transaction_time: table.require_column(TRANSACTION_TIME)?,
        })
    }
}

/// Resolved column positions for the untagged transaction file.
#[derive(Debug, Clone, Copy)]
pub struct UntaggedColumns {
    pub account_id: usize,
    pub transaction_id: usize,
    pub transaction_amount: usize,
    pub local_hour: usize,
    pub transaction_date: usize,
    pub transaction_time: usize,
}

impl UntaggedColumns {
    pub fn resolve(table: &Table) -> Result<Self, PipelineError> {
        Ok(Self {
            account_id: table.require_column(ACCOUNT_ID)?,
            transaction_id: table.require_column(TRANSACTION_ID)?,
            transaction_amount: table.require_column(TRANSACTION_AMOUNT)?,
            local_hour: table.require_column(LOCAL_HOUR)?,
            transaction_date: table.require_column(TRANSACTION_DATE)?,
            transaction_time: table.require_column(TRANSACTION_TIME)?,
        })
    }
}
