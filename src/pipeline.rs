//! End-to-end labeling run: load, assemble, persist, publish.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::AppConfig;
use crate::error::PipelineError;
use crate::labeling::assemble;
use crate::reader::TransactionReader;
use crate::storage::StorageResolver;
use crate::types::schema;
use crate::writer::LabeledWriter;

/// Row counts and resolved paths from a completed run.
#[derive(Debug)]
pub struct RunSummary {
    /// Rows read from the fraud report file
    pub fraud_rows: usize,
    /// Rows read from the untagged transaction file
    pub untagged_rows: usize,
    /// Rows in the labeled output
    pub labeled_rows: usize,
    /// Output rows labeled fraudulent
    pub fraud_labeled: usize,
    /// Durable path of the labeled transaction file
    pub transactions_path: PathBuf,
    /// Durable path of the account info file, when configured
    pub account_info_path: Option<PathBuf>,
}

/// Run the whole pipeline once.
///
/// Reads both input files, assembles the labeled dataset, writes it to the
/// configured output file, and publishes it (plus the optional account-info
/// file) through the storage resolver. Returns `EmptyResult` without
/// writing anything when no row survives cleaning.
pub fn run(config: &AppConfig, storage: &dyn StorageResolver) -> Result<RunSummary, PipelineError> {
    let fraud = TransactionReader::new(&config.inputs.fraud_transactions).read()?;
    let untagged = TransactionReader::new(&config.inputs.untagged_transactions).read()?;
    let fraud_rows = fraud.len();
    let untagged_rows = untagged.len();

    let labeled = assemble(fraud, untagged)?;
    if labeled.is_empty() {
        return Err(PipelineError::EmptyResult);
    }

    let is_fraud_index = labeled.require_column(schema::IS_FRAUD)?;
    let fraud_labeled = labeled
        .rows()
        .iter()
        .filter(|row| row[is_fraud_index] == "1")
        .count();

    let writer = LabeledWriter::new(&config.output.transactions);
    writer.write(&labeled)?;
    let transactions_path = storage.upload_or_get(writer.path())?;

    let account_info_path = config
        .inputs
        .account_info
        .as_deref()
        .map(|path| storage.upload_or_get(Path::new(path)))
        .transpose()?;

    info!(
        fraud_rows,
        untagged_rows,
        labeled_rows = labeled.len(),
        fraud_labeled,
        output = %transactions_path.display(),
        "Labeling run complete"
    );

    Ok(RunSummary {
        fraud_rows,
        untagged_rows,
        labeled_rows: labeled.len(),
        fraud_labeled,
        transactions_path,
        account_info_path,
    })
}
