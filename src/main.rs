//! Transaction Labeling Pipeline - Main Entry Point
//!
//! Reads the fraud report and the untagged transactions, assembles the
//! labeled dataset, and publishes it through the configured store.

use anyhow::Result;
use fraud_labeling_pipeline::{
    config::AppConfig, pipeline, storage::LocalStorage, PipelineError,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("fraud_labeling_pipeline={}", config.logging.level))
    });
    match config.logging.format.as_str() {
        "json" => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    info!("Starting transaction labeling pipeline");
    info!(
        fraud = %config.inputs.fraud_transactions,
        untagged = %config.inputs.untagged_transactions,
        output = %config.output.transactions,
        "Configuration loaded"
    );

    let storage = LocalStorage::new(&config.storage.root);

    match pipeline::run(&config, &storage) {
        Ok(summary) => {
            info!(
                labeled = summary.labeled_rows,
                fraud = summary.fraud_labeled,
                output = %summary.transactions_path.display(),
                "Labeled transactions published"
            );
            if let Some(path) = summary.account_info_path {
                info!(account_info = %path.display(), "Account info published");
            }
            Ok(())
        }
        // A data problem upstream, not a bug in the transform.
        Err(PipelineError::EmptyResult) => {
            warn!("No transactions survived cleaning; nothing was written");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
