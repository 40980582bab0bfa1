//! Transaction Fraud Labeling Pipeline Library
//!
//! Combines confirmed fraud reports with untagged transaction records into
//! a single labeled transaction dataset suitable for feature extraction and
//! model training.

pub mod config;
pub mod error;
pub mod labeling;
pub mod pipeline;
pub mod reader;
pub mod storage;
pub mod types;
pub mod writer;

pub use config::AppConfig;
pub use error::PipelineError;
pub use labeling::{assemble, compute_fraud_windows, compute_timestamp, FraudWindow};
pub use pipeline::{run, RunSummary};
pub use reader::TransactionReader;
pub use storage::{LocalStorage, StorageResolver};
pub use types::Table;
pub use writer::LabeledWriter;
