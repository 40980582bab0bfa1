//! Error types for the labeling pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for input validation, IO, and assembly failures.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required column is absent from one of the input files.
    #[error("required column '{column}' is missing from '{input}'")]
    MissingColumn { column: String, input: String },

    /// A timestamp cannot be built because one of its parts is null.
    #[error("cannot build a timestamp from an empty {part} value")]
    MissingTimestampPart { part: &'static str },

    /// Every row was dropped during cleaning. Indicates a data problem
    /// upstream rather than a bug in the transform.
    #[error("no transactions remained after cleaning")]
    EmptyResult,

    #[error("failed to read '{}'", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("failed to write '{}'", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("storage target '{}' has no file name", .0.display())]
    InvalidStorageTarget(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}
