//! CSV input for transaction files.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::PipelineError;
use crate::types::table::Table;

/// Reads a delimited transaction file into an in-memory table.
///
/// All values are kept as strings; an empty field is a null. Column order
/// and extra columns are irrelevant here; schema validation happens when
/// the columns are resolved during assembly.
pub struct TransactionReader {
    path: PathBuf,
}

impl TransactionReader {
    /// Create a reader for the given file.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Read the whole file into a table named after the file.
    pub fn read(&self) -> Result<Table, PipelineError> {
        let mut reader =
            csv::Reader::from_path(&self.path).map_err(|source| PipelineError::Read {
                path: self.path.clone(),
                source,
            })?;

        let columns = reader
            .headers()
            .map_err(|source| PipelineError::Read {
                path: self.path.clone(),
                source,
            })?
            .iter()
            .map(str::to_string)
            .collect();

        let name = self
            .path
            .file_name()
            .map_or_else(|| self.path.display().to_string(), |n| {
                n.to_string_lossy().into_owned()
            });
        let mut table = Table::new(&name, columns);

        for record in reader.records() {
            let record = record.map_err(|source| PipelineError::Read {
                path: self.path.clone(),
                source,
            })?;
            table.push_row(record.iter().map(str::to_string).collect());
        }

        info!(
            file = %self.path.display(),
            rows = table.len(),
            columns = table.columns().len(),
            "Loaded transaction file"
        );
        Ok(table)
    }

    /// The file this reader points at.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
