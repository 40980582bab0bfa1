//! CSV output for the labeled transaction dataset.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PipelineError;
use crate::types::table::Table;

/// Writes a labeled transaction table to a delimited file.
///
/// The output carries exactly the table's columns, one header row and no
/// synthetic row-index column.
pub struct LabeledWriter {
    path: PathBuf,
}

impl LabeledWriter {
    /// Create a writer for the given target file.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Write the table, creating parent directories as needed.
    pub fn write(&self, table: &Table) -> Result<(), PipelineError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let wrap = |source| PipelineError::Write {
            path: self.path.clone(),
            source,
        };

        let mut writer = csv::Writer::from_path(&self.path).map_err(wrap)?;
        writer.write_record(table.columns()).map_err(wrap)?;
        for row in table.rows() {
            writer.write_record(row).map_err(wrap)?;
        }
        writer.flush()?;

        debug!(
            file = %self.path.display(),
            rows = table.len(),
            "Wrote labeled transactions"
        );
        Ok(())
    }

    /// The file this writer targets.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_emits_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("transactions.csv");

        let mut table = Table::new(
            "transactions",
            vec!["accountID".to_string(), "is_fraud".to_string()],
        );
        table.push_row(vec!["A1".to_string(), "1".to_string()]);
        table.push_row(vec!["B1".to_string(), "0".to_string()]);

        LabeledWriter::new(&path).write(&table).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "accountID,is_fraud\nA1,1\nB1,0\n");
    }
}
