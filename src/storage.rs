//! Storage-path resolution for pipeline outputs.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::PipelineError;

/// Resolves a local file into a durable path that downstream consumers can
/// read later.
///
/// Implementations may copy the file to a remote or shared location;
/// callers treat the returned path as opaque.
pub trait StorageResolver {
    /// Upload the file if needed and return its durable path.
    fn upload_or_get(&self, local: &Path) -> Result<PathBuf, PipelineError>;
}

/// Stores files under a local directory, standing in for a shared store.
pub struct LocalStorage {
    root: PathBuf,
}

impl LocalStorage {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }
}

impl StorageResolver for LocalStorage {
    fn upload_or_get(&self, local: &Path) -> Result<PathBuf, PipelineError> {
        let file_name = local
            .file_name()
            .ok_or_else(|| PipelineError::InvalidStorageTarget(local.to_path_buf()))?;

        fs::create_dir_all(&self.root)?;
        let local = fs::canonicalize(local)?;
        let target = self.root.join(file_name);

        // The file may already live in the store.
        if target.exists() && fs::canonicalize(&target)? == local {
            return Ok(local);
        }

        fs::copy(&local, &target)?;
        let resolved = fs::canonicalize(&target)?;
        info!(
            source = %local.display(),
            target = %resolved.display(),
            "Published file to store"
        );
        Ok(resolved)
    }
}
