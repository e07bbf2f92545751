//! File source — reads the catalog document from disk.

use crate::{CatalogError, CatalogSource};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read(&self) -> Result<Vec<u8>, CatalogError> {
        tracing::debug!(path = %self.path.display(), "catalog: reading file");
        tokio::fs::read(&self.path)
            .await
            .map_err(|source| CatalogError::Io { source_name: self.describe(), source })
    }
}
