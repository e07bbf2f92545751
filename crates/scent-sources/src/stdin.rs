//! Stdin source — reads the catalog document piped into the process.

use crate::{CatalogError, CatalogSource};
use tokio::io::AsyncReadExt;

#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl CatalogSource for StdinSource {
    fn describe(&self) -> String {
        "stdin".to_string()
    }

    async fn read(&self) -> Result<Vec<u8>, CatalogError> {
        let mut buf = Vec::new();
        tokio::io::stdin()
            .read_to_end(&mut buf)
            .await
            .map_err(|source| CatalogError::Io { source_name: self.describe(), source })?;
        Ok(buf)
    }
}
