//! JSON File Store
//!
//! Flat-file implementation of [`CollectionStore`]: the collection is a
//! single pretty-printed JSON array, rewritten wholesale on each save.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use super::traits::CollectionStore;
use crate::domain::{DomainError, DomainResult, Todo};

/// Flat-file JSON implementation of the collection store
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl CollectionStore for JsonFileStore {
    async fn load(&self) -> DomainResult<Vec<Todo>> {
        match fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| DomainError::Persistence(format!("malformed todo file: {}", e))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(DomainError::Persistence(format!(
                "failed to read todo file: {}",
                e
            ))),
        }
    }

    async fn save(&self, todos: &[Todo]) -> DomainResult<()> {
        let json = serde_json::to_vec_pretty(todos)
            .map_err(|e| DomainError::Persistence(format!("failed to serialize todos: {}", e)))?;

        // Write to a sibling temp file and rename, so a crash mid-write
        // cannot leave a truncated collection behind.
        let temp = self.temp_path();
        fs::write(&temp, &json)
            .await
            .map_err(|e| DomainError::Persistence(format!("failed to write todo file: {}", e)))?;
        fs::rename(&temp, &self.path)
            .await
            .map_err(|e| DomainError::Persistence(format!("failed to replace todo file: {}", e)))
    }
}
