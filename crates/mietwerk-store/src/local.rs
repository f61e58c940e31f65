//! Local-directory store, the default when no blob endpoint is configured.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::info;

use crate::{ContractStore, StoreError, new_contract_id};

const DEFAULT_DIR: &str = "/tmp/contracts-temp";

pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory from `MIETWERK_CONTRACTS_DIR`, or the default.
    pub fn from_env() -> Self {
        let dir = std::env::var(crate::CONTRACTS_DIR_VAR).unwrap_or_else(|_| DEFAULT_DIR.into());
        Self::new(dir)
    }

    /// Ids are opaque file names; anything that would escape the
    /// directory is rejected outright.
    fn path_for(&self, id: &str) -> Result<PathBuf, StoreError> {
        if id.is_empty() || id.contains('/') || id.contains('\\') || id.contains("..") {
            return Err(StoreError::InvalidId(id.to_string()));
        }
        Ok(self.dir.join(id))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ContractStore for LocalStore {
    async fn save(&self, data: &[u8]) -> Result<String, StoreError> {
        fs::create_dir_all(&self.dir).await?;
        let id = new_contract_id();
        let path = self.path_for(&id)?;
        fs::write(&path, data).await?;
        info!(id = %id, bytes = data.len(), "contract written locally");
        Ok(id)
    }

    async fn read(&self, id: &str) -> Result<Vec<u8>, StoreError> {
        let path = self.path_for(id)?;
        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn url(&self, id: &str) -> String {
        format!("/api/download_contract?id={id}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());

        let id = store.save(b"PK\x03\x04contract").await.unwrap();
        assert!(id.ends_with(".docx"));

        let data = store.read(&id).await.unwrap();
        assert_eq!(data, b"PK\x03\x04contract");
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let err = store.read("fehlt.docx").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[tokio::test]
    async fn traversal_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::new(dir.path());
        let err = store.read("../etc/passwd").await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidId(_)));
    }

    #[test]
    fn download_url_points_at_the_api() {
        let store = LocalStore::new("/tmp/x");
        assert_eq!(store.url("abc.docx"), "/api/download_contract?id=abc.docx");
    }
}
