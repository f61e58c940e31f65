//! Storage collaborator for finished contracts.
//!
//! The rendering core never touches storage directly; it hands the final
//! bytes to a [`ContractStore`] and gets an opaque id back. Two
//! implementations exist: a local directory (the default) and a remote
//! blob endpoint selected via `MIETWERK_BLOB_ENDPOINT`.

use std::sync::{Arc, OnceLock};

use async_trait::async_trait;

mod blob;
mod error;
mod local;

pub use blob::BlobStore;
pub use error::StoreError;
pub use local::LocalStore;

/// MIME type of a finished contract document.
pub const CONTRACT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Environment variable selecting the remote blob endpoint.
pub const BLOB_ENDPOINT_VAR: &str = "MIETWERK_BLOB_ENDPOINT";

/// Environment variable overriding the local contracts directory.
pub const CONTRACTS_DIR_VAR: &str = "MIETWERK_CONTRACTS_DIR";

#[async_trait]
pub trait ContractStore: Send + Sync {
    /// Persist the document and return its opaque id.
    async fn save(&self, data: &[u8]) -> Result<String, StoreError>;

    /// Read a stored document back; a missing id is [`StoreError::NotFound`].
    async fn read(&self, id: &str) -> Result<Vec<u8>, StoreError>;

    /// Download URL for a stored document.
    fn url(&self, id: &str) -> String;
}

/// Fresh opaque contract id.
pub fn new_contract_id() -> String {
    format!("{}.docx", uuid::Uuid::new_v4().simple())
}

static SHARED: OnceLock<Arc<dyn ContractStore>> = OnceLock::new();

/// Process-wide store handle, initialized at most once from the
/// environment: a set `MIETWERK_BLOB_ENDPOINT` selects the remote store,
/// anything else the local directory.
pub fn shared_store() -> Arc<dyn ContractStore> {
    SHARED
        .get_or_init(|| match std::env::var(BLOB_ENDPOINT_VAR) {
            Ok(endpoint) if !endpoint.trim().is_empty() => {
                Arc::new(BlobStore::new(endpoint)) as Arc<dyn ContractStore>
            }
            _ => Arc::new(LocalStore::from_env()) as Arc<dyn ContractStore>,
        })
        .clone()
}
