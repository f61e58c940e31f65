//! Remote blob store: plain HTTP PUT/GET against a base endpoint.

use async_trait::async_trait;
use tracing::info;

use crate::{CONTRACT_CONTENT_TYPE, ContractStore, StoreError, new_contract_id};

pub struct BlobStore {
    client: reqwest::Client,
    base_url: String,
}

impl BlobStore {
    /// `base_url` is the container endpoint, e.g.
    /// `http://127.0.0.1:10000/contracts-temp` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ContractStore for BlobStore {
    async fn save(&self, data: &[u8]) -> Result<String, StoreError> {
        let id = new_contract_id();
        let url = self.url(&id);

        info!(url = %url, bytes = data.len(), "uploading contract");
        let resp = self
            .client
            .put(&url)
            .header(reqwest::header::CONTENT_TYPE, CONTRACT_CONTENT_TYPE)
            .body(data.to_vec())
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Server { status: status.as_u16(), body });
        }
        Ok(id)
    }

    async fn read(&self, id: &str) -> Result<Vec<u8>, StoreError> {
        let url = self.url(id);

        info!(url = %url, "downloading contract");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(StoreError::Server { status: status.as_u16(), body });
        }
        Ok(resp.bytes().await?.to_vec())
    }

    fn url(&self, id: &str) -> String {
        format!("{}/{id}", self.base_url)
    }
}
