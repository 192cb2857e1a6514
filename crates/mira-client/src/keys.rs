//! Exchange API key endpoints.

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::query;
use mira_core::{Exchange, ExchangeKey, ExchangeKeyCreate, ExchangeKeyUpdate, KeyValidation};
use uuid::Uuid;

impl ApiClient {
    /// Register a new exchange key. The plaintext secret is sent once
    /// and stored encrypted server-side.
    pub async fn create_key(&self, create: &ExchangeKeyCreate) -> ClientResult<ExchangeKey> {
        self.post("/keys", create).await
    }

    /// List stored keys, optionally filtered by exchange.
    pub async fn keys(&self, exchange: Option<Exchange>) -> ClientResult<Vec<ExchangeKey>> {
        let q = query::build(&[("exchange", exchange.map(|e| e.to_string()))]);
        self.get(&format!("/keys{q}")).await
    }

    /// Fetch one key by id.
    pub async fn key(&self, id: Uuid) -> ClientResult<ExchangeKey> {
        self.get(&format!("/keys/{id}")).await
    }

    /// Update a key's label or active flag.
    pub async fn update_key(
        &self,
        id: Uuid,
        update: &ExchangeKeyUpdate,
    ) -> ClientResult<ExchangeKey> {
        self.patch(&format!("/keys/{id}"), update).await
    }

    /// Revoke a key. The server responds 204.
    pub async fn revoke_key(&self, id: Uuid) -> ClientResult<()> {
        self.delete(&format!("/keys/{id}")).await
    }

    /// Ask the backend to validate the key against the exchange.
    pub async fn validate_key(&self, id: Uuid) -> ClientResult<KeyValidation> {
        self.post_empty(&format!("/keys/{id}/validate")).await
    }
}
