//! Waitlist and health endpoints.

use crate::auth::Ack;
use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct WaitlistJoin<'a> {
    email: &'a str,
}

/// Backend liveness report.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

impl ApiClient {
    /// Join the product waitlist. Unauthenticated.
    pub async fn join_waitlist(&self, email: &str) -> ClientResult<Ack> {
        self.post_public("/waitlist", &WaitlistJoin { email }).await
    }

    /// Liveness check against the bare base URL (`/health` lives
    /// outside the versioned API prefix).
    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let url = format!(
            "{}/health",
            self.config().base_url.trim_end_matches('/')
        );
        let response = self
            .http_client()
            .get(&url)
            .send()
            .await
            .map_err(ClientError::Network)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                code: crate::error::UNKNOWN_ERROR_CODE.to_string(),
                message: status
                    .canonical_reason()
                    .unwrap_or("health check failed")
                    .to_string(),
                status: status.as_u16(),
            });
        }
        response.json().await.map_err(ClientError::Network)
    }
}
