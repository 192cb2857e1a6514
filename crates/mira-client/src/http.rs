//! Authenticated request executor.
//!
//! Wraps outbound requests with JSON headers, bearer-token injection,
//! and a single transparent re-authentication cycle on 401:
//!
//! ```text
//! Sending -> Success | Api | Network
//! Sending(401, auth) -> Refreshing -> RetrySending -> Success | Api | Network
//!                                  -> RefreshFailed -> SessionExpired
//! ```
//!
//! At most one refresh-and-retry cycle runs per logical call; a 401 on
//! the retry is terminal. Concurrent 401s coalesce onto a single
//! in-flight refresh instead of each hitting the refresh endpoint.

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, UNKNOWN_ERROR_CODE};
use crate::token::TokenManager;
use mira_core::TokenPair;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Whether a request participates in bearer auth and 401 recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Auth {
    /// Attach the access token when present; attempt refresh on 401.
    Required,
    /// Never attach an Authorization header, regardless of stored tokens.
    None,
}

#[derive(Debug, Serialize)]
struct RefreshRequest {
    refresh_token: String,
}

#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the copy-trading REST API.
///
/// Cheap to clone; clones share the connection pool, token manager,
/// and refresh gate.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: TokenManager,
    /// Single-flight gate: concurrent 401s queue here so only one
    /// refresh call reaches the backend.
    refresh_gate: Arc<Mutex<()>>,
}

impl ApiClient {
    /// Create a client with an in-memory token store.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        Self::with_tokens(config, TokenManager::in_memory())
    }

    /// Create a client over an existing token manager (e.g. file-backed).
    pub fn with_tokens(config: ClientConfig, tokens: TokenManager) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::HttpClient(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config,
            tokens,
            refresh_gate: Arc::new(Mutex::new(())),
        })
    }

    pub fn tokens(&self) -> &TokenManager {
        &self.tokens
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub(crate) fn http_client(&self) -> &reqwest::Client {
        &self.http
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.api_url(), path)
    }

    // Convenience wrappers used by the endpoint modules.

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(Method::GET, path, None::<&()>, Auth::Required)
            .await
    }

    pub(crate) async fn get_public<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(Method::GET, path, None::<&()>, Auth::None)
            .await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body), Auth::Required)
            .await
    }

    pub(crate) async fn post_public<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(body), Auth::None)
            .await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(Method::POST, path, None::<&()>, Auth::Required)
            .await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PATCH, path, Some(body), Auth::Required)
            .await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.request(Method::DELETE, path, None::<&()>, Auth::Required)
            .await
    }

    /// Form-encoded POST outside the bearer-auth path (OAuth2 login).
    pub(crate) async fn post_form<F, T>(&self, path: &str, form: &F) -> ClientResult<T>
    where
        F: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .map_err(ClientError::Network)?;
        handle_response(response).await
    }

    /// Execute one logical request, including the 401 recovery cycle.
    pub(crate) async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let used_token = match auth {
            Auth::Required => self.tokens.access_token(),
            Auth::None => None,
        };

        let response = self
            .send(method.clone(), &url, body, used_token.as_deref())
            .await?;

        if response.status() == StatusCode::UNAUTHORIZED && auth == Auth::Required {
            debug!(%url, "401 received, attempting token refresh");
            let fresh = self.refresh_access_token(used_token.as_deref()).await?;
            // Exactly one retry. Another 401 here surfaces as an API
            // error rather than a second refresh cycle.
            let retry = self.send(method, &url, body, Some(&fresh)).await?;
            return handle_response(retry).await;
        }

        handle_response(response).await
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        bearer: Option<&str>,
    ) -> ClientResult<Response> {
        let mut request = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.map_err(ClientError::Network)
    }

    /// Exchange the refresh token for a new pair, coalescing concurrent
    /// attempts. `used_token` is the access token the failed request
    /// carried; if the stored token already differs, another task
    /// refreshed while we waited on the gate and its result is reused.
    async fn refresh_access_token(&self, used_token: Option<&str>) -> ClientResult<String> {
        let _guard = self.refresh_gate.lock().await;

        if let Some(current) = self.tokens.access_token() {
            if used_token != Some(current.as_str()) {
                debug!("Reusing token refreshed by a concurrent request");
                return Ok(current);
            }
        }

        let Some(refresh_token) = self.tokens.refresh_token() else {
            self.expire_session();
            return Err(ClientError::SessionExpired);
        };

        let url = format!("{}/auth/refresh", self.config.api_url());
        let result = self
            .http
            .post(&url)
            .json(&RefreshRequest { refresh_token })
            .send()
            .await;

        let response = match result {
            Ok(r) if r.status().is_success() => r,
            Ok(r) => {
                warn!(status = r.status().as_u16(), "Token refresh rejected");
                self.expire_session();
                return Err(ClientError::SessionExpired);
            }
            Err(e) => {
                warn!(error = %e, "Token refresh request failed");
                self.expire_session();
                return Err(ClientError::SessionExpired);
            }
        };

        let pair: TokenPair = match response.json().await {
            Ok(pair) => pair,
            Err(e) => {
                warn!(error = %e, "Token refresh response unparseable");
                self.expire_session();
                return Err(ClientError::SessionExpired);
            }
        };

        let access = pair.access_token.clone();
        self.tokens.set_tokens(pair)?;
        debug!("Token refresh succeeded");
        Ok(access)
    }

    /// Clear tokens on terminal auth failure. The presence channel
    /// flips to unauthenticated, which drives the login redirect in
    /// consumers. A failing store cannot make the session *more*
    /// authenticated, so clear errors are logged and dropped here.
    fn expire_session(&self) {
        if let Err(e) = self.tokens.clear() {
            warn!(error = %e, "Failed to clear tokens on session expiry");
        }
    }
}

/// Map a response to a typed success or error.
async fn handle_response<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();

    if !status.is_success() {
        let reason = status
            .canonical_reason()
            .unwrap_or("An error occurred")
            .to_string();
        let body = response.bytes().await.map_err(ClientError::Network)?;
        let parsed: ApiErrorBody = serde_json::from_slice(&body).unwrap_or_default();
        return Err(ClientError::Api {
            code: parsed.error.unwrap_or_else(|| UNKNOWN_ERROR_CODE.to_string()),
            message: parsed.message.unwrap_or(reason),
            status: status.as_u16(),
        });
    }

    // 204 carries no body; deserialize unit/Option targets from null
    // instead of attempting a JSON parse.
    if status == StatusCode::NO_CONTENT {
        return serde_json::from_value(serde_json::Value::Null)
            .map_err(|e| ClientError::HttpClient(format!("empty response for typed call: {e}")));
    }

    response.json().await.map_err(ClientError::Network)
}
