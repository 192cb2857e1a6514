//! Client error taxonomy.
//!
//! Every request resolves to a success value or exactly one of these
//! variants; failures are never swallowed.

use crate::token::TokenStoreError;
use thiserror::Error;

/// Fallback machine code when an error body cannot be parsed.
pub const UNKNOWN_ERROR_CODE: &str = "UNKNOWN_ERROR";

#[derive(Debug, Error)]
pub enum ClientError {
    /// Server responded non-2xx with a structured body. Recoverable at
    /// the call site (e.g., display the validation message).
    #[error("API error {status} [{code}]: {message}")]
    Api {
        code: String,
        message: String,
        status: u16,
    },

    /// Request could not complete at the transport level (DNS,
    /// connection refused, timeout). Distinct from HTTP-status errors
    /// so callers can tell "server rejected" from "server unreachable".
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Token refresh failed or no refresh token was present. Terminal;
    /// tokens are cleared and the caller must re-authenticate.
    #[error("Session expired, please login again")]
    SessionExpired,

    /// Token storage failed (unavailable directory, bad permissions).
    #[error("Token store error: {0}")]
    TokenStore(#[from] TokenStoreError),

    /// HTTP client construction or URL configuration failure.
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}

impl ClientError {
    /// HTTP status associated with this error. Network-level failures
    /// report 0, matching the "no response" convention.
    pub fn status(&self) -> u16 {
        match self {
            Self::Api { status, .. } => *status,
            Self::SessionExpired => 401,
            _ => 0,
        }
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &str {
        match self {
            Self::Api { code, .. } => code,
            Self::Network(_) => "NETWORK_ERROR",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::TokenStore(_) => "TOKEN_STORE_ERROR",
            Self::HttpClient(_) => "CLIENT_ERROR",
        }
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;
