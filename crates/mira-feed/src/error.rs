//! Feed error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tokio_tungstenite::tungstenite::Error),

    #[error("Message parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Feed connection error: {0}")]
    Connection(String),
}

pub type FeedResult<T> = std::result::Result<T, FeedError>;
