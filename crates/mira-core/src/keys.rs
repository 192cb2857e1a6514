//! Exchange API key management types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Supported exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exchange {
    Binance,
    Bybit,
    Okx,
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binance => write!(f, "binance"),
            Self::Bybit => write!(f, "bybit"),
            Self::Okx => write!(f, "okx"),
        }
    }
}

/// Stored exchange key view. The secret never leaves the backend;
/// only a masked key prefix is returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExchangeKey {
    pub id: Uuid,
    pub user_id: Uuid,
    pub exchange_name: Exchange,
    pub label: String,
    pub api_key_masked: String,
    pub is_active: bool,
    pub is_valid: bool,
    pub permissions: Vec<String>,
    pub last_used_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Key creation payload. Holds plaintext credentials, so the
/// buffers are wiped on drop.
#[derive(Debug, Clone, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct ExchangeKeyCreate {
    #[zeroize(skip)]
    pub exchange_name: Exchange,
    #[zeroize(skip)]
    pub label: String,
    pub api_key: String,
    pub api_secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
}

/// Partial key update (label / active flag only).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExchangeKeyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Result of backend-side key validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyValidation {
    pub valid: bool,
    pub permissions: Vec<String>,
}
