//! Authenticated REST client for the Mira copy-trading API.
//!
//! Layers, bottom up:
//! - [`token`]: credential storage (`TokenStore` seam, `TokenManager`)
//! - [`http`]: the request executor with bearer injection and a single
//!   coalesced refresh-and-retry cycle on 401
//! - endpoint modules (`auth`, `users`, `traders`, `keys`,
//!   `subscriptions`, `wallet`, `misc`) exposing the typed API surface
//!
//! Typical setup:
//!
//! ```no_run
//! use mira_client::{ApiClient, ClientConfig};
//!
//! # async fn run() -> mira_client::ClientResult<()> {
//! let client = ApiClient::new(ClientConfig::from_env())?;
//! client.login("user@example.com", "secret").await?;
//! let accounts = client.wallet_balance().await?;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod keys;
pub mod misc;
mod query;
pub mod subscriptions;
pub mod token;
pub mod traders;
pub mod users;
pub mod wallet;

pub use auth::Ack;
pub use config::{ClientConfig, API_PREFIX, API_URL_ENV, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult, UNKNOWN_ERROR_CODE};
pub use http::{ApiClient, Auth};
pub use misc::HealthStatus;
pub use subscriptions::PauseAllResponse;
pub use token::{FileTokenStore, MemoryTokenStore, TokenManager, TokenStore, TokenStoreError};
pub use traders::TraderListParams;
pub use wallet::{DepositInit, LedgerParams, WithdrawalReceipt};
