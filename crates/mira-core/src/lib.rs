//! Core domain types for the Mira copy-trading client.
//!
//! This crate provides the types shared by every other crate:
//! - `Amount`: precision-safe monetary values
//! - `User`, `TraderProfile`, `Subscription`, `Trade`: platform entities
//! - `LedgerAccount`, `LedgerEntry`, `WalletBalance`: wallet accounting views
//! - `Page<T>`: paginated API responses

pub mod auth;
pub mod error;
pub mod keys;
pub mod money;
pub mod page;
pub mod subscription;
pub mod trade;
pub mod trader;
pub mod user;
pub mod wallet;

pub use auth::{LoginResponse, TokenPair, TwoFactorSetup};
pub use error::{CoreError, Result};
pub use keys::{Exchange, ExchangeKey, ExchangeKeyCreate, ExchangeKeyUpdate, KeyValidation};
pub use money::Amount;
pub use page::Page;
pub use subscription::{
    CopyMode, Subscription, SubscriptionCreate, SubscriptionStatus, SubscriptionUpdate,
};
pub use trade::{OrderSide, OrderType, Trade, TradeStatus};
pub use trader::{TraderProfile, TraderProfileCreate, TraderProfileUpdate, TraderStatus};
pub use user::{
    AuditLog, KycStatus, KycSummary, ProfileUpdate, TraderProfileSummary, User, UserCreate,
    UserFull, UserStatus,
};
pub use wallet::{LedgerAccount, LedgerEntry, TransactionType, WalletBalance};
