//! Wallet and ledger view types.
//!
//! The ledger itself lives in the backend; these are read models
//! returned by the wallet endpoints.

use crate::money::Amount;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Ledger transaction classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdrawal,
    TradePnl,
    Fee,
    ProfitShare,
    Referral,
    Adjustment,
}

impl TransactionType {
    /// Wire representation, used for query-string filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdrawal => "WITHDRAWAL",
            Self::TradePnl => "TRADE_PNL",
            Self::Fee => "FEE",
            Self::ProfitShare => "PROFIT_SHARE",
            Self::Referral => "REFERRAL",
            Self::Adjustment => "ADJUSTMENT",
        }
    }
}

/// A user's account within the ledger (one per currency/type).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerAccount {
    pub id: Uuid,
    pub user_id: Uuid,
    pub currency: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub balance: Amount,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single double-entry ledger posting against an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub account_id: Uuid,
    pub transaction_type: TransactionType,
    pub amount: Amount,
    pub currency: String,
    pub balance_before: Amount,
    pub balance_after: Amount,
    pub description: String,
    pub reference: Option<String>,
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Consistency check on a single posting.
    pub fn balances_consistent(&self) -> bool {
        self.balance_before + self.amount == self.balance_after
    }
}

/// Aggregate wallet balance summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletBalance {
    pub total: Amount,
    pub available: Amount,
    pub locked: Amount,
    pub currency: String,
}
