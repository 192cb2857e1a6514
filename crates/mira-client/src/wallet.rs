//! Wallet and ledger endpoints.

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::query;
use chrono::{DateTime, Utc};
use mira_core::{Amount, LedgerAccount, LedgerEntry, Page, TransactionType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Filters for the ledger listing.
#[derive(Debug, Clone, Default)]
pub struct LedgerParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub transaction_type: Option<TransactionType>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

#[derive(Serialize)]
struct DepositRequest<'a> {
    amount: Amount,
    currency: &'a str,
}

/// A deposit handoff to the payment provider.
#[derive(Debug, Clone, Deserialize)]
pub struct DepositInit {
    pub payment_url: String,
    pub reference: String,
}

#[derive(Serialize)]
struct WithdrawalRequest<'a> {
    amount: Amount,
    currency: &'a str,
    bank_account_id: Uuid,
}

/// Acknowledged withdrawal request.
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawalReceipt {
    pub reference: String,
    pub status: String,
}

impl ApiClient {
    /// Balances of the user's ledger accounts.
    pub async fn wallet_balance(&self) -> ClientResult<Vec<LedgerAccount>> {
        self.get("/wallet/balance").await
    }

    /// Paginated ledger entries, filterable by type and date range.
    pub async fn ledger(&self, params: &LedgerParams) -> ClientResult<Page<LedgerEntry>> {
        let q = query::build(&[
            ("page", params.page.map(|p| p.to_string())),
            ("page_size", params.page_size.map(|p| p.to_string())),
            (
                "transaction_type",
                params.transaction_type.map(|t| t.as_str().to_string()),
            ),
            ("start_date", params.start_date.map(|d| d.to_rfc3339())),
            ("end_date", params.end_date.map(|d| d.to_rfc3339())),
        ]);
        self.get(&format!("/wallet/ledger{q}")).await
    }

    /// Start a deposit; the user completes payment at the returned URL.
    pub async fn initiate_deposit(
        &self,
        amount: Amount,
        currency: &str,
    ) -> ClientResult<DepositInit> {
        self.post("/wallet/deposit", &DepositRequest { amount, currency })
            .await
    }

    /// Request a withdrawal to a registered bank account.
    pub async fn request_withdrawal(
        &self,
        amount: Amount,
        currency: &str,
        bank_account_id: Uuid,
    ) -> ClientResult<WithdrawalReceipt> {
        self.post(
            "/wallet/withdraw",
            &WithdrawalRequest {
                amount,
                currency,
                bank_account_id,
            },
        )
        .await
    }
}
