//! Trader discovery and trader-profile endpoints.

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::query;
use mira_core::{Page, Trade, TraderProfile, TraderProfileCreate, TraderProfileUpdate};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Filters for the trader leaderboard.
#[derive(Debug, Clone, Default)]
pub struct TraderListParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    /// Server-side sort key, e.g. "roi" or "win_rate".
    pub sort_by: Option<String>,
    /// Minimum 30-day ROI filter, in percent.
    pub min_roi: Option<Decimal>,
}

impl ApiClient {
    /// List active traders available for copying.
    pub async fn traders(&self, params: &TraderListParams) -> ClientResult<Page<TraderProfile>> {
        let q = query::build(&[
            ("page", params.page.map(|p| p.to_string())),
            ("page_size", params.page_size.map(|p| p.to_string())),
            ("sort_by", params.sort_by.clone()),
            ("min_roi", params.min_roi.map(|r| r.to_string())),
        ]);
        self.get(&format!("/traders{q}")).await
    }

    /// Fetch one trader profile.
    pub async fn trader(&self, id: Uuid) -> ClientResult<TraderProfile> {
        self.get(&format!("/traders/{id}")).await
    }

    /// Trade history of a trader.
    pub async fn trader_trades(
        &self,
        id: Uuid,
        page: u32,
        page_size: u32,
    ) -> ClientResult<Page<Trade>> {
        let q = query::build(&[
            ("page", Some(page.to_string())),
            ("page_size", Some(page_size.to_string())),
        ]);
        self.get(&format!("/traders/{id}/trades{q}")).await
    }

    /// Apply to become a trader.
    pub async fn apply_trader(&self, create: &TraderProfileCreate) -> ClientResult<TraderProfile> {
        self.post("/traders/apply", create).await
    }

    /// The authenticated user's own trader profile.
    pub async fn my_trader_profile(&self) -> ClientResult<TraderProfile> {
        self.get("/traders/me").await
    }

    /// Update the authenticated user's trader profile.
    pub async fn update_my_trader_profile(
        &self,
        update: &TraderProfileUpdate,
    ) -> ClientResult<TraderProfile> {
        self.patch("/traders/me", update).await
    }
}
