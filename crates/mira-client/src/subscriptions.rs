//! Subscription (copy relationship) endpoints.

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::query;
use mira_core::{
    Page, Subscription, SubscriptionCreate, SubscriptionStatus, SubscriptionUpdate, Trade,
};
use serde::Deserialize;
use uuid::Uuid;

/// Response to the emergency pause-all operation.
#[derive(Debug, Clone, Deserialize)]
pub struct PauseAllResponse {
    pub message: String,
    pub paused_count: u32,
}

fn status_param(status: SubscriptionStatus) -> String {
    match status {
        SubscriptionStatus::Active => "ACTIVE",
        SubscriptionStatus::Paused => "PAUSED",
        SubscriptionStatus::Stopped => "STOPPED",
    }
    .to_string()
}

impl ApiClient {
    /// Start copying a trader.
    pub async fn create_subscription(
        &self,
        create: &SubscriptionCreate,
    ) -> ClientResult<Subscription> {
        self.post("/subscriptions", create).await
    }

    /// List the authenticated user's subscriptions, optionally filtered
    /// by status.
    pub async fn subscriptions(
        &self,
        status: Option<SubscriptionStatus>,
    ) -> ClientResult<Vec<Subscription>> {
        let q = query::build(&[("status", status.map(status_param))]);
        self.get(&format!("/subscriptions{q}")).await
    }

    /// Fetch one subscription.
    pub async fn subscription(&self, id: Uuid) -> ClientResult<Subscription> {
        self.get(&format!("/subscriptions/{id}")).await
    }

    /// Update allocation or copy mode.
    pub async fn update_subscription(
        &self,
        id: Uuid,
        update: &SubscriptionUpdate,
    ) -> ClientResult<Subscription> {
        self.patch(&format!("/subscriptions/{id}"), update).await
    }

    /// Pause copying. Open positions are left to run down server-side.
    pub async fn pause_subscription(&self, id: Uuid) -> ClientResult<Subscription> {
        self.post_empty(&format!("/subscriptions/{id}/pause")).await
    }

    /// Resume a paused subscription.
    pub async fn resume_subscription(&self, id: Uuid) -> ClientResult<Subscription> {
        self.post_empty(&format!("/subscriptions/{id}/resume"))
            .await
    }

    /// Stop copying permanently. A stopped subscription cannot resume.
    pub async fn stop_subscription(&self, id: Uuid) -> ClientResult<Subscription> {
        self.post_empty(&format!("/subscriptions/{id}/stop")).await
    }

    /// Trades copied under one subscription.
    pub async fn subscription_trades(
        &self,
        id: Uuid,
        page: u32,
        page_size: u32,
    ) -> ClientResult<Page<Trade>> {
        let q = query::build(&[
            ("page", Some(page.to_string())),
            ("page_size", Some(page_size.to_string())),
        ]);
        self.get(&format!("/subscriptions/{id}/trades{q}")).await
    }

    /// Emergency stop: pause every active subscription at once.
    pub async fn pause_all_subscriptions(&self) -> ClientResult<PauseAllResponse> {
        self.post_empty("/subscriptions/pause-all").await
    }
}
