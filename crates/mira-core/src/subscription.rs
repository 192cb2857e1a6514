//! Copy-trading subscription types.

use crate::money::Amount;
use crate::trader::TraderProfile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subscription lifecycle status.
///
/// `Stopped` is terminal; a stopped subscription is never resumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionStatus {
    Active,
    Paused,
    Stopped,
}

/// How follower order sizes are derived from leader trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CopyMode {
    /// Scale by the follower's allocation relative to the leader's equity.
    #[default]
    Proportional,
    /// Fixed size per copied trade.
    Fixed,
}

/// An active copy relationship between a follower and a trader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subscription {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub leader_profile_id: Uuid,
    pub allocation_amount: Amount,
    pub copy_mode: CopyMode,
    pub status: SubscriptionStatus,
    pub total_copied_trades: u64,
    pub total_pnl: Amount,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub paused_at: Option<DateTime<Utc>>,
    pub stopped_at: Option<DateTime<Utc>>,
    /// Expanded leader profile, present on detail endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader_profile: Option<TraderProfile>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.status == SubscriptionStatus::Active
    }
}

/// Payload to start copying a trader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionCreate {
    pub leader_profile_id: Uuid,
    pub allocation_amount: Amount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_mode: Option<CopyMode>,
}

/// Partial subscription update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubscriptionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_mode: Option<CopyMode>,
}
