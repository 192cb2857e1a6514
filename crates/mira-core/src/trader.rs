//! Trader profile types.

use crate::money::Amount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trader lifecycle status.
///
/// New traders start in `Incubation` after approval and graduate to
/// `Active` once their track record qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TraderStatus {
    Draft,
    Pending,
    Incubation,
    Active,
    Suspended,
}

/// Public trader profile listed for copy trading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraderProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub alias: String,
    pub bio: Option<String>,
    pub status: TraderStatus,
    pub is_active: bool,
    pub performance_fee_percentage: Decimal,
    pub min_allocation_amount: Amount,
    pub max_allocation_amount: Option<Amount>,
    pub max_subscribers: Option<u32>,
    pub current_subscribers: u32,
    pub total_pnl: Amount,
    pub win_rate: Decimal,
    pub total_trades: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Application payload for becoming a trader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraderProfileCreate {
    pub alias: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_fee_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_allocation_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_allocation_amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_subscribers: Option<u32>,
}

/// Partial update for an existing trader profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraderProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance_fee_percentage: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_subscribers: Option<u32>,
}

impl TraderProfile {
    /// Whether the trader currently accepts new subscribers.
    pub fn accepts_subscribers(&self) -> bool {
        if !self.is_active || self.status != TraderStatus::Active {
            return false;
        }
        match self.max_subscribers {
            Some(max) => self.current_subscribers < max,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn profile(status: TraderStatus, current: u32, max: Option<u32>) -> TraderProfile {
        TraderProfile {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            alias: "momentum".to_string(),
            bio: None,
            status,
            is_active: true,
            performance_fee_percentage: dec!(10),
            min_allocation_amount: Amount::new(dec!(100)),
            max_allocation_amount: None,
            max_subscribers: max,
            current_subscribers: current,
            total_pnl: Amount::ZERO,
            win_rate: dec!(0.55),
            total_trades: 120,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_accepts_subscribers_capacity() {
        assert!(profile(TraderStatus::Active, 5, Some(10)).accepts_subscribers());
        assert!(!profile(TraderStatus::Active, 10, Some(10)).accepts_subscribers());
        assert!(profile(TraderStatus::Active, 1000, None).accepts_subscribers());
    }

    #[test]
    fn test_accepts_subscribers_requires_active_status() {
        assert!(!profile(TraderStatus::Incubation, 0, None).accepts_subscribers());
        assert!(!profile(TraderStatus::Suspended, 0, None).accepts_subscribers());
    }
}
