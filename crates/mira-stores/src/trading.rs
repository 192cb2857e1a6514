//! Trading selection store.
//!
//! Holds the trader currently inspected in the UI and the user's
//! active-copy summaries. Plain CRUD; no referential integrity is
//! enforced between the selection and the copy list.

use chrono::{DateTime, Utc};
use mira_core::{Amount, SubscriptionStatus, TraderProfile};
use parking_lot::RwLock;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Summary of one running copy relationship, as shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveCopy {
    pub id: Uuid,
    pub trader_id: Uuid,
    pub trader_alias: String,
    pub started_at: DateTime<Utc>,
    pub allocation: Amount,
    pub profit_loss: Amount,
    pub profit_loss_pct: Decimal,
    pub trades_executed: u64,
    pub status: SubscriptionStatus,
}

#[derive(Default)]
struct Inner {
    selected_trader: Option<TraderProfile>,
    active_copies: Vec<ActiveCopy>,
    is_paused: bool,
}

/// Shared trading-selection state.
#[derive(Clone, Default)]
pub struct TradingStore {
    inner: Arc<RwLock<Inner>>,
}

impl TradingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_trader(&self, trader: Option<TraderProfile>) {
        self.inner.write().selected_trader = trader;
    }

    pub fn selected_trader(&self) -> Option<TraderProfile> {
        self.inner.read().selected_trader.clone()
    }

    pub fn set_active_copies(&self, copies: Vec<ActiveCopy>) {
        self.inner.write().active_copies = copies;
    }

    pub fn add_copy(&self, copy: ActiveCopy) {
        self.inner.write().active_copies.push(copy);
    }

    /// Remove a copy by id. Returns false for unknown ids.
    pub fn remove_copy(&self, id: Uuid) -> bool {
        let mut state = self.inner.write();
        let before = state.active_copies.len();
        state.active_copies.retain(|c| c.id != id);
        state.active_copies.len() < before
    }

    pub fn active_copies(&self) -> Vec<ActiveCopy> {
        self.inner.read().active_copies.clone()
    }

    pub fn pause_all(&self) {
        self.inner.write().is_paused = true;
    }

    pub fn resume_all(&self) {
        self.inner.write().is_paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.inner.read().is_paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn copy(id: Uuid) -> ActiveCopy {
        ActiveCopy {
            id,
            trader_id: Uuid::new_v4(),
            trader_alias: "momentum".to_string(),
            started_at: Utc::now(),
            allocation: Amount::new(dec!(500)),
            profit_loss: Amount::new(dec!(12.5)),
            profit_loss_pct: dec!(2.5),
            trades_executed: 8,
            status: SubscriptionStatus::Active,
        }
    }

    #[test]
    fn test_copy_crud() {
        let store = TradingStore::new();
        let id = Uuid::new_v4();
        store.add_copy(copy(id));
        store.add_copy(copy(Uuid::new_v4()));
        assert_eq!(store.active_copies().len(), 2);

        assert!(store.remove_copy(id));
        assert!(!store.remove_copy(id));
        assert_eq!(store.active_copies().len(), 1);
    }

    #[test]
    fn test_pause_resume() {
        let store = TradingStore::new();
        assert!(!store.is_paused());
        store.pause_all();
        assert!(store.is_paused());
        store.resume_all();
        assert!(!store.is_paused());
    }
}
