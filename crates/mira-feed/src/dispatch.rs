//! Applies parsed feed events to the application stores.

use crate::message::{ExecutionOutcome, FeedEvent};
use mira_stores::{AppStores, Component, ConnectionStatus, NotificationKind};
use tracing::debug;

/// Routes feed events into the store set.
#[derive(Clone)]
pub struct Dispatcher {
    stores: AppStores,
}

impl Dispatcher {
    pub fn new(stores: AppStores) -> Self {
        Self { stores }
    }

    pub fn stores(&self) -> &AppStores {
        &self.stores
    }

    /// Apply one event. Every event counts as a heartbeat.
    pub fn dispatch(&self, event: FeedEvent) {
        self.stores.health.record_heartbeat();

        match event {
            FeedEvent::SystemStatus(status) => {
                self.stores
                    .health
                    .set_status(Component::Sentinel, status.sentinel);
                self.stores
                    .health
                    .set_status(Component::Exchange, status.exchange);
                self.stores
                    .health
                    .update_latency(status.execution_latency, status.websocket_latency);
            }
            FeedEvent::TradeSignal(signal) => {
                debug!(trader_id = %signal.trader_id, symbol = %signal.symbol, "Trade signal");
                self.stores.notifications.push(
                    NotificationKind::Info,
                    format!("Signal: {:?} {}", signal.side, signal.symbol),
                    Some(format!("{} @ {}", signal.quantity, signal.price)),
                );
            }
            FeedEvent::TradeExecuted(executed) => match executed.status {
                ExecutionOutcome::Executed => {
                    self.stores.notifications.push(
                        NotificationKind::Success,
                        format!("Copied {:?} {}", executed.side, executed.symbol),
                        Some(format!(
                            "{} @ {} ({}ms)",
                            executed.executed_quantity, executed.executed_price, executed.latency
                        )),
                    );
                }
                ExecutionOutcome::Failed => {
                    self.stores.notifications.push(
                        NotificationKind::Error,
                        format!("Copy failed: {}", executed.symbol),
                        executed.error,
                    );
                }
            },
            FeedEvent::BalanceUpdate(update) => {
                debug!(account_id = %update.account_id, balance = %update.balance, "Balance update");
                self.stores
                    .health
                    .set_status(Component::Wallet, ConnectionStatus::Connected);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::{SystemStatusPayload, TradeExecutedPayload, TradeSignalPayload};
    use chrono::Utc;
    use mira_core::OrderSide;
    use rust_decimal_macros::dec;
    use tokio::sync::watch;
    use uuid::Uuid;

    fn stores() -> AppStores {
        let (_tx, rx) = watch::channel(false);
        AppStores::new(rx)
    }

    #[test]
    fn test_system_status_updates_health() {
        let stores = stores();
        let dispatcher = Dispatcher::new(stores.clone());

        dispatcher.dispatch(FeedEvent::SystemStatus(SystemStatusPayload {
            sentinel: ConnectionStatus::Connected,
            exchange: ConnectionStatus::Connected,
            execution_latency: 42,
            websocket_latency: Some(7),
        }));

        let snap = stores.health.snapshot();
        assert_eq!(snap.sentinel, ConnectionStatus::Connected);
        assert_eq!(snap.exchange, ConnectionStatus::Connected);
        assert_eq!(snap.execution_latency_ms, 42);
        assert_eq!(snap.websocket_latency_ms, 7);
        assert!(snap.last_heartbeat.is_some());
    }

    #[test]
    fn test_failed_execution_raises_error_notification() {
        let stores = stores();
        let dispatcher = Dispatcher::new(stores.clone());

        dispatcher.dispatch(FeedEvent::TradeExecuted(TradeExecutedPayload {
            trade_id: Uuid::new_v4(),
            subscription_id: Uuid::new_v4(),
            symbol: "BTCUSDT".to_string(),
            side: OrderSide::Buy,
            executed_quantity: dec!(0.5),
            executed_price: dec!(50000),
            latency: 80,
            status: ExecutionOutcome::Failed,
            error: Some("insufficient balance".to_string()),
        }));

        let items = stores.notifications.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, NotificationKind::Error);
        assert_eq!(items[0].message.as_deref(), Some("insufficient balance"));
    }

    #[test]
    fn test_successful_execution_raises_success_notification() {
        let stores = stores();
        let dispatcher = Dispatcher::new(stores.clone());

        dispatcher.dispatch(FeedEvent::TradeExecuted(TradeExecutedPayload {
            trade_id: Uuid::new_v4(),
            subscription_id: Uuid::new_v4(),
            symbol: "ETHUSDT".to_string(),
            side: OrderSide::Sell,
            executed_quantity: dec!(1),
            executed_price: dec!(3000),
            latency: 55,
            status: ExecutionOutcome::Executed,
            error: None,
        }));

        let items = stores.notifications.items();
        assert_eq!(items[0].kind, NotificationKind::Success);
        assert_eq!(stores.notifications.unread_count(), 1);
    }

    #[test]
    fn test_trade_signal_raises_info_notification() {
        let stores = stores();
        let dispatcher = Dispatcher::new(stores.clone());

        dispatcher.dispatch(FeedEvent::TradeSignal(TradeSignalPayload {
            trader_id: Uuid::new_v4(),
            symbol: "BTCUSDT".to_string(),
            side: OrderSide::Buy,
            price: dec!(50000),
            quantity: dec!(0.1),
            timestamp: Utc::now(),
        }));

        assert_eq!(
            stores.notifications.items()[0].kind,
            NotificationKind::Info
        );
    }
}
