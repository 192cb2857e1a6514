//! Copied trade records.

use crate::money::Amount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// Order type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Market,
    Limit,
}

/// Execution status of a copied trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    Pending,
    Executed,
    Failed,
    Cancelled,
}

/// A trade executed (or attempted) under a subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub id: Uuid,
    pub subscription_id: Uuid,
    pub symbol: String,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub quantity: Decimal,
    pub price: Decimal,
    pub executed_quantity: Option<Decimal>,
    pub executed_price: Option<Decimal>,
    pub fee: Amount,
    pub fee_asset: String,
    pub status: TradeStatus,
    pub pnl: Option<Amount>,
    /// Signal-to-execution latency measured by the backend.
    pub latency_ms: u64,
    pub exchange_order_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub executed_at: Option<DateTime<Utc>>,
}

impl Trade {
    pub fn is_filled(&self) -> bool {
        self.status == TradeStatus::Executed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trade_deserializes_wire_shape() {
        let json = serde_json::json!({
            "id": "f2a7b9aa-03a2-47f0-8f1e-20e9c0ffee00",
            "subscription_id": "f2a7b9aa-03a2-47f0-8f1e-20e9c0ffee01",
            "symbol": "BTCUSDT",
            "side": "BUY",
            "order_type": "MARKET",
            "quantity": "0.5",
            "price": "50000",
            "executed_quantity": "0.5",
            "executed_price": "50010.25",
            "fee": "2.5",
            "fee_asset": "USDT",
            "status": "EXECUTED",
            "pnl": null,
            "latency_ms": 142,
            "exchange_order_id": "8812345",
            "created_at": "2025-01-01T00:00:00Z",
            "executed_at": "2025-01-01T00:00:01Z"
        });
        let trade: Trade = serde_json::from_value(json).unwrap();
        assert!(trade.is_filled());
        assert_eq!(trade.side, OrderSide::Buy);
        assert_eq!(trade.latency_ms, 142);
    }
}
