//! Realtime feed message types.
//!
//! Messages arrive as JSON envelopes `{"type": ..., "payload": ...}`.
//! Payload fields are camelCase on the wire.

use chrono::{DateTime, Utc};
use mira_core::OrderSide;
use mira_stores::ConnectionStatus;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

/// Engine/exchange reachability report, sent on every heartbeat.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatusPayload {
    pub sentinel: ConnectionStatus,
    pub exchange: ConnectionStatus,
    /// Signal-to-order latency measured by the engine (ms).
    pub execution_latency: u64,
    /// Round-trip latency of the feed itself (ms), when measured.
    #[serde(default)]
    pub websocket_latency: Option<u64>,
}

/// A leader trade observed by the engine.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSignalPayload {
    pub trader_id: Uuid,
    pub symbol: String,
    pub side: OrderSide,
    pub price: Decimal,
    pub quantity: Decimal,
    pub timestamp: DateTime<Utc>,
}

/// Outcome of one copied execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionOutcome {
    Executed,
    Failed,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeExecutedPayload {
    pub trade_id: Uuid,
    pub subscription_id: Uuid,
    pub symbol: String,
    pub side: OrderSide,
    pub executed_quantity: Decimal,
    pub executed_price: Decimal,
    /// Copy latency (ms).
    pub latency: u64,
    pub status: ExecutionOutcome,
    #[serde(default)]
    pub error: Option<String>,
}

/// Wallet balance change pushed after ledger postings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceUpdatePayload {
    pub account_id: Uuid,
    pub balance: Decimal,
    pub available: Decimal,
    pub locked: Decimal,
}

/// A parsed feed event.
#[derive(Debug, Clone)]
pub enum FeedEvent {
    SystemStatus(SystemStatusPayload),
    TradeSignal(TradeSignalPayload),
    TradeExecuted(TradeExecutedPayload),
    BalanceUpdate(BalanceUpdatePayload),
}
