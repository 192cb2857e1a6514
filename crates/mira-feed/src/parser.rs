//! Feed message parsing.
//!
//! Messages arrive as JSON envelopes `{"type": "...", "payload": {...}}`.
//! Unknown message types are logged at debug level and skipped so the
//! backend can add new kinds without breaking deployed clients.

use crate::error::FeedResult;
use crate::message::{
    BalanceUpdatePayload, FeedEvent, SystemStatusPayload, TradeExecutedPayload, TradeSignalPayload,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    payload: Value,
}

/// Parse one raw text frame into a typed event.
///
/// Returns `Ok(None)` for message types this client does not handle.
/// A known type with a malformed payload is an error.
pub fn parse_message(text: &str) -> FeedResult<Option<FeedEvent>> {
    let envelope: Envelope = serde_json::from_str(text)?;

    let event = match envelope.kind.as_str() {
        "system_status" => {
            let payload: SystemStatusPayload = serde_json::from_value(envelope.payload)?;
            FeedEvent::SystemStatus(payload)
        }
        "trade_signal" => {
            let payload: TradeSignalPayload = serde_json::from_value(envelope.payload)?;
            FeedEvent::TradeSignal(payload)
        }
        "trade_executed" => {
            let payload: TradeExecutedPayload = serde_json::from_value(envelope.payload)?;
            FeedEvent::TradeExecuted(payload)
        }
        "balance_update" => {
            let payload: BalanceUpdatePayload = serde_json::from_value(envelope.payload)?;
            FeedEvent::BalanceUpdate(payload)
        }
        other => {
            debug!(kind = %other, "Unknown feed message type, ignoring");
            return Ok(None);
        }
    };

    Ok(Some(event))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ExecutionOutcome;
    use mira_stores::ConnectionStatus;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_parse_system_status() {
        let text = json!({
            "type": "system_status",
            "payload": {
                "sentinel": "connected",
                "exchange": "error",
                "executionLatency": 42,
                "websocketLatency": 7
            }
        })
        .to_string();

        let event = parse_message(&text).unwrap().unwrap();
        let FeedEvent::SystemStatus(status) = event else {
            panic!("Expected SystemStatus");
        };
        assert_eq!(status.sentinel, ConnectionStatus::Connected);
        assert_eq!(status.exchange, ConnectionStatus::Error);
        assert_eq!(status.execution_latency, 42);
        assert_eq!(status.websocket_latency, Some(7));
    }

    #[test]
    fn test_parse_system_status_without_websocket_sample() {
        let text = json!({
            "type": "system_status",
            "payload": {
                "sentinel": "connected",
                "exchange": "connected",
                "executionLatency": 10
            }
        })
        .to_string();

        let event = parse_message(&text).unwrap().unwrap();
        let FeedEvent::SystemStatus(status) = event else {
            panic!("Expected SystemStatus");
        };
        assert_eq!(status.websocket_latency, None);
    }

    #[test]
    fn test_parse_trade_signal() {
        let text = json!({
            "type": "trade_signal",
            "payload": {
                "traderId": "0a0b8c4e-7f4a-4d2c-9a42-0f1e2d3c4b5a",
                "symbol": "BTCUSDT",
                "side": "BUY",
                "price": "50000.25",
                "quantity": "0.5",
                "timestamp": "2024-06-01T12:00:00Z"
            }
        })
        .to_string();

        let event = parse_message(&text).unwrap().unwrap();
        let FeedEvent::TradeSignal(signal) = event else {
            panic!("Expected TradeSignal");
        };
        assert_eq!(signal.symbol, "BTCUSDT");
        assert_eq!(signal.price, dec!(50000.25));
    }

    #[test]
    fn test_parse_trade_executed_failure() {
        let text = json!({
            "type": "trade_executed",
            "payload": {
                "tradeId": "1a0b8c4e-7f4a-4d2c-9a42-0f1e2d3c4b5a",
                "subscriptionId": "2a0b8c4e-7f4a-4d2c-9a42-0f1e2d3c4b5a",
                "symbol": "ETHUSDT",
                "side": "SELL",
                "executedQuantity": "1.2",
                "executedPrice": "3000",
                "latency": 120,
                "status": "failed",
                "error": "insufficient balance"
            }
        })
        .to_string();

        let event = parse_message(&text).unwrap().unwrap();
        let FeedEvent::TradeExecuted(executed) = event else {
            panic!("Expected TradeExecuted");
        };
        assert_eq!(executed.status, ExecutionOutcome::Failed);
        assert_eq!(executed.error.as_deref(), Some("insufficient balance"));
    }

    #[test]
    fn test_parse_balance_update() {
        let text = json!({
            "type": "balance_update",
            "payload": {
                "accountId": "3a0b8c4e-7f4a-4d2c-9a42-0f1e2d3c4b5a",
                "balance": "1000.50",
                "available": "900.50",
                "locked": "100.00"
            }
        })
        .to_string();

        let event = parse_message(&text).unwrap().unwrap();
        let FeedEvent::BalanceUpdate(update) = event else {
            panic!("Expected BalanceUpdate");
        };
        assert_eq!(update.balance, dec!(1000.50));
        assert_eq!(update.locked, dec!(100.00));
    }

    #[test]
    fn test_unknown_type_is_skipped() {
        let text = json!({
            "type": "leaderboard_update",
            "payload": {"anything": true}
        })
        .to_string();

        assert!(parse_message(&text).unwrap().is_none());
    }

    #[test]
    fn test_known_type_with_bad_payload_is_error() {
        let text = json!({
            "type": "system_status",
            "payload": {"sentinel": 5}
        })
        .to_string();

        assert!(parse_message(&text).is_err());
    }

    #[test]
    fn test_non_json_frame_is_error() {
        assert!(parse_message("not json").is_err());
    }
}
