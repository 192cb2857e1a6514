//! Realtime event feed for the Mira copy-trading client.
//!
//! Maintains a WebSocket connection to the backend, parses the event
//! stream, and applies updates to the shared [`mira_stores`] containers.

pub mod connection;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod parser;

pub use connection::{FeedConfig, FeedConnection};
pub use dispatch::Dispatcher;
pub use error::{FeedError, FeedResult};
pub use message::{
    BalanceUpdatePayload, ExecutionOutcome, FeedEvent, SystemStatusPayload, TradeExecutedPayload,
    TradeSignalPayload,
};
pub use parser::parse_message;
