//! System health store.
//!
//! Tracks the reachability of the backend's moving parts as reported
//! over the realtime feed: the execution engine ("sentinel"), the
//! exchange link, and wallet sync.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Connection status of one monitored component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    Connected,
    Connecting,
    #[default]
    Disconnected,
    Error,
}

/// Monitored backend components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    /// The copy-execution engine.
    Sentinel,
    /// Upstream exchange connectivity.
    Exchange,
    /// Wallet/ledger sync.
    Wallet,
}

/// Point-in-time view of system health.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HealthSnapshot {
    pub sentinel: ConnectionStatus,
    pub exchange: ConnectionStatus,
    pub wallet: ConnectionStatus,
    pub last_heartbeat: Option<DateTime<Utc>>,
    pub execution_latency_ms: u64,
    pub websocket_latency_ms: u64,
}

impl HealthSnapshot {
    /// True when every component is connected.
    pub fn all_connected(&self) -> bool {
        self.sentinel == ConnectionStatus::Connected
            && self.exchange == ConnectionStatus::Connected
            && self.wallet == ConnectionStatus::Connected
    }
}

/// Shared health state. Pure setters; nothing here is derived or async.
#[derive(Clone, Default)]
pub struct HealthStore {
    inner: Arc<RwLock<HealthSnapshot>>,
}

impl HealthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&self, component: Component, status: ConnectionStatus) {
        let mut state = self.inner.write();
        match component {
            Component::Sentinel => state.sentinel = status,
            Component::Exchange => state.exchange = status,
            Component::Wallet => state.wallet = status,
        }
    }

    /// Update latency samples. The websocket sample is optional and
    /// keeps its previous value when absent.
    pub fn update_latency(&self, execution_ms: u64, websocket_ms: Option<u64>) {
        let mut state = self.inner.write();
        state.execution_latency_ms = execution_ms;
        if let Some(ws) = websocket_ms {
            state.websocket_latency_ms = ws;
        }
    }

    pub fn record_heartbeat(&self) {
        self.inner.write().last_heartbeat = Some(Utc::now());
    }

    pub fn snapshot(&self) -> HealthSnapshot {
        self.inner.read().clone()
    }
}
