//! In-process state stores for the Mira client.
//!
//! Each store is an independent, synchronous container with a
//! `parking_lot::RwLock` interior; stores never coordinate with each
//! other. The [`AppStores`] aggregate is built once at application
//! root and cloned into consumers (all clones share state).

pub mod health;
pub mod notifications;
pub mod session;
pub mod trading;

pub use health::{Component, ConnectionStatus, HealthSnapshot, HealthStore};
pub use notifications::{Notification, NotificationKind, NotificationStore, MAX_NOTIFICATIONS};
pub use session::SessionStore;
pub use trading::{ActiveCopy, TradingStore};

use tokio::sync::watch;

/// All stores, wired together at application root.
#[derive(Clone)]
pub struct AppStores {
    pub health: HealthStore,
    pub notifications: NotificationStore,
    pub session: SessionStore,
    pub trading: TradingStore,
}

impl AppStores {
    /// Build the store set. `auth` is the token manager's presence
    /// subscription (`TokenManager::subscribe`), the single source of
    /// truth for session authentication.
    pub fn new(auth: watch::Receiver<bool>) -> Self {
        Self {
            health: HealthStore::new(),
            notifications: NotificationStore::new(),
            session: SessionStore::new(auth),
            trading: TradingStore::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let (_tx, rx) = watch::channel(false);
        let stores = AppStores::new(rx);
        let view = stores.clone();

        stores
            .notifications
            .push(NotificationKind::Info, "hello", None);
        assert_eq!(view.notifications.len(), 1);
    }
}
