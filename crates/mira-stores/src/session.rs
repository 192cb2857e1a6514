//! Authenticated-session store.
//!
//! Holds the known user profile. The `is_authenticated` flag is NOT
//! stored here: it is derived from the token manager's presence
//! channel, so profile state and credential state cannot diverge.

use mira_core::User;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::watch;

/// Shared session state.
#[derive(Clone)]
pub struct SessionStore {
    user: Arc<RwLock<Option<User>>>,
    /// Token-presence channel from the token manager.
    auth: watch::Receiver<bool>,
}

impl SessionStore {
    /// Build over the token manager's presence subscription
    /// (`TokenManager::subscribe`).
    pub fn new(auth: watch::Receiver<bool>) -> Self {
        Self {
            user: Arc::new(RwLock::new(None)),
            auth,
        }
    }

    /// Derived strictly from token presence, never set directly.
    pub fn is_authenticated(&self) -> bool {
        *self.auth.borrow()
    }

    /// A receiver for reacting to login/logout transitions.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.auth.clone()
    }

    pub fn set_user(&self, user: User) {
        *self.user.write() = Some(user);
    }

    pub fn clear_user(&self) {
        *self.user.write() = None;
    }

    pub fn user(&self) -> Option<User> {
        self.user.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mira_core::UserStatus;
    use uuid::Uuid;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            first_name: "Ada".to_string(),
            last_name: "Obi".to_string(),
            email: "ada@example.com".to_string(),
            status: UserStatus::Verified,
            country: Some("NG".to_string()),
            is_active: true,
            is_2fa_enabled: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_authentication_follows_token_presence() {
        let (tx, rx) = watch::channel(false);
        let store = SessionStore::new(rx);
        assert!(!store.is_authenticated());

        // Profile data alone does not authenticate the session.
        store.set_user(test_user());
        assert!(!store.is_authenticated());

        tx.send_replace(true);
        assert!(store.is_authenticated());

        tx.send_replace(false);
        assert!(!store.is_authenticated());
        // The stale profile is still readable; callers clear it on logout.
        assert!(store.user().is_some());
    }
}
