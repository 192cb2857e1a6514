//! Bounded notification store.
//!
//! Newest-first ring capped at [`MAX_NOTIFICATIONS`]; the oldest entry
//! is evicted on overflow. The unread count is maintained incrementally
//! on every mutation rather than recomputed by scanning.

use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Arc;
use uuid::Uuid;

/// Retention cap; the oldest notification is dropped beyond this.
pub const MAX_NOTIFICATIONS: usize = 50;

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// A single notification entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

#[derive(Default)]
struct Inner {
    /// Newest first.
    items: VecDeque<Notification>,
    unread: usize,
}

/// Shared notification state.
#[derive(Clone, Default)]
pub struct NotificationStore {
    inner: Arc<RwLock<Inner>>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new unread notification, evicting the oldest entry
    /// when over capacity. Returns the generated id.
    pub fn push(
        &self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: Option<String>,
    ) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            message,
            timestamp: Utc::now(),
            read: false,
        };
        let id = notification.id;

        let mut state = self.inner.write();
        state.items.push_front(notification);
        state.unread += 1;
        if state.items.len() > MAX_NOTIFICATIONS {
            if let Some(evicted) = state.items.pop_back() {
                if !evicted.read {
                    state.unread -= 1;
                }
            }
        }
        id
    }

    /// Mark one notification read. Returns false for unknown ids.
    pub fn mark_read(&self, id: Uuid) -> bool {
        let mut state = self.inner.write();
        let Some(item) = state.items.iter_mut().find(|n| n.id == id) else {
            return false;
        };
        if !item.read {
            item.read = true;
            state.unread -= 1;
        }
        true
    }

    pub fn mark_all_read(&self) {
        let mut state = self.inner.write();
        for item in state.items.iter_mut() {
            item.read = true;
        }
        state.unread = 0;
    }

    /// Remove one notification. Returns false for unknown ids.
    pub fn remove(&self, id: Uuid) -> bool {
        let mut state = self.inner.write();
        let Some(pos) = state.items.iter().position(|n| n.id == id) else {
            return false;
        };
        let removed = state.items.remove(pos);
        if let Some(removed) = removed {
            if !removed.read {
                state.unread -= 1;
            }
        }
        true
    }

    pub fn clear(&self) {
        let mut state = self.inner.write();
        state.items.clear();
        state.unread = 0;
    }

    pub fn unread_count(&self) -> usize {
        self.inner.read().unread
    }

    pub fn len(&self) -> usize {
        self.inner.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().items.is_empty()
    }

    /// Snapshot of all notifications, newest first.
    pub fn items(&self) -> Vec<Notification> {
        self.inner.read().items.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cap_evicts_oldest_first() {
        let store = NotificationStore::new();
        let first = store.push(NotificationKind::Info, "n0", None);
        for i in 1..=MAX_NOTIFICATIONS {
            store.push(NotificationKind::Info, format!("n{i}"), None);
        }

        assert_eq!(store.len(), MAX_NOTIFICATIONS);
        let items = store.items();
        // The very first insert is gone; the newest is at the front.
        assert!(items.iter().all(|n| n.id != first));
        assert_eq!(items[0].title, format!("n{MAX_NOTIFICATIONS}"));
    }

    #[test]
    fn test_unread_count_incremental() {
        let store = NotificationStore::new();
        let ids: Vec<_> = (0..5)
            .map(|i| store.push(NotificationKind::Info, format!("n{i}"), None))
            .collect();
        assert_eq!(store.unread_count(), 5);

        assert!(store.mark_read(ids[0]));
        assert!(store.mark_read(ids[1]));
        assert_eq!(store.unread_count(), 3);

        // Re-reading the same entry does not double-decrement.
        assert!(store.mark_read(ids[0]));
        assert_eq!(store.unread_count(), 3);

        assert!(!store.mark_read(Uuid::new_v4()));
        assert_eq!(store.unread_count(), 3);
    }

    #[test]
    fn test_eviction_of_unread_decrements() {
        let store = NotificationStore::new();
        for i in 0..=MAX_NOTIFICATIONS {
            store.push(NotificationKind::Info, format!("n{i}"), None);
        }
        // 51 unread inserted, one evicted unread.
        assert_eq!(store.unread_count(), MAX_NOTIFICATIONS);
    }

    #[test]
    fn test_remove_adjusts_unread() {
        let store = NotificationStore::new();
        let a = store.push(NotificationKind::Warning, "a", None);
        let b = store.push(NotificationKind::Error, "b", Some("details".to_string()));

        store.mark_read(a);
        assert!(store.remove(a));
        assert_eq!(store.unread_count(), 1);

        assert!(store.remove(b));
        assert_eq!(store.unread_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn test_mark_all_and_clear() {
        let store = NotificationStore::new();
        for i in 0..3 {
            store.push(NotificationKind::Success, format!("n{i}"), None);
        }
        store.mark_all_read();
        assert_eq!(store.unread_count(), 0);

        store.clear();
        assert!(store.is_empty());
    }
}
