//! Credential storage.
//!
//! `TokenStore` is the persistence seam: an in-memory store for tests
//! and short-lived sessions, a file-backed store for the CLI. The
//! `TokenManager` on top caches the current pair and broadcasts
//! presence transitions, making it the single source of truth for
//! "is this session authenticated".

use mira_core::TokenPair;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;

/// Directory under the user's home holding client state.
const STATE_DIR: &str = ".mira";
/// Token file name within the state directory.
const TOKEN_FILE: &str = "tokens.json";

/// Token storage failures. Surfaced, never silently swallowed:
/// an unavailable store would otherwise masquerade as a logged-out
/// session.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    #[error("Token storage unavailable: {0}")]
    Unavailable(String),

    #[error("Token storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Token serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Durable storage for the credential pair.
///
/// `store` must be atomic from the caller's perspective: a failed
/// write leaves the previously stored pair readable.
pub trait TokenStore: Send + Sync {
    fn load(&self) -> Result<Option<TokenPair>, TokenStoreError>;
    fn store(&self, pair: &TokenPair) -> Result<(), TokenStoreError>;
    fn clear(&self) -> Result<(), TokenStoreError>;
}

/// Volatile in-process store. Default for tests and embedded use.
#[derive(Default)]
pub struct MemoryTokenStore {
    pair: RwLock<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<TokenPair>, TokenStoreError> {
        Ok(self.pair.read().clone())
    }

    fn store(&self, pair: &TokenPair) -> Result<(), TokenStoreError> {
        *self.pair.write() = Some(pair.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        *self.pair.write() = None;
        Ok(())
    }
}

/// File-backed store under `~/.mira/tokens.json`.
///
/// Writes go through a temp file + rename so a crash mid-write never
/// corrupts the stored pair.
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Store at the default location under the user's home directory.
    pub fn new() -> Result<Self, TokenStoreError> {
        let home = dirs::home_dir()
            .ok_or_else(|| TokenStoreError::Unavailable("no home directory".to_string()))?;
        Ok(Self {
            path: home.join(STATE_DIR).join(TOKEN_FILE),
        })
    }

    /// Store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<TokenPair>, TokenStoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn store(&self, pair: &TokenPair) -> Result<(), TokenStoreError> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| TokenStoreError::Unavailable("token path has no parent".to_string()))?;
        std::fs::create_dir_all(parent)?;

        let tmp = self.path.with_extension("json.tmp");
        let bytes = serde_json::to_vec(pair)?;
        std::fs::write(&tmp, &bytes)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp, std::fs::Permissions::from_mode(0o600))?;
        }
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

struct ManagerInner {
    store: Arc<dyn TokenStore>,
    current: RwLock<Option<TokenPair>>,
    presence_tx: watch::Sender<bool>,
}

/// Cached view over a `TokenStore` with presence broadcasting.
///
/// Cheap to clone; all clones share the same state.
#[derive(Clone)]
pub struct TokenManager {
    inner: Arc<ManagerInner>,
}

impl TokenManager {
    /// Create a manager over the given store, loading any persisted pair.
    pub fn new(store: Arc<dyn TokenStore>) -> Result<Self, TokenStoreError> {
        let initial = store.load()?;
        let (presence_tx, _) = watch::channel(initial.is_some());
        Ok(Self {
            inner: Arc::new(ManagerInner {
                store,
                current: RwLock::new(initial),
                presence_tx,
            }),
        })
    }

    /// In-memory manager with no persistence.
    pub fn in_memory() -> Self {
        // MemoryTokenStore::load is infallible.
        Self::new(Arc::new(MemoryTokenStore::new())).unwrap_or_else(|_| unreachable!())
    }

    /// Current access token, if any.
    pub fn access_token(&self) -> Option<String> {
        self.inner
            .current
            .read()
            .as_ref()
            .map(|p| p.access_token.clone())
    }

    /// Current refresh token, if any.
    pub fn refresh_token(&self) -> Option<String> {
        self.inner
            .current
            .read()
            .as_ref()
            .map(|p| p.refresh_token.clone())
    }

    /// True iff an access token is present.
    pub fn has_tokens(&self) -> bool {
        self.inner.current.read().is_some()
    }

    /// Replace both tokens. Persisted first; the cached pair only
    /// changes once the store accepted the write, so a storage failure
    /// leaves the previous pair intact.
    pub fn set_tokens(&self, pair: TokenPair) -> Result<(), TokenStoreError> {
        self.inner.store.store(&pair)?;
        *self.inner.current.write() = Some(pair);
        self.inner.presence_tx.send_replace(true);
        debug!("Token pair updated");
        Ok(())
    }

    /// Remove both tokens from cache and storage.
    pub fn clear(&self) -> Result<(), TokenStoreError> {
        self.inner.store.clear()?;
        *self.inner.current.write() = None;
        self.inner.presence_tx.send_replace(false);
        debug!("Token pair cleared");
        Ok(())
    }

    /// Subscribe to token-presence transitions. The receiver yields
    /// `true` while a pair is held, `false` after clearing. Session
    /// state (`is_authenticated`) is derived from this channel.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.inner.presence_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear_roundtrip() {
        let manager = TokenManager::in_memory();
        assert!(!manager.has_tokens());

        manager.set_tokens(TokenPair::new("a1", "r1")).unwrap();
        assert_eq!(manager.access_token().as_deref(), Some("a1"));
        assert_eq!(manager.refresh_token().as_deref(), Some("r1"));
        assert!(manager.has_tokens());

        manager.clear().unwrap();
        assert!(!manager.has_tokens());
        assert!(manager.access_token().is_none());
    }

    #[test]
    fn test_presence_channel_follows_transitions() {
        let manager = TokenManager::in_memory();
        let rx = manager.subscribe();
        assert!(!*rx.borrow());

        manager.set_tokens(TokenPair::new("a1", "r1")).unwrap();
        assert!(*rx.borrow());

        manager.clear().unwrap();
        assert!(!*rx.borrow());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::with_path(dir.path().join("tokens.json"));

        assert!(store.load().unwrap().is_none());
        store.store(&TokenPair::new("a1", "r1")).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.access_token, "a1");

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing an already-empty store is not an error.
        store.clear().unwrap();
    }

    #[test]
    fn test_manager_loads_persisted_pair() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokens.json");

        let store = FileTokenStore::with_path(&path);
        store.store(&TokenPair::new("a1", "r1")).unwrap();

        let manager = TokenManager::new(Arc::new(FileTokenStore::with_path(&path))).unwrap();
        assert_eq!(manager.access_token().as_deref(), Some("a1"));
    }
}
