use std::{
    collections::HashMap,
    future::Future,
    io::ErrorKind,
    path::PathBuf,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

/// Key under which the bearer token is stored.
pub const KEY_ACCESS_TOKEN: &str = "token";
/// Key under which the absolute token expiry (epoch milliseconds) is stored.
pub const KEY_TOKEN_EXPIRY: &str = "expiration_date";
/// Session-scoped flag: the one-time swipe onboarding hint was shown.
pub const KEY_SWIPE_HINT_SEEN: &str = "has_seen_swipe_hint";
/// Locally accumulated list of liked (right-swiped) tracks, JSON-encoded.
pub const KEY_RIGHT_SWIPES: &str = "right_swipes";
/// Locally accumulated list of skipped (left-swiped) tracks, JSON-encoded.
pub const KEY_LEFT_SWIPES: &str = "left_swipes";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("store serialization failure: {0}")]
    Serde(#[from] serde_json::Error),
}

/// String key-value storage, the boundary the session layer shares with the
/// presentation layer. Reads cannot fail beyond "absent"; removing an absent
/// key is a no-op.
pub trait KvStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> impl Future<Output = Option<String>> + Send;
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
    fn remove(&self, key: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// On-disk store keeping one file per key under a caller-supplied root
/// directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KvStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        async_fs::read_to_string(self.key_path(key)).await.ok()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        async_fs::create_dir_all(&self.root).await?;
        async_fs::write(self.key_path(key), value).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        match async_fs::remove_file(self.key_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store for tests and embedding. Counts `remove` calls so the
/// single-fire guarantee of the session guard is observable from outside.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    remove_calls: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `remove` invocations so far, absent keys included.
    pub fn remove_calls(&self) -> usize {
        self.remove_calls.load(Ordering::SeqCst)
    }
}

impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        self.values.lock().unwrap().remove(key);
        Ok(())
    }
}
