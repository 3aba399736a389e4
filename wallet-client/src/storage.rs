//! # Durable Local Storage
//!
//! Key-value store for the small bits of client state that survive a cold
//! start, most importantly the cached transaction count displayed before the
//! first network round-trip completes.
//!
//! Access is mutex-guarded and last-writer-wins; there is no cross-process
//! locking.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing::debug;

/// Fixed storage key for the cached transaction count.
pub const TRANSACTION_COUNT_KEY: &str = "transactionCount";

/// Durable string key-value storage.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

/// In-memory store, used in tests and for hosts without a writable disk.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self.entries.lock().expect("storage mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store holding a flat JSON object of string entries.
///
/// The file is read once at open and rewritten on every `set`.
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read store at {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("store at {} is not valid JSON", path.display()))?
        } else {
            HashMap::new()
        };
        debug!(path = %path.display(), entries = entries.len(), "storage opened");
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let entries = self.entries.lock().expect("storage mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut entries = self.entries.lock().expect("storage mutex poisoned");
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
        }
        let raw = serde_json::to_string_pretty(&*entries)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write store at {}", self.path.display()))
    }
}

/// Read the cached transaction count, tolerating a missing or garbled entry.
pub fn load_cached_count(store: &dyn KeyValueStore) -> Option<u64> {
    store
        .get(TRANSACTION_COUNT_KEY)
        .ok()
        .flatten()
        .and_then(|raw| raw.parse().ok())
}
