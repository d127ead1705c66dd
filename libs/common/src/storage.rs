//! Durable client storage for the job-portal client
//!
//! The browser build of the portal keeps its session in `localStorage`;
//! this module provides the same small key-value surface behind an
//! injectable trait, with an in-memory implementation for tests and a
//! JSON-file implementation for everything else.

use crate::error::{StorageError, StorageResult};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{info, warn};

/// Storage key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Storage key under which the resolved user record is persisted.
pub const USER_KEY: &str = "user";

/// Configuration for the file-backed storage
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path of the backing JSON file
    pub path: PathBuf,
}

impl StorageConfig {
    /// Create a new StorageConfig from environment variables
    ///
    /// # Environment Variables
    /// - `PORTAL_STORAGE_PATH`: backing file path (default: ".portal/storage.json")
    pub fn from_env() -> StorageResult<Self> {
        let path = std::env::var("PORTAL_STORAGE_PATH")
            .unwrap_or_else(|_| ".portal/storage.json".to_string());

        Ok(StorageConfig { path: path.into() })
    }
}

/// Key-value storage surface shared by all storage backends
///
/// Object-safe so consumers can take `Arc<dyn Storage>` and tests can swap
/// in [`MemoryStorage`].
pub trait Storage: Send + Sync {
    /// Get a value by key
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Set a key-value pair
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Remove every key
    fn clear(&self) -> StorageResult<()>;
}

/// Purely in-memory storage, used by unit and integration tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create a new empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries().remove(key);
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.entries().clear();
        Ok(())
    }
}

/// File-backed storage holding one flat JSON object
///
/// Writes go through a temp file followed by a rename so a crash never
/// leaves a half-written session file behind.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or create) the storage at the configured path
    pub fn open(config: &StorageConfig) -> StorageResult<Self> {
        let entries = match fs::read_to_string(&config.path) {
            Ok(body) => match serde_json::from_str(&body) {
                Ok(entries) => entries,
                Err(e) => {
                    // A corrupt session file is discarded, not fatal.
                    warn!("Discarding unreadable storage file {}: {}", config.path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(StorageError::Io(e)),
        };

        info!("Client storage opened at {}", config.path.display());

        Ok(FileStorage {
            path: config.path.clone(),
            entries: Mutex::new(entries),
        })
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn persist(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StorageError::Io)?;
            }
        }

        let body = serde_json::to_string_pretty(entries).map_err(StorageError::Decode)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(StorageError::Io)?;
        fs::rename(&tmp, &self.path).map_err(StorageError::Io)?;

        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries();
        entries.remove(key);
        self.persist(&entries)
    }

    fn clear(&self) -> StorageResult<()> {
        let mut entries = self.entries();
        entries.clear();
        self.persist(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_storage_round_trip() {
        let storage = MemoryStorage::new();

        storage.set(TOKEN_KEY, "abc123").unwrap();
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), Some("abc123".to_string()));

        storage.remove(TOKEN_KEY).unwrap();
        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
    }

    #[test]
    fn memory_storage_clear_removes_all_keys() {
        let storage = MemoryStorage::new();

        storage.set(TOKEN_KEY, "abc123").unwrap();
        storage.set(USER_KEY, "{}").unwrap();
        storage.clear().unwrap();

        assert_eq!(storage.get(TOKEN_KEY).unwrap(), None);
        assert_eq!(storage.get(USER_KEY).unwrap(), None);
    }
}
