//! Key-value persistence for widget preferences.
//!
//! Widgets that remember a user choice across reloads (the theme switch)
//! talk to a [`KeyValueStore`]. The contract mirrors browser local storage:
//! string keys, string values, absent keys read as `None`.
//!
//! # Backends
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      KeyValueStore                            │
//! │   - MemoryStore: in-memory (tests, ephemeral sessions)        │
//! │   - FileStore: JSON file (requires state-persistence)         │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Invariants
//!
//! 1. **Graceful degradation**: failures surface as [`StorageError`]; callers
//!    decide whether to fall back, nothing panics.
//! 2. **Atomic writes**: the file backend writes a temp file and renames it.
//! 3. **Corruption tolerance**: an unreadable or mismatched file reads as
//!    empty rather than failing the caller's initialization.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | `StorageError::Io` | File I/O failure | Returned to caller |
//! | `StorageError::Serialization` | JSON encode failure | Returned to caller |
//! | `StorageError::Corruption` | Poisoned lock | Returned to caller |
//! | Corrupt file on read | Hand edits, partial writes | Treated as empty, logged |

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

// ─────────────────────────────────────────────────────────────────────────────
// Error Types
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error during file operations.
    Io(std::io::Error),
    /// Serialization or deserialization error.
    #[cfg(feature = "state-persistence")]
    Serialization(String),
    /// Store internals are in an inconsistent state.
    Corruption(String),
    /// Backend cannot be used in this environment.
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "state-persistence")]
            StorageError::Serialization(msg) => write!(f, "serialization error: {msg}"),
            StorageError::Corruption(msg) => write!(f, "storage corruption: {msg}"),
            StorageError::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

// ─────────────────────────────────────────────────────────────────────────────
// Store Trait
// ─────────────────────────────────────────────────────────────────────────────

/// String key-value storage.
///
/// Methods take `&self`; implementations use interior mutability so a store
/// can be shared (`Arc<S>`, `&S`) between a widget and the code that later
/// reloads it.
pub trait KeyValueStore: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Read `key`. Missing keys are `Ok(None)`.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete `key`. Deleting a missing key succeeds.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Check if the backend is available and functional.
    fn is_available(&self) -> bool {
        true
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn name(&self) -> &str {
        (**self).name()
    }
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }
    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }
    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory Store (always available)
// ─────────────────────────────────────────────────────────────────────────────

/// In-memory store. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let data = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            data: RwLock::new(data),
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.read().map(|g| g.len()).unwrap_or(0)
    }

    /// Whether the store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn name(&self) -> &str {
        "MemoryStore"
    }

    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let guard = self
            .data
            .read()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        Ok(guard.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        guard.remove(key);
        Ok(())
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("entries", &self.len())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Store (requires state-persistence feature)
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "state-persistence")]
mod file_store {
    use super::*;
    use serde::{Deserialize, Serialize};
    use std::fs::{self, File};
    use std::io::{BufReader, BufWriter, Write};
    use std::path::{Path, PathBuf};

    /// On-disk layout.
    #[derive(Serialize, Deserialize)]
    struct StoreFile {
        format_version: u32,
        entries: HashMap<String, String>,
    }

    impl StoreFile {
        const FORMAT_VERSION: u32 = 1;

        fn empty() -> Self {
            Self {
                format_version: Self::FORMAT_VERSION,
                entries: HashMap::new(),
            }
        }
    }

    /// JSON-file store.
    ///
    /// ```json
    /// {
    ///   "format_version": 1,
    ///   "entries": { "theme": "dark" }
    /// }
    /// ```
    ///
    /// Every `set`/`remove` rewrites the whole file through `{path}.tmp` and a
    /// rename. Reads re-open the file so external edits are picked up.
    pub struct FileStore {
        path: PathBuf,
        write_lock: RwLock<()>,
    }

    impl FileStore {
        /// Store at `path`. The file is created on first write.
        #[must_use]
        pub fn new(path: impl AsRef<Path>) -> Self {
            Self {
                path: path.as_ref().to_path_buf(),
                write_lock: RwLock::new(()),
            }
        }

        /// Store at `$XDG_STATE_HOME/revolve/{app_name}/prefs.json`, falling
        /// back to `~/.local/state` and then the current directory.
        #[must_use]
        pub fn default_for_app(app_name: &str) -> Self {
            let base = state_dir();
            Self::new(base.join("revolve").join(app_name).join("prefs.json"))
        }

        /// Backing file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }

        fn temp_path(&self) -> PathBuf {
            let mut tmp = self.path.clone();
            tmp.set_extension("json.tmp");
            tmp
        }

        fn read_file(&self) -> StorageResult<StoreFile> {
            if !self.path.exists() {
                return Ok(StoreFile::empty());
            }
            let reader = BufReader::new(File::open(&self.path)?);
            match serde_json::from_reader::<_, StoreFile>(reader) {
                Ok(file) if file.format_version == StoreFile::FORMAT_VERSION => Ok(file),
                Ok(file) => {
                    tracing::warn!(
                        stored = file.format_version,
                        expected = StoreFile::FORMAT_VERSION,
                        "preference file format version mismatch, ignoring stored values"
                    );
                    Ok(StoreFile::empty())
                }
                Err(e) => {
                    tracing::warn!(path = %self.path.display(), error = %e, "unreadable preference file, ignoring");
                    Ok(StoreFile::empty())
                }
            }
        }

        fn write_file(&self, file: &StoreFile) -> StorageResult<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let tmp_path = self.temp_path();
            {
                let mut writer = BufWriter::new(File::create(&tmp_path)?);
                serde_json::to_writer_pretty(&mut writer, file).map_err(|e| {
                    StorageError::Serialization(format!("failed to serialize preferences: {e}"))
                })?;
                writer.flush()?;
                writer.get_ref().sync_all()?;
            }
            fs::rename(&tmp_path, &self.path)?;
            tracing::debug!(
                path = %self.path.display(),
                entries = file.entries.len(),
                "saved preferences"
            );
            Ok(())
        }

        fn modify(&self, f: impl FnOnce(&mut HashMap<String, String>)) -> StorageResult<()> {
            let _guard = self
                .write_lock
                .write()
                .map_err(|_| StorageError::Corruption("write lock poisoned".into()))?;
            let mut file = self.read_file()?;
            f(&mut file.entries);
            self.write_file(&file)
        }
    }

    fn state_dir() -> PathBuf {
        if let Ok(state_home) = std::env::var("XDG_STATE_HOME") {
            return PathBuf::from(state_home);
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".local").join("state");
        }
        PathBuf::from(".")
    }

    impl KeyValueStore for FileStore {
        fn name(&self) -> &str {
            "FileStore"
        }

        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Ok(self.read_file()?.entries.remove(key))
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            self.modify(|entries| {
                entries.insert(key.to_owned(), value.to_owned());
            })
        }

        fn remove(&self, key: &str) -> StorageResult<()> {
            self.modify(|entries| {
                entries.remove(key);
            })
        }

        fn is_available(&self) -> bool {
            match self.path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => {
                    fs::create_dir_all(parent).is_ok()
                        && !fs::metadata(parent)
                            .map(|m| m.permissions().readonly())
                            .unwrap_or(true)
                }
                _ => true,
            }
        }
    }

    impl fmt::Debug for FileStore {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("FileStore")
                .field("path", &self.path)
                .finish()
        }
    }
}

#[cfg(feature = "state-persistence")]
pub use file_store::FileStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_missing_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").unwrap(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn memory_set_then_get() {
        let store = MemoryStore::new();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
        store.set("theme", "light").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn memory_remove() {
        let store = MemoryStore::with_entries([("theme", "system")]);
        store.remove("theme").unwrap();
        store.remove("theme").unwrap();
        assert_eq!(store.get("theme").unwrap(), None);
    }

    #[test]
    fn shared_through_arc() {
        let store = Arc::new(MemoryStore::new());
        let writer = Arc::clone(&store);
        writer.set("k", "v").unwrap();
        assert_eq!(KeyValueStore::get(&store, "k").unwrap().as_deref(), Some("v"));
        assert_eq!(KeyValueStore::name(&store), "MemoryStore");
    }

    #[test]
    fn debug_shows_count() {
        let store = MemoryStore::with_entries([("a", "1"), ("b", "2")]);
        assert_eq!(format!("{store:?}"), "MemoryStore { entries: 2 }");
    }

    #[test]
    fn error_display() {
        let err = StorageError::Unavailable("no local storage".into());
        assert_eq!(err.to_string(), "storage unavailable: no local storage");
        let io: StorageError = std::io::Error::other("disk gone").into();
        assert!(io.to_string().starts_with("I/O error"));
        assert!(std::error::Error::source(&io).is_some());
    }
}
