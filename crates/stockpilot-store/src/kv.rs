//! Durable string key-value storage.
//!
//! The browser client kept its state in `localStorage`: synchronous,
//! string-keyed, per-profile. [`KvStore`] is that contract; the file
//! implementation keeps the whole map in one JSON document and rewrites it
//! on every mutation, which is plenty for a handful of small keys.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Synchronous, durable, string-keyed storage.
///
/// Failures are absorbed by implementations (logged, not returned): losing
/// a write to this locally-replicated cache of externally-sourced data is
/// never fatal.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-process store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().expect("kv lock poisoned").get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        self.map
            .lock()
            .expect("kv lock poisoned")
            .insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.map.lock().expect("kv lock poisoned").remove(key);
    }
}

/// File-backed store: one JSON object holding all keys.
#[derive(Debug)]
pub struct FileKvStore {
    path: PathBuf,
    map: Mutex<HashMap<String, String>>,
}

impl FileKvStore {
    /// Open the store at `path`, loading any existing content.
    ///
    /// A missing file starts empty; an unreadable or malformed file is
    /// logged and also starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let map = Self::load(&path);
        Self {
            path,
            map: Mutex::new(map),
        }
    }

    fn load(path: &Path) -> HashMap<String, String> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return HashMap::new();
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read store file, starting empty");
                return HashMap::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "malformed store file, starting empty");
                HashMap::new()
            }
        }
    }

    fn flush(&self, map: &HashMap<String, String>) {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                if let Err(error) = fs::create_dir_all(parent) {
                    tracing::warn!(path = %parent.display(), %error, "failed to create store directory");
                    return;
                }
            }
        }

        let raw = match serde_json::to_string(map) {
            Ok(raw) => raw,
            Err(error) => {
                tracing::warn!(%error, "failed to serialize store contents");
                return;
            }
        };

        if let Err(error) = fs::write(&self.path, raw) {
            tracing::warn!(path = %self.path.display(), %error, "failed to write store file");
        }
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.lock().expect("kv lock poisoned").get(key).cloned()
    }

    fn put(&self, key: &str, value: &str) {
        let mut map = self.map.lock().expect("kv lock poisoned");
        map.insert(key.to_owned(), value.to_owned());
        self.flush(&map);
    }

    fn remove(&self, key: &str) {
        let mut map = self.map.lock().expect("kv lock poisoned");
        map.remove(key);
        self.flush(&map);
    }
}
