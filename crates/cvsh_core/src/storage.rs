//! Persistence behind a narrow key-value interface.
//!
//! The original site kept two opaque JSON blobs in browser local
//! storage. Here the same two blobs live behind [`KvStore`], so the
//! command logic never touches the filesystem directly and tests can
//! run against [`MemoryStore`]. Corrupt or missing blobs fall back to
//! the built-in defaults; the visitor never sees that, the operator
//! gets a warn log.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::error::{CvshError, CvshResult, ErrorKind, StorageErrorKind};
use crate::palette::Palette;
use crate::profile::Profile;

/// Store key for the profile blob.
pub const PROFILE_KEY: &str = "profile";
/// Store key for the palette blob.
pub const PALETTE_KEY: &str = "palette";

/// Minimal key-value store interface.
pub trait KvStore {
    /// Fetch the stored text for a key, `None` when absent.
    fn get(&self, key: &str) -> CvshResult<Option<String>>;

    /// Store text under a key, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> CvshResult<()>;
}

/// On-disk store: one JSON file per key inside a directory.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open (and create if needed) a store rooted at `dir`.
    pub fn open(dir: PathBuf) -> CvshResult<Self> {
        fs::create_dir_all(&dir).map_err(|e| {
            CvshError::new(
                ErrorKind::Storage(StorageErrorKind::WriteFailed),
                format!("cannot create store directory: {e}"),
            )
            .with_context("dir", dir.display().to_string())
        })?;
        Ok(Self { dir })
    }

    /// Default store location under the platform data directory.
    pub fn default_dir() -> PathBuf {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("cvsh")
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> CvshResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CvshError::new(
                ErrorKind::Storage(StorageErrorKind::ReadFailed),
                e.to_string(),
            )
            .with_context("path", path.display().to_string())),
        }
    }

    fn put(&mut self, key: &str, value: &str) -> CvshResult<()> {
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| {
            CvshError::new(
                ErrorKind::Storage(StorageErrorKind::WriteFailed),
                e.to_string(),
            )
            .with_context("path", path.display().to_string())
        })
    }
}

/// In-memory store for tests and one-shot command mode.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> CvshResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &str) -> CvshResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load a JSON blob, falling back to `T::default()` when the key is
/// absent, unreadable or corrupt. Failures are logged, not surfaced.
pub fn load_or_default<T>(store: &dyn KvStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.get(key) {
        Ok(Some(text)) => match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "stored blob is corrupt, using defaults");
                T::default()
            }
        },
        Ok(None) => {
            debug!(key, "no stored blob, using defaults");
            T::default()
        }
        Err(e) => {
            warn!(key, error = %e, "store read failed, using defaults");
            T::default()
        }
    }
}

/// Serialize a value as pretty JSON under `key`.
pub fn save<T: Serialize>(store: &mut dyn KvStore, key: &str, value: &T) -> CvshResult<()> {
    let text = serde_json::to_string_pretty(value)?;
    store.put(key, &text)
}

/// Load the persisted profile, or the built-in default.
pub fn load_profile(store: &dyn KvStore) -> Profile {
    load_or_default(store, PROFILE_KEY)
}

/// Load the persisted palette, or the built-in default.
pub fn load_palette(store: &dyn KvStore) -> Palette {
    load_or_default(store, PALETTE_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path().to_path_buf()).unwrap();

        assert_eq!(store.get("profile").unwrap(), None);
        store.put("profile", "{\"a\":1}").unwrap();
        assert_eq!(store.get("profile").unwrap().as_deref(), Some("{\"a\":1}"));

        store.put("profile", "{}").unwrap();
        assert_eq!(store.get("profile").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn profile_survives_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::open(dir.path().to_path_buf()).unwrap();

        let mut profile = Profile::default();
        profile.personal.title = "Lead Engineer".into();
        save(&mut store, PROFILE_KEY, &profile).unwrap();

        let loaded = load_profile(&store);
        assert_eq!(loaded, profile);
    }

    #[test]
    fn corrupt_blob_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.put(PROFILE_KEY, "{not json").unwrap();

        let loaded = load_profile(&store);
        assert_eq!(loaded, Profile::default());
    }

    #[test]
    fn missing_blob_falls_back_to_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_palette(&store), Palette::default());
    }
}
