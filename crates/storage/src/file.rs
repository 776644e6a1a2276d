//! File-backed store
//!
//! The whole namespace is one JSON object (`{"key": "value", ...}`) in a
//! single file. It is loaded once at open; every mutation rewrites the
//! file through a temporary sibling that is renamed into place, so a
//! crash leaves either the old or the new namespace on disk.
//!
//! Open one `FileStore` per path and share it behind an `Arc`; two
//! independent handles on the same file do not see each other's writes.

use crate::{PersistentStore, StoreError, StoreResult};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Durable string store persisted as a JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    data: RwLock<FxHashMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`, creating an empty namespace if the file
    /// does not exist yet
    ///
    /// The file is not written until the first mutation.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        let data = match fs::read_to_string(&path) {
            Ok(text) if text.trim().is_empty() => FxHashMap::default(),
            Ok(text) => serde_json::from_str(&text).map_err(|e| StoreError::Serialization {
                path: path.clone(),
                message: e.to_string(),
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => FxHashMap::default(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        debug!("Opened file store {} with {} keys", path.display(), data.len());
        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Apply `change` to a copy of the namespace and install the copy
    /// only once it is on disk. `change` returns `false` for a no-op.
    fn update(
        &self,
        change: impl FnOnce(&mut FxHashMap<String, String>) -> bool,
    ) -> StoreResult<()> {
        let mut data = self.data.write();
        let mut next = data.clone();
        if !change(&mut next) {
            return Ok(());
        }
        self.persist(&next)?;
        *data = next;
        Ok(())
    }

    /// Write the namespace to disk. Caller holds the write lock.
    fn persist(&self, data: &FxHashMap<String, String>) -> StoreResult<()> {
        // Sorted so the file is stable between writes
        let sorted: BTreeMap<&String, &String> = data.iter().collect();
        let text = serde_json::to_string(&sorted).map_err(|e| StoreError::Serialization {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        let temp = self.temp_path();
        fs::write(&temp, text).map_err(|source| StoreError::Io {
            path: temp.clone(),
            source,
        })?;
        fs::rename(&temp, &self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!("Persisted {} keys to {}", data.len(), self.path.display());
        Ok(())
    }
}

impl PersistentStore for FileStore {
    /// Writable iff a scratch file can be created in the store's directory
    fn probe(&self) -> bool {
        let temp = self.temp_path();
        match fs::write(&temp, b"") {
            Ok(()) => {
                let _ = fs::remove_file(&temp);
                true
            }
            Err(e) => {
                debug!("File store {} not writable: {}", self.path.display(), e);
                false
            }
        }
    }

    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.update(|next| {
            next.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.update(|next| next.remove(key).is_some())
    }

    fn clear(&self) -> StoreResult<()> {
        self.update(|next| {
            next.clear();
            true
        })
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.data.read().len())
    }
}
