//! The storage facade.
//!
//! [`Storage`] is the entry point for all operations. It validates the
//! key, then routes to the backend picked once at construction:
//!
//! - **Persistent**: entries are encoded to wire strings and written to
//!   the environment's store. Structured values are serialized through
//!   the codec first.
//! - **Fallback**: entries live in an in-process map. Structured values
//!   are kept as values, never serialized.
//!
//! Misses are `Ok(None)`. Errors are reserved for misuse (bad key,
//! executable value) and for stored data this component cannot read.
//!
//! Keys are not prefixed. Facades sharing a store share its namespace,
//! and [`Storage::clear`] empties all of it.

use crate::capabilities::{BackendKind, Capabilities};
use crate::environment::Environment;
use crate::error::{Error, Result};
use failsafe_core::{validate_key, Value, ValueKind};
use failsafe_storage::{FileStore, PersistentStore};
use failsafe_wire::{decode_entry, encode_entry, EntryError, StoredEntry};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

enum Backend {
    Persistent(Arc<dyn PersistentStore>),
    Fallback(Mutex<FxHashMap<String, StoredEntry>>),
}

/// Failsafe key-value storage.
///
/// # Example
///
/// ```
/// use failsafe_kv::prelude::*;
///
/// let storage = Storage::ephemeral();
///
/// let profile: Value = [("name", "Alice")].into_iter().collect();
/// storage
///     .set("profile", profile.clone())?
///     .expect("stored");
///
/// assert_eq!(storage.get("profile", None)?, Some(profile));
/// assert_eq!(storage.get("missing", None)?, None);
///
/// storage.remove("profile")?.clear()?;
/// # Ok::<(), failsafe_kv::Error>(())
/// ```
pub struct Storage {
    env: Environment,
    capabilities: Capabilities,
    backend: Backend,
}

impl Storage {
    /// Build a facade over an environment.
    ///
    /// Capabilities are detected here and the backend is fixed for the
    /// facade's lifetime.
    pub fn new(env: Environment) -> Self {
        let capabilities = Capabilities::detect(&env);

        let backend = match (capabilities.has_persistent_store, env.store()) {
            (true, Some(store)) => Backend::Persistent(Arc::clone(store)),
            _ => Backend::Fallback(Mutex::new(FxHashMap::default())),
        };

        info!(
            backend = ?capabilities.backend(),
            codec = capabilities.has_structured_codec,
            "Storage facade ready"
        );

        Self {
            env,
            capabilities,
            backend,
        }
    }

    /// Facade with only the in-process fallback backend.
    ///
    /// Nothing outlives the facade.
    pub fn ephemeral() -> Self {
        Self::new(Environment::new())
    }

    /// Facade over a persistent store with default codec, clock and sink.
    pub fn with_store(store: Arc<dyn PersistentStore>) -> Self {
        Self::new(Environment::new().with_store(store))
    }

    /// Facade over a [`FileStore`] at `path`.
    ///
    /// Falls back to the in-process backend if the file's directory is
    /// not writable.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = FileStore::open(path)?;
        Ok(Self::with_store(Arc::new(store)))
    }

    /// Capabilities detected at construction.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// The active backend.
    pub fn backend(&self) -> BackendKind {
        match self.backend {
            Backend::Persistent(_) => BackendKind::Persistent,
            Backend::Fallback(_) => BackendKind::Fallback,
        }
    }

    /// The environment this facade was built over.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Store a value under a key, replacing any previous entry.
    ///
    /// Returns `Ok(Some(self))` for chaining. Returns `Ok(None)` when a
    /// structured value would have to be serialized for the persistent
    /// store but no codec is configured; nothing is written then.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidKeyType`] / [`Error::KeyTooShort`] for a bad key
    /// - [`Error::UnsupportedValueType`] if the value is or contains a callable
    /// - [`Error::Store`] if the persistent store fails
    pub fn set(&self, key: impl Into<Value>, value: impl Into<Value>) -> Result<Option<&Self>> {
        let key: Value = key.into();
        let key = validate_key(&key)?;

        let Some(entry) = self.build_entry(value.into())? else {
            debug!(key, "Structured value not stored: no codec available");
            return Ok(None);
        };

        match &self.backend {
            Backend::Persistent(store) => {
                let raw = encode_entry(&entry)?;
                store.set_item(key, &raw)?;
            }
            Backend::Fallback(entries) => {
                entries.lock().insert(key.to_string(), entry);
            }
        }

        Ok(Some(self))
    }

    /// Read the value under a key.
    ///
    /// With `max_age_minutes`, an entry written longer ago than that is
    /// treated as absent. Returns `Ok(None)` for absent and expired keys
    /// alike.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidKeyType`] / [`Error::KeyTooShort`] for a bad key
    /// - [`Error::CorruptEntry`] if the stored text cannot be parsed
    /// - [`Error::MissingTimestamp`] if the stored entry has no timestamp
    /// - [`Error::Store`] if the persistent store fails
    pub fn get(
        &self,
        key: impl Into<Value>,
        max_age_minutes: impl Into<Option<f64>>,
    ) -> Result<Option<Value>> {
        let key: Value = key.into();
        let key = validate_key(&key)?;

        let Some(entry) = self.read_entry(key)? else {
            return Ok(None);
        };

        if let Some(minutes) = max_age_minutes.into() {
            if entry.is_expired(self.env.clock().now_secs(), minutes) {
                debug!(key, age_limit_minutes = minutes, "Entry expired");
                return Ok(None);
            }
        }

        self.unwrap_payload(key, entry).map(Some)
    }

    /// Delete the entry under a key. A missing key is a no-op.
    pub fn remove(&self, key: impl Into<Value>) -> Result<&Self> {
        let key: Value = key.into();
        let key = validate_key(&key)?;

        match &self.backend {
            Backend::Persistent(store) => store.remove_item(key)?,
            Backend::Fallback(entries) => {
                entries.lock().remove(key);
            }
        }

        Ok(self)
    }

    /// Delete every entry in the active backend.
    ///
    /// For the persistent backend this empties the whole shared store,
    /// including keys this facade never wrote.
    pub fn clear(&self) -> Result<&Self> {
        match &self.backend {
            Backend::Persistent(store) => store.clear()?,
            Backend::Fallback(entries) => entries.lock().clear(),
        }

        Ok(self)
    }

    // =========================================================================
    // Entry codec
    // =========================================================================

    /// Wrap a value in a timestamped entry for the active backend.
    ///
    /// `None` means the value needs a codec that is not available.
    fn build_entry(&self, value: Value) -> Result<Option<StoredEntry>> {
        let timestamp = self.env.clock().now_secs();

        match value.kind() {
            ValueKind::Unsupported => Err(Error::UnsupportedValueType {
                type_name: value.type_name(),
            }),
            ValueKind::Structured if value.contains_callable() => {
                Err(Error::UnsupportedValueType {
                    type_name: "Callable",
                })
            }
            ValueKind::Structured if matches!(self.backend, Backend::Persistent(_)) => {
                match self.env.codec() {
                    Some(codec) if self.capabilities.has_structured_codec => {
                        let serialized = codec.serialize(&value)?;
                        Ok(Some(StoredEntry::encoded(timestamp, serialized)))
                    }
                    _ => Ok(None),
                }
            }
            ValueKind::Structured | ValueKind::Primitive => {
                Ok(Some(StoredEntry::primitive(timestamp, value)))
            }
        }
    }

    /// Fetch the entry under a key from the active backend.
    fn read_entry(&self, key: &str) -> Result<Option<StoredEntry>> {
        match &self.backend {
            Backend::Persistent(store) => {
                let Some(raw) = store.get_item(key)? else {
                    return Ok(None);
                };
                decode_entry(&raw).map(Some).map_err(|e| {
                    self.env.notice(key, &raw);
                    match e {
                        EntryError::Corrupt(reason) => Error::CorruptEntry {
                            key: key.to_string(),
                            reason,
                        },
                        EntryError::MissingTimestamp => Error::MissingTimestamp {
                            key: key.to_string(),
                        },
                    }
                })
            }
            Backend::Fallback(entries) => Ok(entries.lock().get(key).cloned()),
        }
    }

    /// Return the caller's value from an entry, deserializing if needed.
    fn unwrap_payload(&self, key: &str, entry: StoredEntry) -> Result<Value> {
        let codec = match self.env.codec() {
            Some(codec) if entry.is_encoded => codec,
            _ => return Ok(entry.payload),
        };

        match entry.payload {
            Value::String(text) => codec.deserialize(&text).map_err(|e| {
                self.env.notice(key, &text);
                Error::CorruptEntry {
                    key: key.to_string(),
                    reason: e.to_string(),
                }
            }),
            other => Ok(other),
        }
    }
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("backend", &self.backend())
            .field("capabilities", &self.capabilities)
            .finish_non_exhaustive()
    }
}
