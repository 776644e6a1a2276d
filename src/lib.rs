//! # failsafe-kv
//!
//! A failsafe facade over a persistent key-value store.
//!
//! Values are wrapped in timestamped entries so reads can ask for a
//! maximum age, structured values are serialized transparently, and when
//! no persistent store is available the facade keeps working against an
//! in-process map instead of failing.
//!
//! ## Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use failsafe_kv::prelude::*;
//!
//! let storage = Storage::with_store(Arc::new(MemoryStore::new()));
//!
//! storage.set("greeting", "hello")?;
//! assert_eq!(storage.get("greeting", None)?, Some(Value::from("hello")));
//!
//! // Entries older than 10 minutes read as absent
//! let fresh = storage.get("greeting", 10.0)?;
//! assert!(fresh.is_some());
//! # Ok::<(), failsafe_kv::Error>(())
//! ```
//!
//! ## Two Failure Channels
//!
//! | Condition | Result |
//! |-----------|--------|
//! | key absent or expired | `Ok(None)` |
//! | structured value, persistent backend, no codec (on `set`) | `Ok(None)` |
//! | bad key, callable value | `Err` |
//! | stored text unparseable or without timestamp | `Err` |
//!
//! ## Shared Namespace
//!
//! No key prefixing is applied. Facades sharing a store see and
//! overwrite each other's keys, and `clear` empties the whole store.

#![warn(missing_docs)]

mod capabilities;
mod environment;
mod error;
mod storage;

pub mod prelude;

pub use capabilities::{BackendKind, Capabilities};
pub use environment::{DiagnosticSink, Environment, TracingSink};
pub use error::{Error, Result};
pub use storage::Storage;

// Re-export member crates' public types
pub use failsafe_core::{
    validate_key, Clock, KeyError, ManualClock, SystemClock, Value, ValueKind, MIN_KEY_LEN,
};
pub use failsafe_storage::{FileStore, MemoryStore, PersistentStore, StoreError, StoreResult};
pub use failsafe_wire::{CodecError, JsonCodec, StoredEntry, StructuredCodec};
