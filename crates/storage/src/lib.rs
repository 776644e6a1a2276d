//! Persistent key-value stores for failsafe-kv
//!
//! This crate defines the string-valued store the facade writes entries
//! into, plus two implementations:
//! - [`MemoryStore`]: a shared in-process namespace (no disk I/O)
//! - [`FileStore`]: a durable namespace persisted as one JSON file
//!
//! Stores know nothing about entries, timestamps or encodings. They hold
//! opaque strings in one flat namespace with no key prefixing.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::PersistentStore;
