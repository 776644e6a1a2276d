//! Convenient imports for failsafe-kv.
//!
//! ```
//! use failsafe_kv::prelude::*;
//!
//! let storage = Storage::ephemeral();
//! storage.set("counter", 1)?;
//! # Ok::<(), failsafe_kv::Error>(())
//! ```

// Main entry point
pub use crate::storage::Storage;
pub use crate::environment::{DiagnosticSink, Environment};
pub use crate::capabilities::{BackendKind, Capabilities};

// Error handling
pub use crate::error::{Error, Result};

// Values
pub use failsafe_core::{Value, ValueKind};

// Collaborators
pub use failsafe_core::{Clock, ManualClock, SystemClock};
pub use failsafe_storage::{FileStore, MemoryStore, PersistentStore, StoreError};
pub use failsafe_wire::{JsonCodec, StructuredCodec};
