//! Host environment for a storage facade.
//!
//! An [`Environment`] bundles the collaborators a [`Storage`](crate::Storage)
//! consumes: the persistent store (if any), the structured codec (if
//! any), the clock and the diagnostic sink. It is built once and handed
//! to the facade, so tests can construct an instance with any facility
//! missing.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use failsafe_kv::prelude::*;
//!
//! let store = MemoryStore::new();
//! let env = Environment::new()
//!     .with_store(Arc::new(store))
//!     .with_clock(Arc::new(ManualClock::at_secs(1_700_000_000)));
//!
//! let storage = Storage::new(env);
//! assert_eq!(storage.backend(), BackendKind::Persistent);
//! ```

use failsafe_core::{Clock, SystemClock};
use failsafe_storage::PersistentStore;
use failsafe_wire::{JsonCodec, StructuredCodec};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Receives the raw text of stored entries that fail integrity checks
pub trait DiagnosticSink: Send + Sync {
    /// Report the raw content found under `key`
    fn notice(&self, key: &str, raw: &str);
}

/// Diagnostic sink that logs through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn notice(&self, key: &str, raw: &str) {
        warn!(key, raw, "Stored entry failed integrity check");
    }
}

/// Collaborators consumed by a storage facade
///
/// Defaults: no persistent store, JSON codec, system clock, tracing sink.
#[derive(Clone)]
pub struct Environment {
    store: Option<Arc<dyn PersistentStore>>,
    codec: Option<Arc<dyn StructuredCodec>>,
    clock: Arc<dyn Clock>,
    diagnostics: Option<Arc<dyn DiagnosticSink>>,
}

impl Environment {
    /// Create an environment with the defaults
    pub fn new() -> Self {
        Self {
            store: None,
            codec: Some(Arc::new(JsonCodec)),
            clock: Arc::new(SystemClock),
            diagnostics: Some(Arc::new(TracingSink)),
        }
    }

    /// Use a persistent store
    ///
    /// Several environments may share one store; they then share its
    /// whole namespace.
    pub fn with_store(mut self, store: Arc<dyn PersistentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Use a structured codec
    pub fn with_codec(mut self, codec: Arc<dyn StructuredCodec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Run without a structured codec
    pub fn without_codec(mut self) -> Self {
        self.codec = None;
        self
    }

    /// Use a clock
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Use a diagnostic sink
    pub fn with_diagnostics(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.diagnostics = Some(sink);
        self
    }

    /// Run without a diagnostic sink
    pub fn without_diagnostics(mut self) -> Self {
        self.diagnostics = None;
        self
    }

    /// The persistent store, if configured
    pub fn store(&self) -> Option<&Arc<dyn PersistentStore>> {
        self.store.as_ref()
    }

    /// The structured codec, if configured
    pub fn codec(&self) -> Option<&Arc<dyn StructuredCodec>> {
        self.codec.as_ref()
    }

    /// The clock
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Forward raw content to the diagnostic sink, if any
    pub(crate) fn notice(&self, key: &str, raw: &str) {
        if let Some(sink) = &self.diagnostics {
            sink.notice(key, raw);
        }
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Environment")
            .field("store", &self.store.is_some())
            .field("codec", &self.codec.is_some())
            .field("diagnostics", &self.diagnostics.is_some())
            .finish_non_exhaustive()
    }
}
