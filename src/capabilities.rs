//! Capability detection
//!
//! Run once when a facade is built. The two flags it records decide,
//! for the facade's whole lifetime, which backend is active and whether
//! structured values can be written to it.
//!
//! | has_persistent_store | Backend |
//! |----------------------|---------|
//! | true | Persistent (entries serialized into the store) |
//! | false | Fallback (in-process map, lost on drop) |

use crate::environment::Environment;
use serde::{Deserialize, Serialize};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Facilities found in an environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// A structured-value codec is configured
    pub has_structured_codec: bool,

    /// A persistent store is configured and its probe succeeded
    pub has_persistent_store: bool,
}

/// The backend a facade routes operations to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// The environment's persistent store
    Persistent,
    /// The in-process fallback map
    Fallback,
}

impl Capabilities {
    /// Probe an environment
    ///
    /// Never fails. A missing store, a probe answering `false` or a
    /// probe that panics are all recorded as `false`.
    pub fn detect(env: &Environment) -> Self {
        let has_persistent_store = env.store().map_or(false, |store| {
            catch_unwind(AssertUnwindSafe(|| store.probe())).unwrap_or(false)
        });

        Capabilities {
            has_structured_codec: env.codec().is_some(),
            has_persistent_store,
        }
    }

    /// Backend selected by these capabilities
    pub fn backend(&self) -> BackendKind {
        if self.has_persistent_store {
            BackendKind::Persistent
        } else {
            BackendKind::Fallback
        }
    }
}
