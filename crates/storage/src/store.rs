//! The persistent store contract

use crate::StoreResult;

/// A synchronous, string-valued key-value store
///
/// All keys live in one flat namespace shared by every holder of the
/// store. Implementations use interior mutability so a store can be
/// shared behind an `Arc` between several facades.
pub trait PersistentStore: Send + Sync {
    /// Report whether the store is usable
    ///
    /// Called once, when a facade is built. Must not fail: an unusable
    /// store answers `false`.
    fn probe(&self) -> bool {
        true
    }

    /// Read the string stored under `key`
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete `key`; a missing key is a no-op
    fn remove_item(&self, key: &str) -> StoreResult<()>;

    /// Delete every key in the namespace
    fn clear(&self) -> StoreResult<()>;

    /// Number of keys in the namespace
    fn len(&self) -> StoreResult<usize>;

    /// Check whether the namespace is empty
    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
