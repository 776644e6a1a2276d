//! Core types for failsafe-kv
//!
//! This crate defines the pieces every other crate builds on:
//! - [`Value`]: the closed value model accepted by the storage facade
//! - [`validate_key`]: the key rules enforced on every public operation
//! - [`Clock`]: the time source used for entry timestamps

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod clock;
pub mod key;
pub mod value;

pub use clock::{Clock, ManualClock, SystemClock};
pub use key::{validate_key, KeyError, MIN_KEY_LEN};
pub use value::{Value, ValueKind};
