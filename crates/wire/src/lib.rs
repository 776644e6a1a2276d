//! Wire encoding for failsafe-kv
//!
//! This crate owns everything that turns caller values into strings and
//! back:
//!
//! - [`json`]: conversion between [`Value`](failsafe_core::Value) and JSON
//! - [`codec`]: the pluggable structured-value codec
//! - [`entry`]: the timestamped envelope written under each key
//!
//! ## Entry Format
//!
//! | Field | Type | Meaning |
//! |-------|------|---------|
//! | `t` | number | write time, seconds since epoch |
//! | `json` | `true`, omitted otherwise | `d` holds a serialized structured value |
//! | `d` | any | the payload |
//!
//! ## Examples
//!
//! ```
//! use failsafe_core::Value;
//! use failsafe_wire::{decode_entry, encode_entry, StoredEntry};
//!
//! let entry = StoredEntry::primitive(1_700_000_000.0, Value::Int(42));
//! let raw = encode_entry(&entry).unwrap();
//! assert_eq!(raw, r#"{"t":1700000000.0,"d":42}"#);
//!
//! let decoded = decode_entry(&raw).unwrap();
//! assert_eq!(decoded.payload, Value::Int(42));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod entry;
pub mod json;

pub use codec::{CodecError, JsonCodec, StructuredCodec};
pub use entry::{decode_entry, encode_entry, EntryError, StoredEntry};
pub use json::{from_json, to_json, EncodeError};
