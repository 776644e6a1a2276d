//! Structured-value codec
//!
//! The facade serializes arrays and objects through a
//! [`StructuredCodec`] before putting them in a persistent store. The
//! codec is an environment capability: a facade built without one can
//! still store primitives, but reports a soft failure for structured
//! values on a persistent backend.

use crate::json::{from_json, to_json, EncodeError};
use failsafe_core::Value;
use thiserror::Error;

/// Codec error types
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CodecError {
    /// The value cannot be serialized
    #[error(transparent)]
    Unsupported(#[from] EncodeError),

    /// The input is not a serialized value
    #[error("malformed serialized value: {0}")]
    Malformed(String),
}

/// Encodes structured values to strings and back
pub trait StructuredCodec: Send + Sync {
    /// Serialize a value to a string
    fn serialize(&self, value: &Value) -> Result<String, CodecError>;

    /// Reconstruct a value from its serialized form
    fn deserialize(&self, text: &str) -> Result<Value, CodecError>;
}

/// JSON codec backed by `serde_json`
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl StructuredCodec for JsonCodec {
    fn serialize(&self, value: &Value) -> Result<String, CodecError> {
        Ok(to_json(value)?.to_string())
    }

    fn deserialize(&self, text: &str) -> Result<Value, CodecError> {
        serde_json::from_str(text)
            .map(from_json)
            .map_err(|e| CodecError::Malformed(e.to_string()))
    }
}
