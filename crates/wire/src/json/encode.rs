//! Value to JSON

use failsafe_core::Value;
use serde_json::{Map, Number};
use thiserror::Error;

/// Encode error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The value (or something nested in it) has no JSON representation
    #[error("{type_name} values cannot be encoded")]
    Unsupported {
        /// Type name of the offending value
        type_name: &'static str,
    },

    /// The JSON writer failed
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Convert a Value to a JSON value
///
/// Non-finite floats become `null`, matching what a host JSON facility
/// does with them.
pub fn to_json(value: &Value) -> Result<serde_json::Value, EncodeError> {
    Ok(match value {
        Value::Null => serde_json::Value::Null,
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Int(i) => serde_json::Value::Number(Number::from(*i)),
        Value::Float(f) => Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Array(items) => serde_json::Value::Array(
            items.iter().map(to_json).collect::<Result<Vec<_>, _>>()?,
        ),
        Value::Object(map) => {
            let mut out = Map::with_capacity(map.len());
            for (k, v) in map {
                out.insert(k.clone(), to_json(v)?);
            }
            serde_json::Value::Object(out)
        }
        Value::Callable(_) => {
            return Err(EncodeError::Unsupported {
                type_name: value.type_name(),
            })
        }
    })
}
