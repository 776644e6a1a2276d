//! Stored entry envelope
//!
//! Every value written to a persistent store is wrapped in an envelope
//! carrying its write time and whether the payload is a serialized
//! structured value:
//!
//! ```json
//! {"t": 1700000000.25, "json": true, "d": "{\"a\":1}"}
//! ```
//!
//! Decoding distinguishes two integrity failures: text that is not JSON
//! at all ([`EntryError::Corrupt`]) and JSON that was not written by this
//! component ([`EntryError::MissingTimestamp`]).

use crate::json::{from_json, to_json, EncodeError};
use failsafe_core::Value;
use serde::Serialize;
use thiserror::Error;

const SECS_PER_MINUTE: f64 = 60.0;

/// Entry decode errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EntryError {
    /// The stored text could not be parsed as an entry
    #[error("stored entry could not be parsed: {0}")]
    Corrupt(String),

    /// The stored entry has no usable timestamp
    #[error("stored entry has no timestamp")]
    MissingTimestamp,
}

/// The unit stored under a key
#[derive(Debug, Clone, PartialEq)]
pub struct StoredEntry {
    /// Write time, seconds since epoch
    pub timestamp: f64,
    /// `payload` is the serialized form of a structured value
    pub is_encoded: bool,
    /// The caller value, or its serialized string when `is_encoded`
    pub payload: Value,
}

impl StoredEntry {
    /// Entry holding a value as-is
    pub fn primitive(timestamp: f64, payload: Value) -> Self {
        Self {
            timestamp,
            is_encoded: false,
            payload,
        }
    }

    /// Entry holding a serialized structured value
    pub fn encoded(timestamp: f64, serialized: String) -> Self {
        Self {
            timestamp,
            is_encoded: true,
            payload: Value::String(serialized),
        }
    }

    /// Check whether the entry is older than `max_age_minutes` at `now`
    ///
    /// An entry exactly `max_age_minutes` old is not yet expired.
    pub fn is_expired(&self, now: f64, max_age_minutes: f64) -> bool {
        self.timestamp < now - max_age_minutes * SECS_PER_MINUTE
    }
}

#[derive(Serialize)]
struct WireEntry {
    t: f64,
    #[serde(skip_serializing_if = "is_false")]
    json: bool,
    d: serde_json::Value,
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Encode an entry to its wire string
pub fn encode_entry(entry: &StoredEntry) -> Result<String, EncodeError> {
    let wire = WireEntry {
        t: entry.timestamp,
        json: entry.is_encoded,
        d: to_json(&entry.payload)?,
    };
    serde_json::to_string(&wire).map_err(|e| EncodeError::Serialization(e.to_string()))
}

/// Decode a wire string into an entry
///
/// A missing `d` decodes as `Null`. When `json` is true, `d` must be a
/// string; it is returned still serialized.
pub fn decode_entry(raw: &str) -> Result<StoredEntry, EntryError> {
    let parsed: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| EntryError::Corrupt(e.to_string()))?;

    let serde_json::Value::Object(mut fields) = parsed else {
        return Err(EntryError::MissingTimestamp);
    };

    let timestamp = match fields.get("t").and_then(serde_json::Value::as_f64) {
        Some(t) if t >= 0.0 => t,
        _ => return Err(EntryError::MissingTimestamp),
    };

    let is_encoded = matches!(fields.get("json"), Some(serde_json::Value::Bool(true)));
    let payload = fields.remove("d").unwrap_or(serde_json::Value::Null);

    let payload = if is_encoded {
        match payload {
            serde_json::Value::String(s) => Value::String(s),
            other => {
                return Err(EntryError::Corrupt(format!(
                    "encoded payload must be a string, found {}",
                    json_type_name(&other)
                )))
            }
        }
    } else {
        from_json(payload)
    };

    Ok(StoredEntry {
        timestamp,
        is_encoded,
        payload,
    })
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
