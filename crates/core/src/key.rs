//! Key validation
//!
//! Every public storage operation validates its key before touching a
//! backend. Keys arrive as [`Value`]s so that a non-string key is a
//! runtime rejection rather than something the caller cannot express.
//!
//! ## Rules
//!
//! | Input | Result |
//! |-------|--------|
//! | not a string | `InvalidKeyType` |
//! | `""` | `InvalidKeyType` |
//! | fewer than [`MIN_KEY_LEN`] characters | `KeyTooShort` |
//! | otherwise | key returned unchanged |

use crate::Value;
use thiserror::Error;

/// Minimum key length, in characters
pub const MIN_KEY_LEN: usize = 4;

/// Key validation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum KeyError {
    /// The key is not a non-empty string
    #[error("key must be a non-empty string, got {actual}")]
    InvalidKeyType {
        /// Type name of the rejected key
        actual: &'static str,
    },

    /// The key is shorter than [`MIN_KEY_LEN`]
    #[error("key {key:?} is {len} characters, must be at least {MIN_KEY_LEN}")]
    KeyTooShort {
        /// The rejected key
        key: String,
        /// Its length in characters
        len: usize,
    },
}

/// Validate a key, returning it unchanged on success
pub fn validate_key(key: &Value) -> Result<&str, KeyError> {
    let key = match key {
        Value::String(s) if !s.is_empty() => s.as_str(),
        Value::String(_) => return Err(KeyError::InvalidKeyType { actual: "empty String" }),
        other => {
            return Err(KeyError::InvalidKeyType {
                actual: other.type_name(),
            })
        }
    };

    let len = key.chars().count();
    if len < MIN_KEY_LEN {
        return Err(KeyError::KeyTooShort {
            key: key.to_string(),
            len,
        });
    }

    Ok(key)
}
