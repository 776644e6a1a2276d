//! Unified error types for failsafe-kv.
//!
//! This module provides the error type returned by every facade
//! operation. Member-crate errors convert into it with `From`.
//!
//! Only hard failures live here. Ordinary misses (absent key, expired
//! entry, structured value with no codec available) are reported in the
//! `Ok` channel as `None`.

use failsafe_core::KeyError;
use failsafe_storage::StoreError;
use failsafe_wire::{CodecError, EncodeError};
use thiserror::Error;

/// All failsafe-kv errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Key is not a non-empty string
    #[error("invalid key type: expected a non-empty string, got {actual}")]
    InvalidKeyType {
        /// Type name of the rejected key
        actual: &'static str,
    },

    /// Key is shorter than the minimum length
    #[error("key {key:?} is too short: {len} characters, minimum {min}")]
    KeyTooShort {
        /// The rejected key
        key: String,
        /// Its length in characters
        len: usize,
        /// Minimum accepted length
        min: usize,
    },

    /// Value cannot be stored (executable code)
    #[error("cannot store {type_name} values")]
    UnsupportedValueType {
        /// Type name of the rejected value
        type_name: &'static str,
    },

    /// Stored text under a key is not a readable entry
    #[error("entry under {key:?} could not be parsed: {reason}")]
    CorruptEntry {
        /// Key holding the entry
        key: String,
        /// Parser message
        reason: String,
    },

    /// Stored entry under a key carries no timestamp
    #[error("entry under {key:?} has no timestamp")]
    MissingTimestamp {
        /// Key holding the entry
        key: String,
    },

    /// The configured codec failed to serialize a value
    #[error("codec error: {0}")]
    Codec(String),

    /// The persistent store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for failsafe-kv operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error rejects the caller's key.
    pub fn is_key_error(&self) -> bool {
        matches!(self, Error::InvalidKeyType { .. } | Error::KeyTooShort { .. })
    }

    /// Check if this error reports stored data this component cannot read.
    ///
    /// These are never masked as a miss.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            Error::CorruptEntry { .. } | Error::MissingTimestamp { .. }
        )
    }
}

impl From<KeyError> for Error {
    fn from(e: KeyError) -> Self {
        match e {
            KeyError::InvalidKeyType { actual } => Error::InvalidKeyType { actual },
            KeyError::KeyTooShort { key, len } => Error::KeyTooShort {
                key,
                len,
                min: failsafe_core::MIN_KEY_LEN,
            },
        }
    }
}

impl From<EncodeError> for Error {
    fn from(e: EncodeError) -> Self {
        match e {
            EncodeError::Unsupported { type_name } => Error::UnsupportedValueType { type_name },
            EncodeError::Serialization(msg) => Error::Codec(msg),
        }
    }
}

impl From<CodecError> for Error {
    fn from(e: CodecError) -> Self {
        match e {
            CodecError::Unsupported(inner) => inner.into(),
            CodecError::Malformed(msg) => Error::Codec(msg),
        }
    }
}
