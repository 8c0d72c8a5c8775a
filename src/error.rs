//! # Error Module
//!
//! Failures that can surface from an [`Optional`](crate::Optional).
//!
//! Absence is never an error. Only the JSON hooks can fail, and when they do
//! the underlying `serde_json` error is handed back untouched.

use thiserror::Error;

/// Encoding and decoding errors.
#[derive(Debug, Error)]
pub enum OptionalError {
    /// The held value has no JSON representation
    #[error("Failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    /// The input is not a valid encoding of the target type
    #[error("Failed to decode value: {0}")]
    Decode(#[source] serde_json::Error),
}

impl OptionalError {
    /// Returns the `serde_json` error this error wraps.
    pub fn inner(&self) -> &serde_json::Error {
        match self {
            OptionalError::Encode(e) | OptionalError::Decode(e) => e,
        }
    }

    /// Returns true if this error came from decoding.
    pub fn is_decode(&self) -> bool {
        matches!(self, OptionalError::Decode(_))
    }
}

pub type Result<T> = std::result::Result<T, OptionalError>;
