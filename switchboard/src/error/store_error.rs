//! Backing store access errors.

use thiserror::Error;

/// Errors reading or writing a model's backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The stored value does not have the shape the accessor expects.
    #[error("Backing store value for '{key}' has unexpected type: {message}")]
    TypeMismatch {
        /// The property key.
        key: String,
        /// Decoder message.
        message: String,
    },

    /// The value could not be converted to JSON for storage.
    #[error("Backing store rejected value for '{key}': {message}")]
    Unserializable {
        /// The property key.
        key: String,
        /// Encoder message.
        message: String,
    },
}

impl StoreError {
    /// Returns the property key involved in the failure.
    pub fn key(&self) -> &str {
        match self {
            Self::TypeMismatch { key, .. } | Self::Unserializable { key, .. } => key,
        }
    }
}
