//! Error types for the encoding layer

use thiserror::Error;

/// Encoding result type
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Errors raised while transcoding token segments
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    /// Character outside the URL-safe alphabet
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Offending character
        character: char,
        /// Byte offset in the input
        position: usize,
    },

    /// Text in the alphabet that is not valid base64 (length, trailing bits, misplaced padding)
    #[error("Invalid base64 data: {0}")]
    InvalidBase64(String),

    /// Decoded bytes are not valid JSON for the requested type
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Value cannot be represented as JSON
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl EncodingError {
    /// Create an invalid JSON error
    #[inline]
    #[must_use]
    pub fn invalid_json(msg: &str) -> Self {
        EncodingError::InvalidJson(msg.to_string())
    }

    /// Create a serialization error
    #[inline]
    #[must_use]
    pub fn serialization(msg: &str) -> Self {
        EncodingError::Serialization(msg.to_string())
    }
}
