//! JWT error types
//!
//! Only caller-side problems are errors. A token that fails verification is
//! reported through [`JwtEngine::is_valid`](crate::JwtEngine::is_valid), never
//! through this type.

use easyjwt_encoding::EncodingError;
use thiserror::Error;

/// JWT operation result type
pub type JwtResult<T> = Result<T, JwtError>;

/// JWT error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JwtError {
    /// Caller supplied an unusable argument (non-mapping payload, missing key)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Encoding or decoding a segment failed
    #[error("Decode error: {0}")]
    Decode(#[from] EncodingError),

    /// The configured hash algorithm identifier is not recognized
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

impl JwtError {
    /// Create an invalid argument error
    #[inline]
    #[must_use]
    pub fn invalid_argument(msg: &str) -> Self {
        JwtError::InvalidArgument(msg.to_string())
    }

    /// Create the error raised when signing or verifying without a secret
    #[inline]
    #[must_use]
    pub fn missing_key() -> Self {
        JwtError::invalid_argument("Secret key needs to be used.")
    }

    /// Create an unsupported algorithm error
    #[inline]
    #[must_use]
    pub fn unsupported_algorithm(alg: &str) -> Self {
        JwtError::UnsupportedAlgorithm(alg.to_string())
    }
}
