//! URL-safe encoding strategy for compact tokens
//!
//! Converts raw bytes to and from a URL-safe base64 text form, and structured
//! values to and from the same form by way of JSON:
//!
//! ```text
//! bytes  ──base64──► text ──translate "+/=" → "-_,"──► segment
//! value  ──JSON──► bytes ──► segment
//! ```
//!
//! The three-character translation table is part of the token wire format and
//! must not change.

#![forbid(unsafe_code)]

mod error;
mod traits;
mod uri_safe;

pub use error::{EncodingError, EncodingResult};
pub use traits::Encoder;
pub use uri_safe::UriSafeEncoder;

use serde::{Serialize, de::DeserializeOwned};

/// Encode bytes with the default [`UriSafeEncoder`]
#[inline]
#[must_use]
pub fn encode(input: &[u8]) -> String {
    UriSafeEncoder.encode(input)
}

/// Decode text produced by [`encode`]
///
/// # Errors
/// Returns `EncodingError` if the text is not valid in the URL-safe alphabet
#[inline]
pub fn decode(input: &str) -> EncodingResult<Vec<u8>> {
    UriSafeEncoder.decode(input)
}

/// Serialize a value to JSON and encode it with the default [`UriSafeEncoder`]
///
/// # Errors
/// Returns `EncodingError::Serialization` if the value has no JSON form
#[inline]
pub fn encode_value<T: Serialize + ?Sized>(value: &T) -> EncodingResult<String> {
    UriSafeEncoder.encode_value(value)
}

/// Decode text produced by [`encode_value`]
///
/// # Errors
/// Returns `EncodingError` on malformed text or malformed JSON
#[inline]
pub fn decode_value<T: DeserializeOwned>(input: &str) -> EncodingResult<T> {
    UriSafeEncoder.decode_value(input)
}
