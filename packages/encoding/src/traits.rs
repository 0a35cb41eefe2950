//! The encoding strategy interface.

use crate::error::{EncodingError, EncodingResult};
use serde::{Serialize, de::DeserializeOwned};

/// Reversible text encoding used for every token segment.
///
/// Implementors supply the byte layer (`encode`/`decode`); the value layer
/// serializes through JSON and reuses it. Implementations must be stateless or
/// internally synchronized (Send + Sync).
pub trait Encoder: Send + Sync {
    /// Encode raw bytes → text. Total for every input.
    fn encode(&self, input: &[u8]) -> String;

    /// Decode text → raw bytes.
    ///
    /// # Errors
    /// Returns `EncodingError` if `input` is not valid in this encoding.
    fn decode(&self, input: &str) -> EncodingResult<Vec<u8>>;

    /// Serialize `value` as JSON, then encode the bytes.
    ///
    /// # Errors
    /// Returns `EncodingError::Serialization` if `value` has no JSON form.
    fn encode_value<T: Serialize + ?Sized>(&self, value: &T) -> EncodingResult<String> {
        let json = serde_json::to_vec(value)
            .map_err(|e| EncodingError::serialization(&e.to_string()))?;
        Ok(self.encode(&json))
    }

    /// Decode the text, then parse the bytes as JSON.
    ///
    /// # Errors
    /// Returns `EncodingError` on malformed text or JSON that does not fit `T`.
    fn decode_value<T: DeserializeOwned>(&self, input: &str) -> EncodingResult<T> {
        let json = self.decode(input)?;
        serde_json::from_slice(&json).map_err(|e| EncodingError::invalid_json(&e.to_string()))
    }
}

/// Implementation of Encoder for Arc<T> to allow shared ownership.
impl<T: Encoder> Encoder for std::sync::Arc<T> {
    fn encode(&self, input: &[u8]) -> String {
        (**self).encode(input)
    }

    fn decode(&self, input: &str) -> EncodingResult<Vec<u8>> {
        (**self).decode(input)
    }

    fn encode_value<V: Serialize + ?Sized>(&self, value: &V) -> EncodingResult<String> {
        (**self).encode_value(value)
    }

    fn decode_value<V: DeserializeOwned>(&self, input: &str) -> EncodingResult<V> {
        (**self).decode_value(input)
    }
}
