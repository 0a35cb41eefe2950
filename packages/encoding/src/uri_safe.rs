//! Base64 with a URL-safe substitution table
//!
//! Standard base64 is produced first, then `+`, `/` and the `=` padding are
//! replaced by `-`, `_` and `,`. Padding is always emitted. On decode padding
//! may be present or absent.

use crate::error::{EncodingError, EncodingResult};
use crate::traits::Encoder;
use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};

/// Standard alphabet, padded on encode, padding-indifferent on decode
const BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Standard base64 character → URL-safe substitute
const TRANSLATION: [(char, char); 3] = [('+', '-'), ('/', '_'), ('=', ',')];

/// URL-safe base64 + JSON encoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UriSafeEncoder;

impl UriSafeEncoder {
    /// Create a new encoder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[inline]
fn to_uri_safe(c: char) -> char {
    TRANSLATION
        .iter()
        .find_map(|&(standard, safe)| (standard == c).then_some(safe))
        .unwrap_or(c)
}

#[inline]
fn from_uri_safe(c: char) -> Option<char> {
    if c.is_ascii_alphanumeric() {
        return Some(c);
    }
    TRANSLATION
        .iter()
        .find_map(|&(standard, safe)| (safe == c).then_some(standard))
}

impl Encoder for UriSafeEncoder {
    fn encode(&self, input: &[u8]) -> String {
        BASE64.encode(input).chars().map(to_uri_safe).collect()
    }

    fn decode(&self, input: &str) -> EncodingResult<Vec<u8>> {
        let mut standard = String::with_capacity(input.len());
        for (position, character) in input.char_indices() {
            let mapped = from_uri_safe(character)
                .ok_or(EncodingError::InvalidCharacter { character, position })?;
            standard.push(mapped);
        }

        BASE64
            .decode(standard)
            .map_err(|e| EncodingError::InvalidBase64(e.to_string()))
    }
}
