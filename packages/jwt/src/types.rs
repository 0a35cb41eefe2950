//! JWT type definitions

use serde::{Deserialize, Serialize};

/// Algorithm used when none is configured
pub const DEFAULT_ALGORITHM: &str = "SHA256";

/// Claims carried by a token: a JSON object with string keys.
///
/// Key order is preserved as inserted.
pub type Claims = serde_json::Map<String, serde_json::Value>;

/// JWT header structure
///
/// Field order is part of the wire format: `{"typ":"JWT","alg":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    /// Token type (always "JWT")
    pub typ: String,
    /// Hash algorithm identifier, as configured
    pub alg: String,
}

impl JwtHeader {
    /// Create a header for the given algorithm identifier
    #[must_use]
    pub fn new(alg: &str) -> Self {
        Self {
            typ: "JWT".to_string(),
            alg: alg.to_string(),
        }
    }
}

/// Outcome of verifying a token with the one-shot [`decode`](crate::decode)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Verification {
    /// Decoded claims; empty unless `valid`
    pub claims: Claims,
    /// Whether the signature matched
    pub valid: bool,
}

impl Verification {
    /// Claims of a valid token, `None` otherwise
    #[must_use]
    pub fn into_claims(self) -> Option<Claims> {
        self.valid.then_some(self.claims)
    }
}

/// The three dot-separated segments of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segments<'a> {
    pub header: &'a str,
    pub claims: &'a str,
    pub signature: &'a str,
}

impl<'a> Segments<'a> {
    /// Split a token; `None` unless there are exactly three non-empty segments
    pub(crate) fn split(token: &'a str) -> Option<Self> {
        let mut parts = token.split('.');
        let header = parts.next()?;
        let claims = parts.next()?;
        let signature = parts.next()?;
        if parts.next().is_some() || header.is_empty() || claims.is_empty() || signature.is_empty()
        {
            return None;
        }
        Some(Self {
            header,
            claims,
            signature,
        })
    }

    /// `header.claims`, the bytes covered by the signature
    pub(crate) fn signing_input(&self) -> String {
        format!("{}.{}", self.header, self.claims)
    }
}
