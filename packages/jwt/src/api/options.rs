//! Engine options bag
//!
//! Deserializable so applications can embed it in their own configuration:
//!
//! ```json
//! { "key": "my-shared-secret", "alg": "SHA512" }
//! ```

use crate::error::{JwtError, JwtResult};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Optional key and algorithm for a new engine
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JwtOptions {
    /// Shared secret, wiped from memory on drop
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<Zeroizing<String>>,
    /// Hash algorithm identifier, `SHA256` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alg: Option<String>,
}

impl JwtOptions {
    /// Empty options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the shared secret
    #[must_use]
    pub fn with_key(mut self, key: &str) -> Self {
        self.key = Some(Zeroizing::new(key.to_string()));
        self
    }

    /// Set the algorithm identifier
    #[must_use]
    pub fn with_alg(mut self, alg: &str) -> Self {
        self.alg = Some(alg.to_string());
        self
    }

    /// Parse options from a JSON document
    ///
    /// # Errors
    /// Returns `JwtError::InvalidArgument` if the document is not a valid options object
    pub fn from_json(json: &str) -> JwtResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| JwtError::invalid_argument(&format!("Invalid JWT options: {e}")))
    }
}

impl std::fmt::Debug for JwtOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtOptions")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("alg", &self.alg)
            .finish()
    }
}
