//! Stateful token engine: signs claims and verifies tokens
//!
//! ```text
//! sign:  header ─encode_value─┐
//!        claims ─encode_value─┴─ "h.c" ─HMAC─ encode ─► "h.c.s"
//!
//! load:  "h.c.s" ─split─ HMAC("h.c") ≟ decode(s) ─► decode_value(c)
//! ```
//!
//! A token that fails verification is not an error: the engine ends up
//! invalid with empty claims. Errors are reserved for caller mistakes such as
//! a missing key or an unknown algorithm, and leave the engine untouched.
//!
//! One engine may sign and load many tokens in sequence; each call replaces
//! the previous outcome. It is not meant to be mutated from several threads at
//! once.

use crate::api::keys::SecretKey;
use crate::api::options::JwtOptions;
use crate::crypto::HashAlgorithm;
use crate::error::{JwtError, JwtResult};
use crate::types::{Claims, DEFAULT_ALGORITHM, JwtHeader, Segments};
use easyjwt_common::LoggingTransformer;
use easyjwt_encoding::{Encoder, EncodingError, UriSafeEncoder};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

const SIGN_OPERATION: &str = "jwt_signing";
const LOAD_OPERATION: &str = "jwt_verification";

/// Signs and verifies HMAC tokens with a configured key and algorithm
#[derive(Debug, Clone)]
pub struct JwtEngine<E: Encoder = UriSafeEncoder> {
    encoder: E,
    key: Option<SecretKey>,
    algorithm: String,
    claims: Claims,
    token: Option<String>,
    validated: bool,
}

impl JwtEngine {
    /// Engine with the URL-safe encoder, no key and the default algorithm
    #[must_use]
    pub fn new() -> Self {
        Self::with_encoder(UriSafeEncoder)
    }
}

impl Default for JwtEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Encoder> JwtEngine<E> {
    /// Engine with a custom encoding strategy
    #[must_use]
    pub fn with_encoder(encoder: E) -> Self {
        Self {
            encoder,
            key: None,
            algorithm: DEFAULT_ALGORITHM.to_string(),
            claims: Claims::new(),
            token: None,
            validated: false,
        }
    }

    /// Engine configured from an options bag
    #[must_use]
    pub fn from_options(encoder: E, options: JwtOptions) -> Self {
        let mut engine = Self::with_encoder(encoder);
        engine.configure(
            options.key.as_ref().map(|key| key.as_bytes()),
            options.alg.as_deref(),
        );
        engine
    }

    /// Set the key and/or the algorithm; `None` leaves the current value
    ///
    /// Neither is validated here. A missing key or unknown algorithm is
    /// reported by [`sign`](Self::sign) or [`load`](Self::load).
    pub fn configure(&mut self, key: Option<&[u8]>, algorithm: Option<&str>) -> &mut Self {
        if let Some(key) = key {
            self.set_key(key);
        }
        if let Some(algorithm) = algorithm {
            self.set_algorithm(algorithm);
        }
        self
    }

    /// Set the shared secret
    pub fn set_key(&mut self, key: impl AsRef<[u8]>) -> &mut Self {
        self.key = Some(SecretKey::new(key.as_ref()));
        self
    }

    /// Set the hash algorithm identifier (e.g. `SHA256`, `sha3-512`)
    pub fn set_algorithm(&mut self, algorithm: &str) -> &mut Self {
        self.algorithm = algorithm.to_string();
        self
    }

    /// Configured algorithm identifier
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Whether a non-empty key is configured
    #[must_use]
    pub fn has_key(&self) -> bool {
        self.key.as_ref().is_some_and(|key| !key.is_empty())
    }

    /// Encoding strategy in use
    #[must_use]
    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    /// Store the claims to sign
    ///
    /// # Errors
    /// Returns `JwtError::InvalidArgument` unless `payload` serializes to a JSON object
    pub fn set_payload<T: Serialize + ?Sized>(&mut self, payload: &T) -> JwtResult<&mut Self> {
        match serde_json::to_value(payload) {
            Ok(Value::Object(claims)) => {
                self.claims = claims;
                Ok(self)
            }
            _ => Err(self.fail(
                "jwt_payload",
                JwtError::invalid_argument("Expected payload to be a mapping."),
            )),
        }
    }

    /// Store the claims to sign
    pub fn set_claims(&mut self, claims: Claims) -> &mut Self {
        self.claims = claims;
        self
    }

    /// Sign the current claims
    ///
    /// On success the token is available from [`token`](Self::token) and the
    /// engine is valid.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidArgument` without a key and
    /// `JwtError::UnsupportedAlgorithm` for an unknown algorithm. The previous
    /// token is kept on error.
    pub fn sign(&mut self) -> JwtResult<&mut Self> {
        let secret = self.secret(SIGN_OPERATION)?;
        let algorithm = self.hash_algorithm(SIGN_OPERATION)?;

        let header = JwtHeader::new(&self.algorithm);
        let header_segment = self.encode_segment(&header)?;
        let claims_segment = self.encode_segment(&self.claims)?;

        let signing_input = format!("{header_segment}.{claims_segment}");
        let signature = algorithm
            .mac(secret.as_bytes(), signing_input.as_bytes())
            .map_err(|e| self.fail(SIGN_OPERATION, e))?;
        let token = format!("{signing_input}.{}", self.encoder.encode(&signature));

        tracing::debug!(algorithm = %self.algorithm, token_len = token.len(), "signed token");

        self.token = Some(token);
        self.validated = true;
        Ok(self)
    }

    /// Verify `token` and, if its signature matches, take its claims
    ///
    /// A malformed token, an undecodable segment or a signature mismatch
    /// leaves the engine invalid with empty claims; none of them is an error.
    ///
    /// # Errors
    /// Returns `JwtError::InvalidArgument` without a key and
    /// `JwtError::UnsupportedAlgorithm` for an unknown algorithm. The engine
    /// is not modified on error.
    pub fn load(&mut self, token: &str) -> JwtResult<&mut Self> {
        let secret = self.secret(LOAD_OPERATION)?;
        let algorithm = self.hash_algorithm(LOAD_OPERATION)?;

        let outcome = self
            .verify(token, algorithm, secret.as_bytes())
            .map_err(|e| self.fail(LOAD_OPERATION, e))?;
        self.token = Some(token.to_string());

        match outcome {
            Ok(claims) => {
                tracing::debug!(algorithm = %self.algorithm, claims = claims.len(), "token verified");
                self.claims = claims;
                self.validated = true;
            }
            Err(reason) => {
                LoggingTransformer::log_token_rejected(reason, &self.algorithm);
                self.claims = Claims::new();
                self.validated = false;
            }
        }
        Ok(self)
    }

    /// Whether the last `sign` or `load` produced a valid token
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.validated
    }

    /// Current claims: those set for signing, or those of the last loaded token
    #[must_use]
    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    /// Deserialize the current claims into `T`
    ///
    /// # Errors
    /// Returns `JwtError::Decode` if the claims do not fit `T`
    pub fn claims_as<T: DeserializeOwned>(&self) -> JwtResult<T> {
        serde_json::from_value(Value::Object(self.claims.clone()))
            .map_err(|e| JwtError::Decode(EncodingError::invalid_json(&e.to_string())))
    }

    /// Last signed or loaded token
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Check the token and return its claims, or the reason it was rejected
    ///
    /// The outer error is a keyed-hash failure, not a property of the token.
    fn verify(
        &self,
        token: &str,
        algorithm: HashAlgorithm,
        secret: &[u8],
    ) -> JwtResult<Result<Claims, &'static str>> {
        let Some(segments) = Segments::split(token) else {
            return Ok(Err("malformed token"));
        };

        let Ok(provided) = self.encoder.decode(segments.signature) else {
            return Ok(Err("undecodable signature segment"));
        };
        if !algorithm.verify(secret, segments.signing_input().as_bytes(), &provided)? {
            return Ok(Err("signature mismatch"));
        }

        Ok(match self.encoder.decode_value::<Value>(segments.claims) {
            Ok(Value::Object(claims)) => Ok(claims),
            // An empty payload is serialized as `[]` by some producers
            Ok(Value::Array(items)) if items.is_empty() => Ok(Claims::new()),
            Ok(_) => Err("claims segment is not a mapping"),
            Err(_) => Err("undecodable claims segment"),
        })
    }

    fn encode_segment<T: Serialize + ?Sized>(&self, value: &T) -> JwtResult<String> {
        self.encoder
            .encode_value(value)
            .map_err(|e| self.fail(SIGN_OPERATION, JwtError::from(e)))
    }

    fn secret(&self, operation: &str) -> JwtResult<&SecretKey> {
        match &self.key {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(self.fail(operation, JwtError::missing_key())),
        }
    }

    fn hash_algorithm(&self, operation: &str) -> JwtResult<HashAlgorithm> {
        self.algorithm
            .parse()
            .map_err(|e| self.fail(operation, e))
    }

    fn fail(&self, operation: &str, error: JwtError) -> JwtError {
        LoggingTransformer::log_jwt_error(operation, &self.algorithm, &error.to_string());
        error
    }
}
