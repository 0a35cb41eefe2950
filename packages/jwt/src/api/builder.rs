//! JWT Builder API - entry point and configuration methods

use super::keys::SecretKey;
use super::options::JwtOptions;
use crate::engine::JwtEngine;
use crate::types::DEFAULT_ALGORITHM;
use easyjwt_encoding::{Encoder, UriSafeEncoder};

/// Direct builder entry point
pub struct Jwt;

impl Jwt {
    /// Create new JWT builder
    #[inline]
    #[must_use]
    pub fn builder() -> JwtBuilder {
        JwtBuilder::new()
    }

    /// Engine with the default encoder and algorithm, keyed with `secret`
    #[inline]
    #[must_use]
    pub fn with_secret(secret: &[u8]) -> JwtEngine {
        JwtBuilder::new().with_secret(secret).build()
    }
}

/// Configures a [`JwtEngine`]
#[derive(Debug, Clone)]
pub struct JwtBuilder<E: Encoder = UriSafeEncoder> {
    pub(crate) algorithm: Option<String>,
    pub(crate) secret: Option<SecretKey>,
    pub(crate) encoder: E,
}

impl JwtBuilder {
    /// Create new JWT builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithm: None,
            secret: None,
            encoder: UriSafeEncoder,
        }
    }
}

impl Default for JwtBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Encoder> JwtBuilder<E> {
    /// Set the hash algorithm identifier
    #[inline]
    #[must_use]
    pub fn with_algorithm(mut self, algorithm: &str) -> Self {
        self.algorithm = Some(algorithm.to_string());
        self
    }

    /// Set the shared secret
    #[inline]
    #[must_use]
    pub fn with_secret(mut self, secret: &[u8]) -> Self {
        self.secret = Some(SecretKey::new(secret));
        self
    }

    /// Apply an options bag; fields absent from `options` keep their current value
    #[must_use]
    pub fn with_options(mut self, options: JwtOptions) -> Self {
        if let Some(key) = options.key {
            self.secret = Some(SecretKey::new(key.as_bytes()));
        }
        if let Some(alg) = options.alg {
            self.algorithm = Some(alg);
        }
        self
    }

    /// Use a different encoding strategy
    #[inline]
    #[must_use]
    pub fn with_encoder<F: Encoder>(self, encoder: F) -> JwtBuilder<F> {
        JwtBuilder {
            algorithm: self.algorithm,
            secret: self.secret,
            encoder,
        }
    }

    /// Build the engine
    #[must_use]
    pub fn build(self) -> JwtEngine<E> {
        let algorithm = self.get_algorithm();
        let mut engine = JwtEngine::with_encoder(self.encoder);
        engine.set_algorithm(&algorithm);
        if let Some(secret) = self.secret {
            engine.set_key(secret.as_bytes());
        }
        engine
    }

    /// Get algorithm with default fallback
    #[inline]
    #[must_use]
    pub(crate) fn get_algorithm(&self) -> String {
        self.algorithm
            .clone()
            .unwrap_or_else(|| DEFAULT_ALGORITHM.to_string())
    }
}
