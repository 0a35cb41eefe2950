//! One-shot sign and verify
//!
//! Thin wrappers that configure a default engine and run a single operation.
//! There is no separate signing path: these go through [`JwtEngine`].

use super::builder::Jwt;
use crate::engine::JwtEngine;
use crate::error::JwtResult;
use crate::types::{DEFAULT_ALGORITHM, Verification};
use serde::Serialize;

/// Sign `payload` with `key` using `algorithm`
///
/// # Errors
/// Returns `JwtError::InvalidArgument` if `payload` is not a mapping or `key`
/// is empty, and `JwtError::UnsupportedAlgorithm` for an unknown algorithm
pub fn encode<T: Serialize + ?Sized>(payload: &T, key: &[u8], algorithm: &str) -> JwtResult<String> {
    let mut engine = Jwt::builder()
        .with_secret(key)
        .with_algorithm(algorithm)
        .build();
    engine.set_payload(payload)?.sign()?;
    Ok(engine.token().map(str::to_string).unwrap_or_default())
}

/// Sign `payload` with `key` using `SHA256`
///
/// # Errors
/// See [`encode`]
pub fn encode_with_default<T: Serialize + ?Sized>(payload: &T, key: &[u8]) -> JwtResult<String> {
    encode(payload, key, DEFAULT_ALGORITHM)
}

/// Verify `token` with `key` using `algorithm`
///
/// A bad signature or malformed token yields `valid == false` with empty
/// claims rather than an error.
///
/// # Errors
/// Returns `JwtError::InvalidArgument` if `key` is empty and
/// `JwtError::UnsupportedAlgorithm` for an unknown algorithm
pub fn decode(token: &str, key: &[u8], algorithm: &str) -> JwtResult<Verification> {
    let mut engine: JwtEngine = Jwt::builder()
        .with_secret(key)
        .with_algorithm(algorithm)
        .build();
    engine.load(token)?;
    Ok(Verification {
        valid: engine.is_valid(),
        claims: engine.claims().clone(),
    })
}

/// Verify `token` with `key` using `SHA256`
///
/// # Errors
/// See [`decode`]
pub fn decode_with_default(token: &str, key: &[u8]) -> JwtResult<Verification> {
    decode(token, key, DEFAULT_ALGORITHM)
}
