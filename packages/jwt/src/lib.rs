//! Compact HMAC-signed JSON Web Tokens
//!
//! A token is three URL-safe segments joined by dots:
//!
//! ```text
//! encode({"typ":"JWT","alg":"SHA256"}) . encode(claims) . encode(HMAC(key, "h.c"))
//! ```
//!
//! [`JwtEngine`] holds the key and algorithm, signs claims and verifies
//! tokens received from elsewhere. Verification never fails with an error for
//! a bad token; check [`JwtEngine::is_valid`]. [`encode`] and [`decode`] are
//! one-shot wrappers around the same engine.
//!
//! ```
//! use easyjwt::{Jwt, JwtResult};
//! use serde_json::json;
//!
//! fn main() -> JwtResult<()> {
//!     let mut engine = Jwt::with_secret(b"secret");
//!     engine.set_payload(&json!({"sub": "1234", "name": "Ada"}))?.sign()?;
//!     let token = engine.token().unwrap_or_default().to_string();
//!
//!     let mut verifier = Jwt::with_secret(b"secret");
//!     verifier.load(&token)?;
//!     assert!(verifier.is_valid());
//!     assert_eq!(verifier.claims()["name"], "Ada");
//!     Ok(())
//! }
//! ```

#![forbid(unsafe_code)]

pub mod api;
pub mod crypto;
mod engine;
mod error;
mod types;

pub use api::{
    Jwt, JwtBuilder, JwtOptions, SecretKey, decode, decode_with_default, encode,
    encode_with_default,
};
pub use crypto::{HashAlgorithm, constant_time_eq};
pub use engine::JwtEngine;
pub use error::{JwtError, JwtResult};
pub use types::{Claims, DEFAULT_ALGORITHM, JwtHeader, Verification};

pub use easyjwt_encoding::{Encoder, EncodingError, EncodingResult, UriSafeEncoder};
