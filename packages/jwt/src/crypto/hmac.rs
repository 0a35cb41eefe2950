//! HMAC signing over the SHA-2 and SHA-3 families
//!
//! Algorithm identifiers are the hash names (`SHA256`, `sha3-512`, ...), matched
//! case-insensitively. The MAC is always HMAC; there is no asymmetric signing.

use crate::error::{JwtError, JwtResult};
use hmac::{Hmac, Mac};
use sha2::{Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};
use std::fmt;
use std::str::FromStr;
use subtle::ConstantTimeEq;

/// Hash function used inside the HMAC construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// SHA-224
    Sha224,
    /// SHA-256 (default)
    Sha256,
    /// SHA-384
    Sha384,
    /// SHA-512
    Sha512,
    /// SHA-512/224
    Sha512_224,
    /// SHA-512/256
    Sha512_256,
    /// SHA3-224
    Sha3_224,
    /// SHA3-256
    Sha3_256,
    /// SHA3-384
    Sha3_384,
    /// SHA3-512
    Sha3_512,
}

macro_rules! hmac_digest {
    ($digest:ty, $secret:expr, $message:expr) => {{
        let mut mac = <Hmac<$digest> as Mac>::new_from_slice($secret)
            .map_err(|e| JwtError::invalid_argument(&format!("Invalid HMAC key: {e}")))?;
        mac.update($message);
        Ok(mac.finalize().into_bytes().to_vec())
    }};
}

impl HashAlgorithm {
    /// Every supported algorithm
    pub const ALL: [HashAlgorithm; 10] = [
        HashAlgorithm::Sha224,
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
        HashAlgorithm::Sha512_224,
        HashAlgorithm::Sha512_256,
        HashAlgorithm::Sha3_224,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_384,
        HashAlgorithm::Sha3_512,
    ];

    /// Canonical identifier, as written into the token header by default
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha224 => "SHA224",
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha384 => "SHA384",
            HashAlgorithm::Sha512 => "SHA512",
            HashAlgorithm::Sha512_224 => "SHA512/224",
            HashAlgorithm::Sha512_256 => "SHA512/256",
            HashAlgorithm::Sha3_224 => "SHA3-224",
            HashAlgorithm::Sha3_256 => "SHA3-256",
            HashAlgorithm::Sha3_384 => "SHA3-384",
            HashAlgorithm::Sha3_512 => "SHA3-512",
        }
    }

    /// Length of the raw MAC in bytes
    #[must_use]
    pub fn output_len(self) -> usize {
        match self {
            HashAlgorithm::Sha224 | HashAlgorithm::Sha512_224 | HashAlgorithm::Sha3_224 => 28,
            HashAlgorithm::Sha256 | HashAlgorithm::Sha512_256 | HashAlgorithm::Sha3_256 => 32,
            HashAlgorithm::Sha384 | HashAlgorithm::Sha3_384 => 48,
            HashAlgorithm::Sha512 | HashAlgorithm::Sha3_512 => 64,
        }
    }

    /// Raw HMAC bytes of `message` keyed with `secret`
    ///
    /// # Errors
    /// Returns `JwtError::InvalidArgument` if the hash rejects the key
    pub fn mac(self, secret: &[u8], message: &[u8]) -> JwtResult<Vec<u8>> {
        match self {
            HashAlgorithm::Sha224 => hmac_digest!(Sha224, secret, message),
            HashAlgorithm::Sha256 => hmac_digest!(Sha256, secret, message),
            HashAlgorithm::Sha384 => hmac_digest!(Sha384, secret, message),
            HashAlgorithm::Sha512 => hmac_digest!(Sha512, secret, message),
            HashAlgorithm::Sha512_224 => hmac_digest!(Sha512_224, secret, message),
            HashAlgorithm::Sha512_256 => hmac_digest!(Sha512_256, secret, message),
            HashAlgorithm::Sha3_224 => hmac_digest!(Sha3_224, secret, message),
            HashAlgorithm::Sha3_256 => hmac_digest!(Sha3_256, secret, message),
            HashAlgorithm::Sha3_384 => hmac_digest!(Sha3_384, secret, message),
            HashAlgorithm::Sha3_512 => hmac_digest!(Sha3_512, secret, message),
        }
    }

    /// Recompute the MAC and compare it with `signature` in constant time
    ///
    /// # Errors
    /// See [`mac`](Self::mac)
    pub fn verify(self, secret: &[u8], message: &[u8], signature: &[u8]) -> JwtResult<bool> {
        let expected = self.mac(secret, message)?;
        Ok(constant_time_eq(&expected, signature))
    }
}

impl FromStr for HashAlgorithm {
    type Err = JwtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_ascii_lowercase();
        match normalized.as_str() {
            "sha224" => Ok(HashAlgorithm::Sha224),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            "sha512/224" => Ok(HashAlgorithm::Sha512_224),
            "sha512/256" => Ok(HashAlgorithm::Sha512_256),
            "sha3-224" => Ok(HashAlgorithm::Sha3_224),
            "sha3-256" => Ok(HashAlgorithm::Sha3_256),
            "sha3-384" => Ok(HashAlgorithm::Sha3_384),
            "sha3-512" => Ok(HashAlgorithm::Sha3_512),
            _ => Err(JwtError::unsupported_algorithm(s)),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte-string equality whose running time does not depend on where the
/// inputs first differ. Inputs of different length compare unequal.
#[inline]
#[must_use]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}
