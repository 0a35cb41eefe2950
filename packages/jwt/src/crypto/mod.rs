//! Keyed-hash primitives for token signatures

mod hmac;

pub use self::hmac::{HashAlgorithm, constant_time_eq};
