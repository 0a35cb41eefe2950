//! Public construction API: builder, options bag, key storage and one-shot helpers

pub mod builder;
pub mod keys;
pub mod operations;
pub mod options;

pub use builder::{Jwt, JwtBuilder};
pub use keys::SecretKey;
pub use operations::{decode, decode_with_default, encode, encode_with_default};
pub use options::JwtOptions;
