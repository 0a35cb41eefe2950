//! Common infrastructure shared by the easyjwt crates
//!
//! Currently this is the logging layer: `env_logger` initialisation and
//! helpers that log token failures without leaking key material.

#![forbid(unsafe_code)]

pub mod logging;

pub use logging::LoggingTransformer;
