//! Structured logging for token operations
//!
//! Backed by `env_logger`. Keys never appear in log lines, only their
//! fingerprints.

use log::{error, info, warn};
use sha2::{Digest, Sha256};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Logging infrastructure using `env_logger`
pub struct LoggingTransformer;

impl LoggingTransformer {
    /// Initialize logging system (should be called once at application startup)
    ///
    /// Configure logging levels via `RUST_LOG` environment variable:
    /// - `RUST_LOG=debug` - Enable all debug logs
    /// - `RUST_LOG=info` - Enable info and above
    /// - `RUST_LOG=easyjwt=debug` - Module-specific levels
    pub fn init() {
        INIT_LOGGER.call_once(|| {
            env_logger::Builder::from_default_env()
                .format_timestamp_micros()
                .init();

            info!("Structured logging initialized");
        });
    }

    /// Initialize logging for test environments
    ///
    /// Safe to call from every test; only the first call installs the logger.
    pub fn init_test() {
        let _ = env_logger::Builder::from_default_env()
            .is_test(true)
            .try_init();
    }

    /// Log a failed token operation caused by the caller's configuration or input
    pub fn log_jwt_error(operation: &str, algorithm: &str, error: &str) {
        error!("JWT operation failed: {operation} (algorithm: {algorithm}, error: {error})");
    }

    /// Log a token that was rejected during verification
    ///
    /// Rejections are expected for untrusted input, so they are logged below error level.
    pub fn log_token_rejected(reason: &str, algorithm: &str) {
        warn!("JWT rejected: {reason} (algorithm: {algorithm})");
    }

    /// Fingerprint of a secret suitable for log output
    ///
    /// Uses SHA-256 and keeps the first 12 hex characters, prefixed with `#`.
    #[must_use]
    pub fn key_fingerprint(key: &[u8]) -> String {
        let hash = Sha256::digest(key);
        let hex_hash = format!("{hash:x}");
        format!("#{}", &hex_hash[..12])
    }
}
