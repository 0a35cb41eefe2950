//! Tests for the shared logging helpers

use easyjwt_common::LoggingTransformer;

#[test]
fn test_key_fingerprint() {
    LoggingTransformer::init_test();

    let fp1 = LoggingTransformer::key_fingerprint(b"sensitive_key_123");
    let fp2 = LoggingTransformer::key_fingerprint(b"different_key_456");

    assert_ne!(fp1, fp2);
    assert_eq!(fp1, LoggingTransformer::key_fingerprint(b"sensitive_key_123"));

    // '#' followed by 12 hex characters
    assert!(fp1.starts_with('#'));
    assert_eq!(fp1.len(), 13);
    assert!(fp1[1..].chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_fingerprint_does_not_contain_key() {
    let fp = LoggingTransformer::key_fingerprint(b"abcdef");
    assert!(!fp.contains("abcdef"));
}

#[test]
fn test_logging_operations() {
    LoggingTransformer::init_test();

    // These should not panic
    LoggingTransformer::log_jwt_error("jwt_signing", "SHA256", "Secret key needs to be used.");
    LoggingTransformer::log_token_rejected("signature mismatch", "SHA256");
}
