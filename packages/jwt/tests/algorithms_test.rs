//! Keyed-hash algorithms: known-answer vectors, identifiers and comparison

use easyjwt::{HashAlgorithm, JwtError, constant_time_eq};
use hex_literal::hex;

const RFC4231_KEY: [u8; 20] = [0x0b; 20];
const RFC4231_DATA: &[u8] = b"Hi There";

#[test]
fn test_hmac_sha256_rfc4231_case_1() {
    let mac = HashAlgorithm::Sha256
        .mac(&RFC4231_KEY, RFC4231_DATA)
        .expect("HMAC accepts any key length");
    assert_eq!(
        mac,
        hex!("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7")
    );
}

#[test]
fn test_hmac_sha512_rfc4231_case_1() {
    let mac = HashAlgorithm::Sha512
        .mac(&RFC4231_KEY, RFC4231_DATA)
        .expect("HMAC accepts any key length");
    assert_eq!(
        mac,
        hex!(
            "87aa7cdea5ef619d4ff0b4241a1d6cb02379f4e2ce4ec2787ad0b30545e17cde"
            "daa833b7d6b8a702038b274eaea3f4e4be9d914eeb61f1702e696c203a126854"
        )
    );
}

#[test]
fn test_hmac_sha3_256_known_answer() {
    let mac = HashAlgorithm::Sha3_256
        .mac(&RFC4231_KEY, RFC4231_DATA)
        .expect("HMAC accepts any key length");
    assert_eq!(
        mac,
        hex!("ba85192310dffa96e2a3a40e69774351140bb7185e1202cdcc917589f95e16bb")
    );
}

#[test]
fn test_hmac_sha256_token_signature() {
    let signing_input =
        "eyJ0eXAiOiJKV1QiLCJhbGciOiJTSEEyNTYifQ,,.eyJzdWIiOiIxMjM0IiwibmFtZSI6IkFkYSJ9";
    let mac = HashAlgorithm::Sha256
        .mac(b"secret", signing_input.as_bytes())
        .expect("HMAC accepts any key length");
    assert_eq!(
        mac,
        hex!("cfeb133e07c619208d2fe2d243cb2c12896a28862e58a61b8815c145d221872e")
    );
}

#[test]
fn test_output_len_matches_mac() {
    for algorithm in HashAlgorithm::ALL {
        let mac = algorithm
            .mac(b"key", b"message")
            .expect("HMAC accepts any key length");
        assert_eq!(mac.len(), algorithm.output_len(), "{algorithm}");
    }
}

#[test]
fn test_algorithms_produce_distinct_macs() {
    let macs: Vec<Vec<u8>> = HashAlgorithm::ALL
        .iter()
        .map(|algorithm| {
            algorithm
                .mac(b"key", b"message")
                .expect("HMAC accepts any key length")
        })
        .collect();
    for (i, a) in macs.iter().enumerate() {
        for b in &macs[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_any_key_length_is_accepted() {
    let long_key = vec![0xaa; 300];
    for key in [&[][..], &b"k"[..], &long_key[..]] {
        for algorithm in HashAlgorithm::ALL {
            let mac = algorithm
                .mac(key, b"message")
                .expect("HMAC accepts any key length");
            assert_eq!(mac.len(), algorithm.output_len(), "{algorithm}");
            assert_eq!(algorithm.verify(key, b"message", &mac), Ok(true));
        }
    }
}

#[test]
fn test_verify_rejects_wrong_inputs() {
    let mac = HashAlgorithm::Sha256
        .mac(b"key", b"message")
        .expect("HMAC accepts any key length");
    assert_eq!(HashAlgorithm::Sha256.verify(b"key", b"message", &mac), Ok(true));
    assert_eq!(HashAlgorithm::Sha256.verify(b"other", b"message", &mac), Ok(false));
    assert_eq!(HashAlgorithm::Sha256.verify(b"key", b"massage", &mac), Ok(false));
    assert_eq!(
        HashAlgorithm::Sha256.verify(b"key", b"message", &mac[..31]),
        Ok(false)
    );
    assert_eq!(HashAlgorithm::Sha256.verify(b"key", b"message", &[]), Ok(false));
    assert_eq!(HashAlgorithm::Sha3_256.verify(b"key", b"message", &mac), Ok(false));
}

#[test]
fn test_parse_is_case_insensitive() {
    let cases = [
        ("SHA256", HashAlgorithm::Sha256),
        ("sha256", HashAlgorithm::Sha256),
        ("Sha384", HashAlgorithm::Sha384),
        ("sha512/256", HashAlgorithm::Sha512_256),
        ("SHA512/224", HashAlgorithm::Sha512_224),
        ("sha3-512", HashAlgorithm::Sha3_512),
        ("SHA3-224", HashAlgorithm::Sha3_224),
    ];
    for (name, expected) in cases {
        assert_eq!(name.parse::<HashAlgorithm>(), Ok(expected), "{name}");
    }
}

#[test]
fn test_names_round_trip() {
    for algorithm in HashAlgorithm::ALL {
        assert_eq!(algorithm.name().parse::<HashAlgorithm>(), Ok(algorithm));
        assert_eq!(algorithm.to_string(), algorithm.name());
    }
}

#[test]
fn test_unknown_identifiers_are_rejected() {
    for name in ["", "HS256", "RS256", "md5", "sha-256", " SHA256", "SHA256 "] {
        assert_eq!(
            name.parse::<HashAlgorithm>(),
            Err(JwtError::UnsupportedAlgorithm(name.to_string())),
            "{name:?}"
        );
    }
}

#[test]
fn test_constant_time_eq() {
    assert!(constant_time_eq(b"", b""));
    assert!(constant_time_eq(b"abc", b"abc"));
    assert!(!constant_time_eq(b"abc", b"abd"));
    assert!(!constant_time_eq(b"abc", b"ab"));
    assert!(!constant_time_eq(b"", b"a"));
}
