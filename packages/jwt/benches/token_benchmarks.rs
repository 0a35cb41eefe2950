//! Benchmarks for signing and verifying tokens

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use easyjwt::{HashAlgorithm, Jwt, JwtEngine};
use serde_json::{Map, Value, json};

fn claims_of_size(entries: usize) -> Map<String, Value> {
    (0..entries)
        .map(|i| (format!("claim_{i}"), json!(format!("value-{i}"))))
        .collect()
}

fn signer(algorithm: HashAlgorithm) -> JwtEngine {
    Jwt::builder()
        .with_secret(b"benchmark-secret-key")
        .with_algorithm(algorithm.name())
        .build()
}

/// Sign claim sets of growing size with each algorithm family's representative
fn benchmark_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("jwt_sign");

    for entries in [4, 64, 1024] {
        let claims = claims_of_size(entries);
        group.throughput(Throughput::Elements(entries as u64));

        for algorithm in [
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha512,
            HashAlgorithm::Sha3_256,
        ] {
            let mut engine = signer(algorithm);
            engine.set_claims(claims.clone());
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), entries),
                &entries,
                |b, _| {
                    b.iter(|| {
                        engine.sign().expect("signing should succeed");
                        std::hint::black_box(engine.token());
                    });
                },
            );
        }
    }
    group.finish();
}

/// Verify valid and tampered tokens
fn benchmark_load(c: &mut Criterion) {
    let mut group = c.benchmark_group("jwt_load");

    let mut engine = signer(HashAlgorithm::Sha256);
    engine.set_claims(claims_of_size(64));
    engine.sign().expect("signing should succeed");
    let token = engine.token().unwrap_or_default().to_string();
    let tampered = format!("{}A", token.trim_end_matches(','));

    group.bench_function("valid", |b| {
        let mut verifier = signer(HashAlgorithm::Sha256);
        b.iter(|| {
            verifier.load(&token).expect("load should succeed");
            std::hint::black_box(verifier.is_valid());
        });
    });

    group.bench_function("tampered", |b| {
        let mut verifier = signer(HashAlgorithm::Sha256);
        b.iter(|| {
            verifier.load(&tampered).expect("load should succeed");
            std::hint::black_box(verifier.is_valid());
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_sign, benchmark_load);
criterion_main!(benches);
