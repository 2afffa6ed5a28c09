// crates/kem/benches/kem.rs

//! Benchmarks for the KEM facade

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kemgate_kem::{kyber, AlgorithmId, KemService, PrivateKey, PublicKey, RsaPrivateKey};
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn bench_algorithm(c: &mut Criterion, algorithm: AlgorithmId, pk: PublicKey, sk: PrivateKey) {
    let mut group = c.benchmark_group(algorithm.as_str());
    let service = KemService::new();

    // Benchmark encapsulation
    group.bench_function("encapsulate", |b| {
        b.iter(|| service.encapsulate(algorithm, black_box(&pk)).unwrap());
    });

    // Setup for decapsulation benchmark
    let result = service.encapsulate(algorithm, &pk).unwrap();

    // Benchmark decapsulation
    group.bench_function("decapsulate", |b| {
        b.iter(|| {
            service
                .decapsulate(algorithm, black_box(result.ciphertext().as_ref()), black_box(&sk))
                .unwrap()
        });
    });

    group.finish();
}

/// Benchmark Kyber-768 operations
fn bench_kyber768(c: &mut Criterion) {
    let (pk, sk) = kyber::keypair();
    bench_algorithm(c, AlgorithmId::Kyber768, pk.into(), sk.into());
}

/// Benchmark RSA-KEM operations with a 2048-bit modulus
fn bench_rsa_kem(c: &mut Criterion) {
    let mut rng = ChaChaRng::seed_from_u64(42);
    let sk = RsaPrivateKey::new(&mut rng, 2048).unwrap();
    bench_algorithm(c, AlgorithmId::RsaKem, sk.to_public_key().into(), sk.into());
}

criterion_group!(benches, bench_kyber768, bench_rsa_kem);
criterion_main!(benches);
