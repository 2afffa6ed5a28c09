//! Integration tests for the KEM facade

use std::sync::{Arc, Barrier};
use std::thread;

use kemgate_api::{AlgorithmId, Error};
use kemgate_kem::{provider, AlgorithmRegistry, KemService};
use kemgate_tests::{kyber_keys, other_kyber_keys, rsa_keys, rsa_only_config};

const CONCURRENT_CALLERS: usize = 16;

#[test]
fn test_kyber768_round_trip() {
    let (pk, sk) = kyber_keys();
    let service = KemService::new();

    let result = service.encapsulate(AlgorithmId::Kyber768, &pk).unwrap();
    assert_eq!(result.algorithm(), AlgorithmId::Kyber768);
    assert_eq!(result.secret().len(), 32);
    assert_eq!(result.ciphertext().len(), 1088);

    let secret = service
        .decapsulate(AlgorithmId::Kyber768, result.ciphertext().as_ref(), &sk)
        .unwrap();
    assert_eq!(secret.as_ref(), result.secret().as_ref());
}

#[test]
fn test_rsa_kem_round_trip() {
    let (pk, sk) = rsa_keys();
    let service = KemService::new();

    let result = service.encapsulate(AlgorithmId::RsaKem, &pk).unwrap();
    assert_eq!(result.algorithm(), AlgorithmId::RsaKem);
    assert_eq!(result.secret().len(), 32);
    assert_eq!(result.ciphertext().len(), 256);

    let secret = service
        .decapsulate(AlgorithmId::RsaKem, result.ciphertext().as_ref(), &sk)
        .unwrap();
    assert_eq!(secret, *result.secret());
}

#[test]
fn test_encapsulations_are_fresh() {
    let service = KemService::new();

    for (algorithm, (pk, _)) in [
        (AlgorithmId::Kyber768, kyber_keys()),
        (AlgorithmId::RsaKem, rsa_keys()),
    ] {
        let first = service.encapsulate(algorithm, &pk).unwrap();
        let second = service.encapsulate(algorithm, &pk).unwrap();
        assert_ne!(first.secret(), second.secret(), "{algorithm}");
        assert_ne!(first.ciphertext(), second.ciphertext(), "{algorithm}");
    }
}

#[test]
fn test_cross_algorithm_keys_rejected() {
    let service = KemService::new();
    let (kyber_pk, kyber_sk) = kyber_keys();
    let (rsa_pk, rsa_sk) = rsa_keys();

    let err = service.encapsulate(AlgorithmId::Kyber768, &rsa_pk).unwrap_err();
    assert_eq!(
        err,
        Error::KeyAlgorithmMismatch {
            expected: AlgorithmId::Kyber768,
            actual: AlgorithmId::RsaKem,
        }
    );

    let err = service.encapsulate(AlgorithmId::RsaKem, &kyber_pk).unwrap_err();
    assert_eq!(
        err,
        Error::KeyAlgorithmMismatch {
            expected: AlgorithmId::RsaKem,
            actual: AlgorithmId::Kyber768,
        }
    );

    let kyber_ct = service.encapsulate(AlgorithmId::Kyber768, &kyber_pk).unwrap();
    let err = service
        .decapsulate(AlgorithmId::Kyber768, kyber_ct.ciphertext().as_ref(), &rsa_sk)
        .unwrap_err();
    assert!(matches!(err, Error::KeyAlgorithmMismatch { .. }));

    let rsa_ct = service.encapsulate(AlgorithmId::RsaKem, &rsa_pk).unwrap();
    let err = service
        .decapsulate(AlgorithmId::RsaKem, rsa_ct.ciphertext().as_ref(), &kyber_sk)
        .unwrap_err();
    assert!(matches!(err, Error::KeyAlgorithmMismatch { .. }));
}

#[test]
fn test_truncated_ciphertext_fails() {
    let service = KemService::new();

    for (algorithm, (pk, sk)) in [
        (AlgorithmId::Kyber768, kyber_keys()),
        (AlgorithmId::RsaKem, rsa_keys()),
    ] {
        let result = service.encapsulate(algorithm, &pk).unwrap();
        let ct = result.ciphertext().as_ref();

        for truncated in [&ct[..ct.len() - 1], &ct[..ct.len() / 2], &[][..]] {
            let err = service.decapsulate(algorithm, truncated, &sk).unwrap_err();
            assert_eq!(err, Error::DecapsulationFailure { algorithm });
        }
    }
}

#[test]
fn test_oversized_rsa_ciphertext_fails() {
    let (_, sk) = rsa_keys();
    let service = KemService::new();

    // Right length, but the integer is not below the modulus
    let err = service
        .decapsulate(AlgorithmId::RsaKem, &[0xFF; 256], &sk)
        .unwrap_err();
    assert_eq!(
        err,
        Error::DecapsulationFailure {
            algorithm: AlgorithmId::RsaKem
        }
    );
}

#[test]
fn test_corrupted_kyber_ciphertext_never_yields_secret() {
    let (pk, sk) = kyber_keys();
    let service = KemService::new();

    let result = service.encapsulate(AlgorithmId::Kyber768, &pk).unwrap();
    let mut corrupted = result.ciphertext().clone().into_vec();
    corrupted[0] ^= 0x01;

    match service.decapsulate(AlgorithmId::Kyber768, &corrupted, &sk) {
        Ok(secret) => assert_ne!(&secret, result.secret()),
        Err(err) => assert!(matches!(err, Error::DecapsulationFailure { .. })),
    }
}

#[test]
fn test_wrong_kyber_private_key_never_yields_secret() {
    let (pk, _) = kyber_keys();
    let (_, other_sk) = other_kyber_keys();
    let service = KemService::new();

    let result = service.encapsulate(AlgorithmId::Kyber768, &pk).unwrap();
    match service.decapsulate(AlgorithmId::Kyber768, result.ciphertext().as_ref(), &other_sk) {
        Ok(secret) => assert_ne!(&secret, result.secret()),
        Err(err) => assert!(matches!(err, Error::DecapsulationFailure { .. })),
    }
}

#[test]
fn test_concurrent_first_use_registers_once() {
    let barrier = Arc::new(Barrier::new(CONCURRENT_CALLERS));

    let handles: Vec<_> = (0..CONCURRENT_CALLERS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let (pk, _) = kyber_keys();
                barrier.wait();
                KemService::new()
                    .encapsulate(AlgorithmId::Kyber768, &pk)
                    .map(|result| result.algorithm())
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(AlgorithmId::Kyber768));
    }

    assert_eq!(provider::registrations(), 1);
    assert_eq!(provider::installed(), vec!["pqcrypto"]);
}

#[test]
fn test_unknown_algorithm_name() {
    let (pk, sk) = kyber_keys();
    let service = KemService::new();

    let err = service
        .encapsulate_named("not-a-real-algorithm", &pk)
        .unwrap_err();
    assert_eq!(err, Error::unsupported("not-a-real-algorithm"));
    assert!(err.is_caller_error());

    let err = service
        .decapsulate_named("not-a-real-algorithm", &[0u8; 1088], &sk)
        .unwrap_err();
    assert!(matches!(err, Error::UnsupportedAlgorithm { .. }));
}

#[test]
fn test_disabled_algorithm_unsupported() {
    let registry = AlgorithmRegistry::from_config(&rsa_only_config()).unwrap();
    let service = KemService::with_registry(&registry);

    let (kyber_pk, _) = kyber_keys();
    let err = service.encapsulate(AlgorithmId::Kyber768, &kyber_pk).unwrap_err();
    assert!(matches!(err, Error::UnsupportedAlgorithm { .. }));

    // The enabled algorithm uses the configured derivation
    let (rsa_pk, rsa_sk) = rsa_keys();
    let result = service.encapsulate(AlgorithmId::RsaKem, &rsa_pk).unwrap();
    assert_eq!(result.secret().len(), 48);

    let secret = service
        .decapsulate(AlgorithmId::RsaKem, result.ciphertext().as_ref(), &rsa_sk)
        .unwrap();
    assert_eq!(&secret, result.secret());
}

#[test]
fn test_registries_disagree_on_rsa_derivation() {
    let configured = AlgorithmRegistry::from_config(&rsa_only_config()).unwrap();
    let (pk, sk) = rsa_keys();

    let result = KemService::with_registry(&configured)
        .encapsulate(AlgorithmId::RsaKem, &pk)
        .unwrap();
    let default_secret = KemService::new()
        .decapsulate(AlgorithmId::RsaKem, result.ciphertext().as_ref(), &sk)
        .unwrap();

    assert_eq!(default_secret.len(), 32);
    assert_ne!(default_secret.as_ref(), &result.secret().as_ref()[..32]);
}
