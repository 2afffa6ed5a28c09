//! Shared fixtures for the kemgate integration tests
//!
//! Key generation is slow for RSA, so every key pair is generated once per
//! test binary and handed out as fresh handles.

use kemgate_kem::{KemConfig, PrivateKey, PublicKey};
use kemgate_params::traditional::rsa::RSA_PUBLIC_EXPONENT;
use once_cell::sync::Lazy;
use pqcrypto_kyber::kyber768;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use rsa::{BigUint, RsaPrivateKey};

/// Modulus size used for RSA fixtures
pub const RSA_FIXTURE_BITS: usize = 2048;

/// Registry configuration that enables only RSA-KEM
pub const RSA_ONLY_CONFIG: &str = include_str!("../fixtures/rsa_only.toml");

static KYBER_KEYS: Lazy<(kyber768::PublicKey, kyber768::SecretKey)> = Lazy::new(kyber768::keypair);

static OTHER_KYBER_KEYS: Lazy<(kyber768::PublicKey, kyber768::SecretKey)> =
    Lazy::new(kyber768::keypair);

static RSA_KEY: Lazy<RsaPrivateKey> = Lazy::new(|| rsa_private_key(42));

fn rsa_private_key(seed: u64) -> RsaPrivateKey {
    let mut rng = ChaChaRng::seed_from_u64(seed);
    let exp = BigUint::from(RSA_PUBLIC_EXPONENT);
    match RsaPrivateKey::new_with_exp(&mut rng, RSA_FIXTURE_BITS, &exp) {
        Ok(key) => key,
        Err(e) => panic!("RSA fixture generation failed: {e}"),
    }
}

/// Kyber768 key pair shared by the tests
pub fn kyber_keys() -> (PublicKey, PrivateKey) {
    let (pk, sk) = &*KYBER_KEYS;
    (PublicKey::from(pk.clone()), PrivateKey::from(sk.clone()))
}

/// A second, unrelated Kyber768 key pair
pub fn other_kyber_keys() -> (PublicKey, PrivateKey) {
    let (pk, sk) = &*OTHER_KYBER_KEYS;
    (PublicKey::from(pk.clone()), PrivateKey::from(sk.clone()))
}

/// RSA key pair shared by the tests
pub fn rsa_keys() -> (PublicKey, PrivateKey) {
    let sk = RSA_KEY.clone();
    (PublicKey::from(sk.to_public_key()), PrivateKey::from(sk))
}

/// Parse [`RSA_ONLY_CONFIG`]
pub fn rsa_only_config() -> KemConfig {
    match KemConfig::from_toml_str(RSA_ONLY_CONFIG) {
        Ok(config) => config,
        Err(e) => panic!("invalid fixture config: {e}"),
    }
}
