//! Algorithm schemes
//!
//! A scheme binds one [`AlgorithmId`] to a primitive implementing
//! [`kemgate_api::Kem`]. The variant is chosen before the primitive runs: a
//! primitive whose reported name differs from the scheme's tag is never
//! invoked, and a secret whose length differs from the one the primitive
//! advertises is discarded.

use kemgate_api::{AlgorithmId, EncapsulationResult, Error, Kem, Result, SharedSecret};
use once_cell::sync::OnceCell;
use pqcrypto_kyber::kyber768;
use rand::rngs::OsRng;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::config::RsaKemParams;
use crate::key::{PrivateKey, PublicKey};
use crate::kyber::PqcKyber768;
use crate::provider;
use crate::rsa_kem::RsaKem;

/// Kyber768 scheme over a Kyber768 primitive
///
/// The `pqcrypto` provider is installed the first time the scheme is
/// prepared or used, whether it was reached through a registry or directly.
#[derive(Debug, Clone, Default)]
pub struct Kyber768Scheme<K = PqcKyber768> {
    primitive: K,
    ready: OnceCell<()>,
}

impl Kyber768Scheme {
    /// Scheme over the pqcrypto primitive
    pub fn new() -> Self {
        Self::default()
    }
}

impl<K> Kyber768Scheme<K>
where
    K: Kem<PublicKey = kyber768::PublicKey, SecretKey = kyber768::SecretKey>,
{
    pub const ALGORITHM: AlgorithmId = AlgorithmId::Kyber768;

    /// Scheme over a specific primitive
    pub fn with_primitive(primitive: K) -> Self {
        Self {
            primitive,
            ready: OnceCell::new(),
        }
    }

    /// Install the provider this scheme depends on, once per scheme
    pub fn prepare(&self) {
        self.ready.get_or_init(|| {
            // Another scheme or registry may already have installed it
            if provider::get(provider::PQCRYPTO.name()).is_none() {
                provider::install(&provider::PQCRYPTO);
            }
        });
    }

    pub fn encapsulate(&self, public_key: &PublicKey) -> Result<EncapsulationResult> {
        let PublicKey::Kyber768(pk) = public_key else {
            return Err(key_mismatch(Self::ALGORITHM, public_key.algorithm()));
        };
        check_tag(Self::ALGORITHM, self.primitive.name())?;
        self.prepare();

        let (ciphertext, secret) = self
            .primitive
            .encapsulate(&mut OsRng, pk)
            .map_err(|e| encapsulation_failure(Self::ALGORITHM, e))?;
        check_encapsulated_len(Self::ALGORITHM, &secret, self.primitive.shared_secret_len())?;

        Ok(EncapsulationResult::new(Self::ALGORITHM, secret, ciphertext))
    }

    pub fn decapsulate(&self, private_key: &PrivateKey, ciphertext: &[u8]) -> Result<SharedSecret> {
        let PrivateKey::Kyber768(sk) = private_key else {
            return Err(key_mismatch(Self::ALGORITHM, private_key.algorithm()));
        };
        check_tag(Self::ALGORITHM, self.primitive.name())?;
        self.prepare();

        let secret = self
            .primitive
            .decapsulate(sk, ciphertext)
            .map_err(|_| decapsulation_failure(Self::ALGORITHM))?;
        check_decapsulated_len(Self::ALGORITHM, secret, self.primitive.shared_secret_len())
    }
}

/// RSA-KEM scheme over an RSA-KEM primitive
#[derive(Debug, Clone, Default)]
pub struct RsaKemScheme<K = RsaKem> {
    primitive: K,
}

impl RsaKemScheme {
    /// Scheme over the `rsa` primitive with the given derivation parameters
    pub fn new(params: RsaKemParams) -> Self {
        Self::with_primitive(RsaKem::new(params))
    }
}

impl<K> RsaKemScheme<K>
where
    K: Kem<PublicKey = RsaPublicKey, SecretKey = RsaPrivateKey>,
{
    pub const ALGORITHM: AlgorithmId = AlgorithmId::RsaKem;

    /// Scheme over a specific primitive
    pub fn with_primitive(primitive: K) -> Self {
        Self { primitive }
    }

    pub fn encapsulate(&self, public_key: &PublicKey) -> Result<EncapsulationResult> {
        let PublicKey::Rsa(pk) = public_key else {
            return Err(key_mismatch(Self::ALGORITHM, public_key.algorithm()));
        };
        check_tag(Self::ALGORITHM, self.primitive.name())?;

        let (ciphertext, secret) = self
            .primitive
            .encapsulate(&mut OsRng, pk)
            .map_err(|e| encapsulation_failure(Self::ALGORITHM, e))?;
        check_encapsulated_len(Self::ALGORITHM, &secret, self.primitive.shared_secret_len())?;

        Ok(EncapsulationResult::new(Self::ALGORITHM, secret, ciphertext))
    }

    pub fn decapsulate(&self, private_key: &PrivateKey, ciphertext: &[u8]) -> Result<SharedSecret> {
        let PrivateKey::Rsa(sk) = private_key else {
            return Err(key_mismatch(Self::ALGORITHM, private_key.algorithm()));
        };
        check_tag(Self::ALGORITHM, self.primitive.name())?;

        let secret = self
            .primitive
            .decapsulate(sk, ciphertext)
            .map_err(|_| decapsulation_failure(Self::ALGORITHM))?;
        check_decapsulated_len(Self::ALGORITHM, secret, self.primitive.shared_secret_len())
    }
}

/// A resolved scheme, dispatched by algorithm
#[derive(Debug, Clone)]
pub enum Scheme {
    Kyber768(Kyber768Scheme),
    RsaKem(RsaKemScheme),
}

impl Scheme {
    /// Build the scheme for `algorithm`
    pub fn for_algorithm(algorithm: AlgorithmId, rsa_params: RsaKemParams) -> Self {
        match algorithm {
            AlgorithmId::Kyber768 => Self::Kyber768(Kyber768Scheme::new()),
            AlgorithmId::RsaKem => Self::RsaKem(RsaKemScheme::new(rsa_params)),
        }
    }

    pub fn algorithm(&self) -> AlgorithmId {
        match self {
            Self::Kyber768(_) => AlgorithmId::Kyber768,
            Self::RsaKem(_) => AlgorithmId::RsaKem,
        }
    }

    /// Perform the scheme's one-time provider setup, if it has any
    pub fn prepare(&self) {
        match self {
            Self::Kyber768(scheme) => scheme.prepare(),
            Self::RsaKem(_) => {}
        }
    }

    pub fn encapsulate(&self, public_key: &PublicKey) -> Result<EncapsulationResult> {
        match self {
            Self::Kyber768(scheme) => scheme.encapsulate(public_key),
            Self::RsaKem(scheme) => scheme.encapsulate(public_key),
        }
    }

    pub fn decapsulate(&self, private_key: &PrivateKey, ciphertext: &[u8]) -> Result<SharedSecret> {
        match self {
            Self::Kyber768(scheme) => scheme.decapsulate(private_key, ciphertext),
            Self::RsaKem(scheme) => scheme.decapsulate(private_key, ciphertext),
        }
    }
}

fn key_mismatch(expected: AlgorithmId, actual: AlgorithmId) -> Error {
    Error::KeyAlgorithmMismatch { expected, actual }
}

fn encapsulation_failure(algorithm: AlgorithmId, err: impl std::error::Error) -> Error {
    Error::EncapsulationFailure {
        algorithm,
        message: err.to_string(),
    }
}

// The provider's reason is dropped so that every decapsulation failure has
// the same shape.
fn decapsulation_failure(algorithm: AlgorithmId) -> Error {
    Error::DecapsulationFailure { algorithm }
}

/// Refuse to run a primitive whose reported algorithm differs from the scheme's
fn check_tag(expected: AlgorithmId, reported: &str) -> Result<()> {
    if reported != expected.as_str() {
        return Err(Error::AlgorithmMismatch {
            expected,
            actual: reported.to_string(),
        });
    }
    Ok(())
}

fn check_encapsulated_len(
    algorithm: AlgorithmId,
    secret: &SharedSecret,
    expected: usize,
) -> Result<()> {
    if secret.len() != expected {
        return Err(Error::EncapsulationFailure {
            algorithm,
            message: format!(
                "provider produced a {}-byte secret, expected {expected}",
                secret.len()
            ),
        });
    }
    Ok(())
}

fn check_decapsulated_len(
    algorithm: AlgorithmId,
    secret: SharedSecret,
    expected: usize,
) -> Result<SharedSecret> {
    if secret.len() != expected {
        return Err(decapsulation_failure(algorithm));
    }
    Ok(secret)
}
