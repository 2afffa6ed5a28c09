// kem/src/kyber/kyber768.rs

//! Kyber-768 KEM (NIST PQC Security Level 3).

use kemgate_api::error::validation;
use kemgate_api::{Ciphertext, Kem, SharedSecret};
use kemgate_params::pqc::kyber::KYBER768;
use pqcrypto_kyber::kyber768;
use pqcrypto_traits::kem::{Ciphertext as _, SharedSecret as _};
use rand::{CryptoRng, RngCore};

use crate::error::Result;

/// Kyber-768 backed by the `pqcrypto-kyber` provider
#[derive(Debug, Clone, Copy, Default)]
pub struct PqcKyber768;

impl Kem for PqcKyber768 {
    type PublicKey = kyber768::PublicKey;
    type SecretKey = kyber768::SecretKey;
    type Error = crate::error::Error;

    fn name(&self) -> &'static str {
        KYBER768.name
    }

    fn shared_secret_len(&self) -> usize {
        KYBER768.shared_secret_size
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        _rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Ciphertext, SharedSecret)> {
        // pqcrypto draws its coins from the operating system RNG
        let (ss, ct) = kyber768::encapsulate(public_key);
        Ok((
            Ciphertext::new(ct.as_bytes().to_vec()),
            SharedSecret::from_slice(ss.as_bytes()),
        ))
    }

    fn decapsulate(
        &self,
        secret_key: &Self::SecretKey,
        ciphertext: &[u8],
    ) -> Result<SharedSecret> {
        validation::length("Kyber768 ciphertext", ciphertext.len(), KYBER768.ciphertext_size)?;
        let ct = kyber768::Ciphertext::from_bytes(ciphertext)?;

        // Implicit rejection: a tampered ciphertext of the right size yields an
        // unrelated secret rather than an error.
        let ss = kyber768::decapsulate(&ct, secret_key);
        Ok(SharedSecret::from_slice(ss.as_bytes()))
    }
}
