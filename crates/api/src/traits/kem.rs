// File: crates/api/src/traits/kem.rs

//! Trait definition for Key Encapsulation Mechanism primitives
//!
//! This is the contract between the scheme layer and a concrete provider. A
//! provider works on its own key types and reports its own errors; the scheme
//! layer above is responsible for algorithm tagging and for turning provider
//! errors into the public [`Error`](crate::Error) taxonomy.

use crate::types::{Ciphertext, SharedSecret};
use rand::{CryptoRng, RngCore};

/// Trait for a Key Encapsulation Mechanism primitive.
///
/// Implementations are stateless apart from immutable parameters and must be
/// callable from several threads at once.
pub trait Kem: Send + Sync {
    /// Public key type accepted by [`Kem::encapsulate`]
    type PublicKey;

    /// Secret key type accepted by [`Kem::decapsulate`]
    type SecretKey;

    /// Provider-level error
    type Error: std::error::Error + Send + Sync + 'static;

    /// Algorithm name as reported by the provider.
    ///
    /// Callers compare this against the algorithm they selected before
    /// invoking the primitive.
    fn name(&self) -> &'static str;

    /// Length in bytes of the shared secrets this primitive produces.
    ///
    /// A secret of any other length is discarded by the caller.
    fn shared_secret_len(&self) -> usize;

    /// Encapsulate a fresh shared secret to `public_key`.
    ///
    /// # Security Requirements
    /// - Must use fresh randomness for every call.
    /// - Must validate the public key internally.
    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Ciphertext, SharedSecret), Self::Error>;

    /// Recover the shared secret from `ciphertext` using `secret_key`.
    ///
    /// # Security Requirements
    /// - Must not reveal why a ciphertext was rejected.
    /// - Must wipe intermediate values on every exit path.
    fn decapsulate(
        &self,
        secret_key: &Self::SecretKey,
        ciphertext: &[u8],
    ) -> Result<SharedSecret, Self::Error>;
}
