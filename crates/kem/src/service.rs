//! Public KEM facade
//!
//! [`KemService`] is the entry point for callers: it resolves the requested
//! algorithm, checks the key was generated for it, and delegates to the
//! resolved scheme. Failures are returned unchanged; nothing is retried.

use std::str::FromStr;

use kemgate_api::{AlgorithmId, EncapsulationResult, Error, Result, SharedSecret};
use tracing::trace;

use crate::key::{PrivateKey, PublicKey};
use crate::registry::AlgorithmRegistry;

/// Encapsulation and decapsulation over an [`AlgorithmRegistry`]
#[derive(Debug, Clone, Copy)]
pub struct KemService<'r> {
    registry: &'r AlgorithmRegistry,
}

impl KemService<'static> {
    /// Service over the process-wide registry
    pub fn new() -> Self {
        Self::with_registry(AlgorithmRegistry::global())
    }
}

impl Default for KemService<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> KemService<'r> {
    /// Service over a caller-supplied registry
    pub fn with_registry(registry: &'r AlgorithmRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'r AlgorithmRegistry {
        self.registry
    }

    /// Produce a fresh shared secret and its ciphertext under `public_key`
    pub fn encapsulate(
        &self,
        algorithm: AlgorithmId,
        public_key: &PublicKey,
    ) -> Result<EncapsulationResult> {
        let scheme = self.registry.resolve(algorithm)?;
        check_key(algorithm, public_key.algorithm())?;

        trace!(algorithm = %algorithm, "encapsulate");
        scheme.encapsulate(public_key)
    }

    /// Recover the shared secret carried by `ciphertext`
    pub fn decapsulate(
        &self,
        algorithm: AlgorithmId,
        ciphertext: &[u8],
        private_key: &PrivateKey,
    ) -> Result<SharedSecret> {
        let scheme = self.registry.resolve(algorithm)?;
        check_key(algorithm, private_key.algorithm())?;

        trace!(algorithm = %algorithm, ciphertext_len = ciphertext.len(), "decapsulate");
        scheme.decapsulate(private_key, ciphertext)
    }

    /// [`encapsulate`](Self::encapsulate) with the algorithm given by name
    pub fn encapsulate_named(
        &self,
        algorithm: &str,
        public_key: &PublicKey,
    ) -> Result<EncapsulationResult> {
        self.encapsulate(AlgorithmId::from_str(algorithm)?, public_key)
    }

    /// [`decapsulate`](Self::decapsulate) with the algorithm given by name
    pub fn decapsulate_named(
        &self,
        algorithm: &str,
        ciphertext: &[u8],
        private_key: &PrivateKey,
    ) -> Result<SharedSecret> {
        self.decapsulate(AlgorithmId::from_str(algorithm)?, ciphertext, private_key)
    }
}

fn check_key(expected: AlgorithmId, actual: AlgorithmId) -> Result<()> {
    if expected != actual {
        return Err(Error::KeyAlgorithmMismatch { expected, actual });
    }
    Ok(())
}
