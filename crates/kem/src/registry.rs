//! Algorithm registry
//!
//! Maps an [`AlgorithmId`] to its [`Scheme`] and performs the provider setup
//! that scheme needs the first time it is resolved.

use std::str::FromStr;

use kemgate_api::{AlgorithmId, Error, Result};
use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::config::KemConfig;
use crate::scheme::Scheme;

static GLOBAL: Lazy<AlgorithmRegistry> = Lazy::new(AlgorithmRegistry::new);

/// Resolves algorithms to schemes
#[derive(Debug)]
pub struct AlgorithmRegistry {
    schemes: Vec<Scheme>,
}

impl AlgorithmRegistry {
    /// Registry serving every algorithm with default parameters
    pub fn new() -> Self {
        Self {
            schemes: AlgorithmId::ALL
                .iter()
                .map(|&id| Scheme::for_algorithm(id, Default::default()))
                .collect(),
        }
    }

    /// Registry serving the algorithms enabled in `config`
    pub fn from_config(config: &KemConfig) -> Result<Self> {
        config.validate()?;

        let mut schemes: Vec<Scheme> = Vec::with_capacity(config.algorithms.len());
        for &id in &config.algorithms {
            if schemes.iter().all(|s| s.algorithm() != id) {
                schemes.push(Scheme::for_algorithm(id, config.rsa_kem));
            }
        }

        debug!(
            algorithms = ?config.algorithms,
            key_len = config.rsa_kem.key_len,
            digest = ?config.rsa_kem.digest,
            "built algorithm registry"
        );
        Ok(Self { schemes })
    }

    /// Process-wide registry with the default configuration
    pub fn global() -> &'static AlgorithmRegistry {
        &GLOBAL
    }

    /// Resolve `algorithm`, performing its provider setup on first use
    pub fn resolve(&self, algorithm: AlgorithmId) -> Result<&Scheme> {
        let scheme = self
            .schemes
            .iter()
            .find(|s| s.algorithm() == algorithm)
            .ok_or_else(|| Error::unsupported(algorithm.as_str()))?;

        scheme.prepare();
        trace!(algorithm = %algorithm, "resolved scheme");
        Ok(scheme)
    }

    /// Resolve an algorithm by name
    pub fn resolve_name(&self, name: &str) -> Result<&Scheme> {
        self.resolve(AlgorithmId::from_str(name)?)
    }

    /// Algorithms this registry serves
    pub fn algorithms(&self) -> Vec<AlgorithmId> {
        self.schemes.iter().map(Scheme::algorithm).collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}
