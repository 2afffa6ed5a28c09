//! Configuration for algorithm registries
//!
//! A [`KemConfig`] decides which algorithms a registry serves and how RSA-KEM
//! derives its secrets. With the `serde` feature it can be read from TOML:
//!
//! ```toml
//! algorithms = ["Kyber768", "RSA"]
//!
//! [rsa_kem]
//! key_len = 32
//! digest = "sha256"
//! ```

use kemgate_api::error::validation;
use kemgate_api::{AlgorithmId, Result};
use kemgate_params::traditional::rsa::{RSA_KEM_DEFAULT_KEY_LEN, RSA_KEM_MAX_KEY_LEN};

use crate::rsa_kem::KdfDigest;

/// Registry configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct KemConfig {
    /// Algorithms the registry resolves; anything else is unsupported
    pub algorithms: Vec<AlgorithmId>,
    /// RSA-KEM derivation parameters
    pub rsa_kem: RsaKemParams,
}

impl Default for KemConfig {
    fn default() -> Self {
        Self {
            algorithms: AlgorithmId::ALL.to_vec(),
            rsa_kem: RsaKemParams::default(),
        }
    }
}

impl KemConfig {
    /// Check the configuration for values no registry can serve
    pub fn validate(&self) -> Result<()> {
        validation::parameter(
            !self.algorithms.is_empty(),
            "KemConfig",
            "at least one algorithm must be enabled",
        )?;
        self.rsa_kem.validate()
    }

    /// Parse and validate a TOML document
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| kemgate_api::Error::InvalidParameter {
            context: "KemConfig",
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// RSA-KEM key derivation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RsaKemParams {
    /// Length of the derived shared secret in bytes
    pub key_len: usize,
    /// Digest used by KDF2
    pub digest: KdfDigest,
}

impl Default for RsaKemParams {
    fn default() -> Self {
        Self {
            key_len: RSA_KEM_DEFAULT_KEY_LEN,
            digest: KdfDigest::default(),
        }
    }
}

impl RsaKemParams {
    /// Check the derivation parameters
    pub fn validate(&self) -> Result<()> {
        validation::parameter(self.key_len > 0, "RsaKemParams", "key_len must be non-zero")?;
        validation::max_length("RsaKemParams.key_len", self.key_len, RSA_KEM_MAX_KEY_LEN)
    }
}
