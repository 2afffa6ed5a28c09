//! Error handling for KEM primitives
//!
//! These errors describe what went wrong inside a provider. They stay inside
//! the crate's primitive layer; the schemes translate them into
//! [`kemgate_api::Error`] so that callers only ever see the public taxonomy.

use kemgate_api::error::Error as CoreError;
use thiserror::Error as ThisError;

/// Error type for KEM primitive operations
#[derive(Debug, ThisError)]
pub enum Error {
    /// Error reported by the pqcrypto provider
    #[error("pqcrypto error: {0}")]
    Pqcrypto(#[from] pqcrypto_traits::Error),

    /// Error reported by the RSA provider
    #[error("RSA error: {0}")]
    Rsa(#[from] ::rsa::Error),

    /// Validation failure from the shared helpers
    #[error(transparent)]
    Validation(#[from] CoreError),

    /// Invalid key format
    #[error("invalid {key_type} key: {reason}")]
    InvalidKey {
        key_type: &'static str,
        reason: &'static str,
    },

    /// Invalid ciphertext format
    #[error("invalid {algorithm} ciphertext: {reason}")]
    InvalidCiphertext {
        algorithm: &'static str,
        reason: &'static str,
    },
}

/// Result type for KEM primitive operations
pub type Result<T> = core::result::Result<T, Error>;
