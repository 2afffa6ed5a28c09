//! Error type definitions for KEM operations

use crate::types::AlgorithmId;
use thiserror::Error as ThisError;

/// Primary error type for key encapsulation operations
///
/// Every variant is terminal: the operations behind these errors are
/// deterministic in their inputs, so retrying with the same inputs cannot
/// succeed.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The requested algorithm has no registered scheme
    #[error("unsupported algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    /// The supplied key was generated for a different algorithm
    #[error("key algorithm mismatch: operation requires {expected}, key is for {actual}")]
    KeyAlgorithmMismatch {
        expected: AlgorithmId,
        actual: AlgorithmId,
    },

    /// The provider reported an unexpected algorithm for its output
    #[error("algorithm mismatch: expected {expected}, provider reported {actual}")]
    AlgorithmMismatch {
        expected: AlgorithmId,
        actual: String,
    },

    /// Decapsulation did not produce a secret.
    ///
    /// Carries no reason on purpose; malformed ciphertexts and incompatible
    /// keys fail with the same shape.
    #[error("decapsulation failed for {algorithm}")]
    DecapsulationFailure { algorithm: AlgorithmId },

    /// The provider rejected the public key or failed to encapsulate
    #[error("encapsulation failed for {algorithm}: {message}")]
    EncapsulationFailure {
        algorithm: AlgorithmId,
        message: String,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// Result type for KEM operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Returns true when the failure was caused by the caller's choice of
    /// algorithm or key rather than by the inputs' content or the provider.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedAlgorithm { .. } | Self::KeyAlgorithmMismatch { .. }
        )
    }

    /// Shorthand for an [`Error::UnsupportedAlgorithm`] naming `algorithm`
    pub fn unsupported(algorithm: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm {
            algorithm: algorithm.into(),
        }
    }
}
