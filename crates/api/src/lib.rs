//! Public API traits and types for the kemgate library
//!
//! This crate provides the public API surface shared by the kemgate crates:
//! the primitive-level [`Kem`] trait, algorithm identifiers, the secret and
//! ciphertext containers handed back to callers, and the error taxonomy.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::Kem;
pub use types::{AlgorithmId, Ciphertext, EncapsulationResult, SharedSecret};
