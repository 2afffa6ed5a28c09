//! # kemgate
//!
//! Key encapsulation over Kyber768 and RSA-KEM.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! kemgate = "0.1"
//! ```
//!
//! ## Features
//!
//! - `serde` (default): TOML configuration for algorithm registries
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`kemgate-api`]: Public types, the `Kem` trait and the error taxonomy
//! - [`kemgate-params`]: Algorithm constants
//! - [`kemgate-kem`]: Schemes, the algorithm registry and the `KemService` facade

pub use kemgate_api as api;
pub use kemgate_kem as kem;
pub use kemgate_params as params;

/// Common imports for kemgate users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core trait and types
    pub use crate::api::{AlgorithmId, Ciphertext, EncapsulationResult, Kem, SharedSecret};

    // Re-export the facade
    pub use crate::kem::{AlgorithmRegistry, KemConfig, KemService, PrivateKey, PublicKey};
}
