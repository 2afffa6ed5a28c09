//! Key Encapsulation Mechanisms (KEM)
//!
//! This crate provides the post-quantum Kyber768 KEM and the classical
//! RSA-KEM construction behind one façade. Callers hand a [`KemService`] an
//! algorithm identifier and a tagged key handle; the service resolves the
//! scheme through an [`AlgorithmRegistry`], which performs any provider setup
//! the scheme needs exactly once per process.
//!
//! ```no_run
//! use kemgate_kem::{kyber, AlgorithmId, KemService, PrivateKey, PublicKey};
//!
//! let (pk, sk) = kyber::keypair();
//! let (pk, sk) = (PublicKey::from(pk), PrivateKey::from(sk));
//!
//! let service = KemService::new();
//! let sent = service.encapsulate(AlgorithmId::Kyber768, &pk)?;
//! let received = service.decapsulate(AlgorithmId::Kyber768, sent.ciphertext().as_ref(), &sk)?;
//! assert_eq!(&received, sent.secret());
//! # Ok::<(), kemgate_kem::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod key;
pub mod kyber;
pub mod provider;
pub mod registry;
pub mod rsa_kem;
pub mod scheme;
pub mod service;

// Re-exports
pub use config::{KemConfig, RsaKemParams};
pub use key::{PrivateKey, PublicKey};
pub use kyber::PqcKyber768;
pub use registry::AlgorithmRegistry;
pub use rsa_kem::{KdfDigest, RsaKem, RsaPrivateKey, RsaPublicKey};
pub use scheme::{Kyber768Scheme, RsaKemScheme, Scheme};
pub use service::KemService;

pub use kemgate_api::{AlgorithmId, Ciphertext, EncapsulationResult, Error, Result, SharedSecret};
