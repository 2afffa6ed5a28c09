// kem/src/kyber/mod.rs

//! Kyber Key Encapsulation Mechanism (KEM).
//!
//! Kyber is a lattice-based key encapsulation mechanism selected for
//! standardization by NIST. It provides IND-CCA2 security. The arithmetic is
//! supplied by the `pqcrypto-kyber` provider; this module adapts it to
//! [`kemgate_api::Kem`].

mod kyber768;

pub use self::kyber768::PqcKyber768;

// Provider key types, re-exported so key-management code can name them.
pub use pqcrypto_kyber::kyber768::{
    keypair, PublicKey as Kyber768PublicKey, SecretKey as Kyber768SecretKey,
};

pub use kemgate_params::pqc::kyber::{KYBER768, KYBER_SS_BYTES};
