//! Trait definitions implemented by KEM providers

pub mod kem;

pub use kem::Kem;
