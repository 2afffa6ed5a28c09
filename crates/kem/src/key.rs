//! Algorithm-tagged key handles
//!
//! Keys are produced and parsed by the caller's key management. They enter
//! the library through the `From` conversions below, which fix the algorithm
//! tag from the provider type. The library only ever borrows a handle.

use core::fmt;

use kemgate_api::AlgorithmId;
use pqcrypto_kyber::kyber768;
use pqcrypto_traits::kem::PublicKey as _;
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

/// Public key handle, tagged with the algorithm it was generated for
pub enum PublicKey {
    Kyber768(kyber768::PublicKey),
    Rsa(RsaPublicKey),
}

impl PublicKey {
    /// Algorithm this key belongs to
    pub fn algorithm(&self) -> AlgorithmId {
        match self {
            Self::Kyber768(_) => AlgorithmId::Kyber768,
            Self::Rsa(_) => AlgorithmId::RsaKem,
        }
    }
}

impl From<kyber768::PublicKey> for PublicKey {
    fn from(key: kyber768::PublicKey) -> Self {
        Self::Kyber768(key)
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(key: RsaPublicKey) -> Self {
        Self::Rsa(key)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kyber768(key) => write!(f, "PublicKey::Kyber768({} bytes)", key.as_bytes().len()),
            Self::Rsa(key) => write!(f, "PublicKey::Rsa({} bits)", key.n().bits()),
        }
    }
}

/// Private key handle, tagged with the algorithm it was generated for
pub enum PrivateKey {
    Kyber768(kyber768::SecretKey),
    Rsa(RsaPrivateKey),
}

impl PrivateKey {
    /// Algorithm this key belongs to
    pub fn algorithm(&self) -> AlgorithmId {
        match self {
            Self::Kyber768(_) => AlgorithmId::Kyber768,
            Self::Rsa(_) => AlgorithmId::RsaKem,
        }
    }
}

impl From<kyber768::SecretKey> for PrivateKey {
    fn from(key: kyber768::SecretKey) -> Self {
        Self::Kyber768(key)
    }
}

impl From<RsaPrivateKey> for PrivateKey {
    fn from(key: RsaPrivateKey) -> Self {
        Self::Rsa(key)
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey::{}[REDACTED]", self.algorithm())
    }
}
