//! Core types handed across the KEM boundary
//!
//! [`SharedSecret`] is the only type here that carries sensitive material. It
//! is deliberately not `Clone`, hides its bytes from `Debug`, compares in
//! constant time and wipes itself when dropped.

use core::fmt;
use core::str::FromStr;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Error;

/// Identifies a KEM scheme and the key format it accepts
///
/// Names are parsed the same way everywhere: [`FromStr`] accepts any alias
/// case-insensitively, and with the `serde` feature deserialization goes
/// through it while serialization writes [`AlgorithmId::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmId {
    /// Kyber768 lattice KEM
    Kyber768,
    /// RSA-KEM (ISO/IEC 18033-2)
    RsaKem,
}

impl AlgorithmId {
    /// Every algorithm known to the library
    pub const ALL: [AlgorithmId; 2] = [AlgorithmId::Kyber768, AlgorithmId::RsaKem];

    /// Canonical algorithm name, as reported by the provider and placed into
    /// an [`EncapsulationResult`]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kyber768 => "Kyber768",
            Self::RsaKem => "RSA",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Kyber768 => &["Kyber768", "Kyber-768"],
            Self::RsaKem => &["RSA", "RSA-KEM", "RsaKem"],
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.aliases().iter().any(|a| a.eq_ignore_ascii_case(s)))
            .ok_or_else(|| Error::unsupported(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for AlgorithmId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for AlgorithmId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// Shared secret produced by encapsulation or recovered by decapsulation
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    data: Vec<u8>,
}

impl SharedSecret {
    /// Take ownership of freshly derived secret bytes
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Copy secret bytes out of a provider buffer
    pub fn from_slice(slice: &[u8]) -> Self {
        Self {
            data: slice.to_vec(),
        }
    }

    /// Get the length of the secret
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the secret is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        self.data.ct_eq(&other.data).into()
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret({})[REDACTED]", self.data.len())
    }
}

/// Encapsulated form of a shared secret
#[derive(Clone, PartialEq, Eq)]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    /// Wrap encapsulation bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the length of the ciphertext
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the ciphertext is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the wrapper and return the raw bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Ciphertext {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Ciphertext {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ciphertext({} bytes)", self.0.len())
    }
}

/// Outcome of a successful encapsulation
///
/// The three fields are what a host binding needs to build its own record:
/// the algorithm name, the secret bytes and the encapsulated bytes.
#[derive(Debug)]
pub struct EncapsulationResult {
    algorithm: AlgorithmId,
    secret: SharedSecret,
    ciphertext: Ciphertext,
}

impl EncapsulationResult {
    /// Assemble a result. Callers are responsible for `algorithm` naming the
    /// scheme that produced `secret` and `ciphertext`.
    pub fn new(algorithm: AlgorithmId, secret: SharedSecret, ciphertext: Ciphertext) -> Self {
        Self {
            algorithm,
            secret,
            ciphertext,
        }
    }

    /// Algorithm that produced this encapsulation
    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    /// The shared secret
    pub fn secret(&self) -> &SharedSecret {
        &self.secret
    }

    /// The encapsulated secret to send to the private key holder
    pub fn ciphertext(&self) -> &Ciphertext {
        &self.ciphertext
    }

    /// Split into `(algorithm, secret, ciphertext)`
    pub fn into_parts(self) -> (AlgorithmId, SharedSecret, Ciphertext) {
        (self.algorithm, self.secret, self.ciphertext)
    }
}
