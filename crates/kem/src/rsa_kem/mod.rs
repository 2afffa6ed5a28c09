//! RSA-based Key Encapsulation Mechanism (RSA-KEM)
//!
//! This module implements RSA-KEM as specified in ISO/IEC 18033-2 (also
//! profiled by RFC 5990): a random integer below the modulus is encrypted
//! with raw RSA and the shared secret is derived from that integer with KDF2.

mod kdf;
mod kem;

pub use self::kdf::{kdf2, KdfDigest};
pub use self::kem::RsaKem;

// Provider key types, re-exported so key-management code can name them.
pub use ::rsa::{RsaPrivateKey, RsaPublicKey};
