//! KDF2 key derivation (ISO/IEC 18033-2, section 6.2.3)

use kemgate_api::SharedSecret;
use kemgate_params::traditional::rsa::KDF2_COUNTER_START;
use sha2::{Digest, Sha256, Sha384, Sha512};
use zeroize::Zeroize;

/// Digest driving KDF2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum KdfDigest {
    #[default]
    Sha256,
    Sha384,
    Sha512,
}

/// Derive `len` bytes from the shared value `z`.
///
/// `T = H(z || I2OSP(1, 4)) || H(z || I2OSP(2, 4)) || ...`, truncated to
/// `len`.
pub fn kdf2(digest: KdfDigest, z: &[u8], len: usize) -> SharedSecret {
    match digest {
        KdfDigest::Sha256 => kdf2_with::<Sha256>(z, len),
        KdfDigest::Sha384 => kdf2_with::<Sha384>(z, len),
        KdfDigest::Sha512 => kdf2_with::<Sha512>(z, len),
    }
}

fn kdf2_with<D: Digest>(z: &[u8], len: usize) -> SharedSecret {
    // Capacity is fixed up front so the buffer never reallocates and leaves
    // a stale copy behind.
    let mut out = Vec::with_capacity(len);
    let mut counter = KDF2_COUNTER_START;

    while out.len() < len {
        let mut block = D::new()
            .chain_update(z)
            .chain_update(counter.to_be_bytes())
            .finalize();
        let take = (len - out.len()).min(block.len());
        out.extend_from_slice(&block[..take]);
        block.as_mut_slice().zeroize();
        counter = counter.wrapping_add(1);
    }

    SharedSecret::new(out)
}
