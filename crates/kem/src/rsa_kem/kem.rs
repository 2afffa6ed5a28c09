//! RSA-KEM primitive

use ::rsa::hazmat::{rsa_decrypt_and_check, rsa_encrypt};
use ::rsa::traits::PublicKeyParts;
use ::rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use kemgate_api::error::validation;
use kemgate_api::{Ciphertext, Kem, SharedSecret};
use kemgate_params::traditional::rsa::RSA_KEM_NAME;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use super::kdf::kdf2;
use crate::config::RsaKemParams;
use crate::error::{Error, Result};

/// RSA-KEM over the `rsa` provider, deriving secrets with KDF2
#[derive(Debug, Clone, Default)]
pub struct RsaKem {
    params: RsaKemParams,
}

impl RsaKem {
    /// Create an RSA-KEM primitive with the given derivation parameters
    pub fn new(params: RsaKemParams) -> Self {
        Self { params }
    }

    /// Derivation parameters in use
    pub fn params(&self) -> &RsaKemParams {
        &self.params
    }
}

impl Kem for RsaKem {
    type PublicKey = RsaPublicKey;
    type SecretKey = RsaPrivateKey;
    type Error = Error;

    fn name(&self) -> &'static str {
        RSA_KEM_NAME
    }

    fn shared_secret_len(&self) -> usize {
        self.params.key_len
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &Self::PublicKey,
    ) -> Result<(Ciphertext, SharedSecret)> {
        let k = public_key.size();

        // z is drawn as its own k-byte encoding, so the KDF input needs no
        // separate I2OSP step.
        let (z_bytes, z) = random_below(rng, public_key.n(), k);

        let c = rsa_encrypt(public_key, &z)?;
        let ciphertext = i2osp(&c, k)?;
        let secret = kdf2(self.params.digest, &z_bytes, self.params.key_len);

        Ok((Ciphertext::new(ciphertext.to_vec()), secret))
    }

    fn decapsulate(
        &self,
        secret_key: &Self::SecretKey,
        ciphertext: &[u8],
    ) -> Result<SharedSecret> {
        let k = secret_key.size();
        validation::length("RSA-KEM ciphertext", ciphertext.len(), k)?;

        let c = BigUint::from_bytes_be(ciphertext);
        if &c >= secret_key.n() {
            return Err(Error::InvalidCiphertext {
                algorithm: RSA_KEM_NAME,
                reason: "ciphertext representative out of range",
            });
        }

        let z = Zeroizing::new(rsa_decrypt_and_check(secret_key, Some(&mut OsRng), &c)?);
        let z_bytes = i2osp(&z, k)?;

        Ok(kdf2(self.params.digest, &z_bytes, self.params.key_len))
    }
}

/// Sample `z` uniformly from `[0, n)`, returning both its `len`-byte
/// big-endian encoding and its integer value.
fn random_below<R: CryptoRng + RngCore>(
    rng: &mut R,
    n: &BigUint,
    len: usize,
) -> (Zeroizing<Vec<u8>>, Zeroizing<BigUint>) {
    let excess_bits = len * 8 - n.bits() as usize;
    let top_mask = 0xFFu8 >> excess_bits;
    let mut buf = Zeroizing::new(vec![0u8; len]);

    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= top_mask;
        let z = Zeroizing::new(BigUint::from_bytes_be(&buf));
        if *z < *n {
            return (buf, z);
        }
    }
}

/// Integer-to-octet-string primitive (RFC 8017, section 4.1)
fn i2osp(x: &BigUint, len: usize) -> Result<Zeroizing<Vec<u8>>> {
    let raw = Zeroizing::new(x.to_bytes_be());
    if raw.len() > len {
        return Err(Error::InvalidKey {
            key_type: RSA_KEM_NAME,
            reason: "integer too large for modulus length",
        });
    }

    let mut out = Zeroizing::new(vec![0u8; len]);
    out[len - raw.len()..].copy_from_slice(&raw);
    Ok(out)
}
