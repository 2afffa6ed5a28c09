//! Constants for Kyber key encapsulation mechanism

/// Shared secret size for every Kyber parameter set
pub const KYBER_SS_BYTES: usize = 32;

/// Sizes and name of a Kyber parameter set
pub struct KyberParams {
    /// Algorithm name reported by the provider
    pub name: &'static str,

    /// Size of public key in bytes
    pub public_key_size: usize,

    /// Size of secret key in bytes
    pub secret_key_size: usize,

    /// Size of ciphertext in bytes
    pub ciphertext_size: usize,

    /// Size of shared secret in bytes
    pub shared_secret_size: usize,
}

/// Kyber-768 parameters (NIST security level 3)
pub const KYBER768: KyberParams = KyberParams {
    name: "Kyber768",
    public_key_size: 1184,
    secret_key_size: 2400,
    ciphertext_size: 1088,
    shared_secret_size: KYBER_SS_BYTES,
};
