//! Constants for RSA-KEM

/// Algorithm name reported for RSA-KEM encapsulations
pub const RSA_KEM_NAME: &str = "RSA";

/// Default length of a derived RSA-KEM shared secret in bytes
pub const RSA_KEM_DEFAULT_KEY_LEN: usize = 32;

/// Largest shared secret length the configuration accepts
pub const RSA_KEM_MAX_KEY_LEN: usize = 1024;

/// First counter value fed to KDF2
pub const KDF2_COUNTER_START: u32 = 1;

/// Common RSA public exponent (65537)
pub const RSA_PUBLIC_EXPONENT: u32 = 65537;
