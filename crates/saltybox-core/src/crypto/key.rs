//! Key derivation using scrypt.
//!
//! The parameters below are part of the on-disk format contract and must
//! never change: data encrypted today has to remain decryptable by every
//! future build. Any change would have to come as a new format version, not
//! as an adjustment here.

use scrypt::Params;
use zeroize::ZeroizeOnDrop;

use crate::error::{Result, SaltyboxError};

/// Length of the per-encryption salt in bytes.
pub const SALT_LENGTH: usize = 8;

/// Length of the derived key in bytes (256 bits, as secretbox requires).
pub const KEY_LENGTH: usize = 32;

/// scrypt cost factor N = 2^15 = 32768, with block size r = 8 and
/// parallelism p = 1.
const SCRYPT_LOG_N: u8 = 15;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// A symmetric key derived from a passphrase.
///
/// Key material is zeroized when the value is dropped and never appears in
/// `Debug` output. Keys are recomputed for every operation and never stored.
#[derive(ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    /// Get a reference to the raw key bytes.
    ///
    /// Use only for immediate seal/open calls; do not store or log.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a symmetric key from a passphrase and an 8-byte salt.
///
/// Deterministic: the same (passphrase, salt) pair always yields the same
/// key. scrypt is memory-hard, so a single call is intentionally expensive
/// (on the order of tens of milliseconds).
///
/// # Errors
///
/// Fails only on resource exhaustion inside scrypt, surfaced as
/// [`SaltyboxError::KeyDerivation`].
pub fn derive_key(passphrase: &str, salt: &[u8; SALT_LENGTH]) -> Result<DerivedKey> {
    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LENGTH)
        .map_err(|e| SaltyboxError::KeyDerivation(e.to_string()))?;

    let mut key = [0u8; KEY_LENGTH];
    scrypt::scrypt(passphrase.as_bytes(), salt, &params, &mut key)
        .map_err(|e| SaltyboxError::KeyDerivation(e.to_string()))?;

    Ok(DerivedKey { key })
}
