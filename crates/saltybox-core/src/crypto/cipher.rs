//! Authenticated encryption with XSalsa20-Poly1305 (NaCl "secretbox").
//!
//! A sealed box is the ciphertext followed by a 16-byte Poly1305 tag.
//! [`open`] verifies the tag before releasing any plaintext; on mismatch it
//! returns a generic authentication failure and nothing else.

use crypto_secretbox::aead::{Aead, KeyInit};
use crypto_secretbox::{Nonce, XSalsa20Poly1305};

use crate::crypto::key::DerivedKey;
use crate::error::{Result, SaltyboxError};

/// Length of the secretbox nonce in bytes.
pub const NONCE_LENGTH: usize = 24;

/// Bytes a sealed box is larger than its plaintext (the Poly1305 tag).
pub const SEALED_BOX_OVERHEAD: usize = 16;

/// Seal a plaintext under (key, nonce), producing ciphertext plus tag.
///
/// The nonce must never be reused with the same key for two different
/// plaintexts; callers are responsible for generating a fresh one per
/// encryption. Sealing a zero-length plaintext is valid and produces a
/// sealed box consisting of just the tag.
pub fn seal(key: &DerivedKey, nonce: &[u8; NONCE_LENGTH], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = XSalsa20Poly1305::new_from_slice(key.as_bytes())
        .map_err(|_| SaltyboxError::KeyDerivation("invalid key length for secretbox".into()))?;

    // encrypt() only fails on plaintext sizes beyond the cipher's limits.
    cipher
        .encrypt(Nonce::from_slice(nonce), plaintext)
        .map_err(|_| SaltyboxError::Encryption("plaintext exceeds cipher limits".into()))
}

/// Open a sealed box, verifying its tag before returning any plaintext.
///
/// # Errors
///
/// Returns [`SaltyboxError::AuthenticationFailure`] if the tag does not
/// verify. A wrong key (wrong passphrase) and corrupted ciphertext are
/// indistinguishable.
pub fn open(key: &DerivedKey, nonce: &[u8; NONCE_LENGTH], sealed_box: &[u8]) -> Result<Vec<u8>> {
    let cipher = XSalsa20Poly1305::new_from_slice(key.as_bytes())
        .map_err(|_| SaltyboxError::KeyDerivation("invalid key length for secretbox".into()))?;

    cipher
        .decrypt(Nonce::from_slice(nonce), sealed_box)
        .map_err(|_| SaltyboxError::AuthenticationFailure)
}
