//! The binary encryption envelope.
//!
//! Layout, bit-exact and permanent:
//!
//! ```text
//! salt[8] ‖ nonce[24] ‖ length[8, big-endian signed 64-bit] ‖ sealed_box[length]
//! ```
//!
//! `length` is exactly the sealed box's byte count, and a valid envelope
//! consumes its entire input: nothing may precede the salt or follow the
//! sealed box. Decoding validates every field strictly and reports a
//! distinct error kind per violation, so callers can tell "file too short"
//! from "wrong passphrase" from "garbage input".

use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::{self, NONCE_LENGTH, SALT_LENGTH};
use crate::error::{EnvelopeField, Result, SaltyboxError};

/// Size of the big-endian length field in bytes.
const LENGTH_FIELD_LENGTH: usize = 8;

/// Encrypt a plaintext with a passphrase, producing envelope bytes.
///
/// A fresh random salt and nonce are drawn from the operating system's
/// secure random source for every call; identical inputs therefore never
/// produce identical output. A short read from the random source is
/// reported as [`SaltyboxError::Rng`], never papered over.
pub fn encrypt(passphrase: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
    let salt: [u8; SALT_LENGTH] = random_bytes()?;
    let nonce: [u8; NONCE_LENGTH] = random_bytes()?;
    encrypt_with(passphrase, plaintext, &salt, &nonce)
}

/// Encrypt with an explicit salt and nonce, producing envelope bytes.
///
/// Deterministic: identical arguments yield byte-identical output. This
/// exists for reproducible test vectors only. Never use it for production
/// encryption; reusing a nonce under the same derived key breaks
/// confidentiality.
pub fn encrypt_with(
    passphrase: &str,
    plaintext: &[u8],
    salt: &[u8; SALT_LENGTH],
    nonce: &[u8; NONCE_LENGTH],
) -> Result<Vec<u8>> {
    let key = crypto::derive_key(passphrase, salt)?;
    let sealed_box = crypto::seal(&key, nonce, plaintext)?;

    let mut out =
        Vec::with_capacity(SALT_LENGTH + NONCE_LENGTH + LENGTH_FIELD_LENGTH + sealed_box.len());
    out.extend_from_slice(salt);
    out.extend_from_slice(nonce);
    out.extend_from_slice(&(sealed_box.len() as i64).to_be_bytes());
    out.extend_from_slice(&sealed_box);

    Ok(out)
}

/// Decrypt envelope bytes previously produced by [`encrypt`].
///
/// Validation order and the error kind for each violation:
///
/// 1. salt too short ⇒ truncated salt
/// 2. nonce too short ⇒ truncated nonce
/// 3. length field too short ⇒ truncated length
/// 4. negative length ⇒ [`SaltyboxError::NegativeLength`]
/// 5. length unrepresentable on this platform ⇒
///    [`SaltyboxError::LengthExceedsPlatformLimit`]
/// 6. length larger than the whole input ⇒
///    [`SaltyboxError::LengthExceedsAvailable`]
/// 7. sealed box shorter than claimed ⇒ truncated sealed box
/// 8. bytes left over after the sealed box ⇒ [`SaltyboxError::TrailingData`]
/// 9. tag verification failure ⇒ [`SaltyboxError::AuthenticationFailure`]
///    (wrong passphrase and corruption are intentionally the same kind)
///
/// No plaintext is released before every check has passed.
pub fn decrypt(passphrase: &str, crypttext: &[u8]) -> Result<Vec<u8>> {
    let (salt, rest) = take_field(crypttext, SALT_LENGTH, EnvelopeField::Salt)?;
    let (nonce, rest) = take_field(rest, NONCE_LENGTH, EnvelopeField::Nonce)?;
    let (length_bytes, rest) = take_field(rest, LENGTH_FIELD_LENGTH, EnvelopeField::Length)?;

    let mut raw_length = [0u8; LENGTH_FIELD_LENGTH];
    raw_length.copy_from_slice(length_bytes);
    let claimed = i64::from_be_bytes(raw_length);

    let sealed_box_len = checked_sealed_box_len(claimed, usize::MAX as u64, crypttext.len())?;

    let (sealed_box, rest) = take_field(rest, sealed_box_len, EnvelopeField::SealedBox)?;
    if !rest.is_empty() {
        return Err(SaltyboxError::TrailingData);
    }

    let mut salt_array = [0u8; SALT_LENGTH];
    salt_array.copy_from_slice(salt);
    let mut nonce_array = [0u8; NONCE_LENGTH];
    nonce_array.copy_from_slice(nonce);

    let key = crypto::derive_key(passphrase, &salt_array)?;
    crypto::open(&key, &nonce_array, sealed_box)
}

/// Split off the first `len` bytes as a named envelope field.
fn take_field(
    input: &[u8],
    len: usize,
    field: EnvelopeField,
) -> Result<(&[u8], &[u8])> {
    if input.len() < len {
        return Err(SaltyboxError::TruncatedInput(field));
    }
    Ok(input.split_at(len))
}

/// Validate the claimed sealed-box length against the platform's addressable
/// maximum and the amount of input actually present.
///
/// `platform_max` is a parameter rather than a hard-coded `usize::MAX` so the
/// 32-bit-only branch stays testable on 64-bit hosts.
fn checked_sealed_box_len(claimed: i64, platform_max: u64, available: usize) -> Result<usize> {
    if claimed < 0 {
        return Err(SaltyboxError::NegativeLength);
    }
    if claimed as u64 > platform_max {
        return Err(SaltyboxError::LengthExceedsPlatformLimit);
    }
    let len = claimed as usize;
    if len > available {
        return Err(SaltyboxError::LengthExceedsAvailable);
    }
    Ok(len)
}

/// Fill a fixed-size array from the OS secure random source.
fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| SaltyboxError::Rng(e.to_string()))?;
    Ok(bytes)
}
