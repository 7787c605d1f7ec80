//! File-level operations: encrypt, decrypt, and atomic update.
//!
//! Each operation is stateless and runs to completion on the calling thread.
//! Only [`update_file`] carries an atomicity guarantee: an observer of the
//! target file sees either the complete old contents or the complete new
//! contents, never a mixture, and a failed update leaves the target
//! byte-for-byte untouched.

use std::io::Write;
use std::path::Path;

use crate::armor;
use crate::envelope;
use crate::error::{Result, SaltyboxError};
use crate::fs::{read_bytes, write_secure};
use crate::passphrase::{CachingPassphraseSource, PassphraseSource};

/// Encrypt plaintext and armor the result into a token string.
fn encrypt_to_armored(passphrase: &str, plaintext: &[u8]) -> Result<String> {
    Ok(armor::wrap(&envelope::encrypt(passphrase, plaintext)?))
}

/// Unarmor and decrypt a token string back into plaintext.
fn decrypt_from_armored(passphrase: &str, armored: &str) -> Result<Vec<u8>> {
    envelope::decrypt(passphrase, &armor::unwrap(armored)?)
}

/// Interpret file bytes as an armored token.
///
/// Tokens are ASCII by construction, so anything that is not valid UTF-8
/// cannot be saltybox output.
fn armored_from_bytes(bytes: Vec<u8>) -> Result<String> {
    String::from_utf8(bytes).map_err(|_| SaltyboxError::UnrecognizedFormat)
}

/// Encrypt the file at `input_path` into an armored file at `output_path`.
///
/// The output is created or truncated, with owner-only permissions on Unix.
/// This path is not atomic; use [`update_file`] to rewrite an existing
/// encrypted file safely.
pub fn encrypt_file<S: PassphraseSource + ?Sized>(
    input_path: &Path,
    output_path: &Path,
    source: &mut S,
) -> Result<()> {
    let plaintext = read_bytes(input_path)?;
    let passphrase = source.read()?;
    let armored = encrypt_to_armored(&passphrase, &plaintext)?;
    write_secure(output_path, armored.as_bytes())
}

/// Decrypt the armored file at `input_path` into a plaintext file at
/// `output_path`, with the same permission policy as [`encrypt_file`].
pub fn decrypt_file<S: PassphraseSource + ?Sized>(
    input_path: &Path,
    output_path: &Path,
    source: &mut S,
) -> Result<()> {
    let armored = armored_from_bytes(read_bytes(input_path)?)?;
    let passphrase = source.read()?;
    let plaintext = decrypt_from_armored(&passphrase, &armored)?;
    write_secure(output_path, &plaintext)
}

/// Replace the encrypted file at `crypt_path` with an encryption of
/// `plain_path`'s contents, all-or-nothing.
///
/// The existing file is decrypted first purely to validate the passphrase,
/// which prevents an accidental passphrase change; the recovered plaintext
/// is discarded. The passphrase source is queried at most once even though
/// the passphrase is needed twice.
///
/// The new contents are written to a temporary file in the target's
/// directory (same filesystem, so the final rename is atomic), fsynced to
/// durable storage, and only then renamed over the target. On any failure
/// the temporary file is removed and the target remains exactly as it was.
pub fn update_file<S: PassphraseSource + ?Sized>(
    plain_path: &Path,
    crypt_path: &Path,
    source: &mut S,
) -> Result<()> {
    let existing = armored_from_bytes(read_bytes(crypt_path)?)?;

    let mut caching = CachingPassphraseSource::new(source);

    // Validate the passphrase against the file that already exists. The
    // plaintext is discarded; failure must leave the target untouched.
    let passphrase = caching.read()?;
    decrypt_from_armored(&passphrase, &existing)?;

    let new_plaintext = read_bytes(plain_path)?;
    let passphrase = caching.read()?;
    let armored = encrypt_to_armored(&passphrase, &new_plaintext)?;

    replace_atomically(crypt_path, &armored)
}

/// Write `armored` to a temporary file beside `crypt_path`, fsync it, and
/// rename it over the target. On any failure the temporary file is removed
/// and the target remains exactly as it was.
fn replace_atomically(crypt_path: &Path, armored: &str) -> Result<()> {
    // Same directory as the target: rename is only atomic within one
    // filesystem. An empty parent means the target is in the cwd.
    let target_dir = match crypt_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    // NamedTempFile removes the file on drop, covering every early-return
    // path below; a successful persist() consumes it instead.
    let mut temp = tempfile::Builder::new()
        .prefix(".saltybox-update-")
        .tempfile_in(target_dir)
        .map_err(|e| SaltyboxError::io("create temporary file in", target_dir, e))?;

    temp.write_all(armored.as_bytes())
        .map_err(|e| SaltyboxError::io("write to", temp.path().to_path_buf(), e))?;

    // The data must be durable before the rename lands; a crash between the
    // two could otherwise expose an empty or partial target.
    temp.as_file()
        .sync_all()
        .map_err(|e| SaltyboxError::io("sync", temp.path().to_path_buf(), e))?;

    temp.persist(crypt_path)
        .map_err(|e| SaltyboxError::io("rename temporary file over", crypt_path, e.error))?;

    Ok(())
}
