//! Versioned text armoring for envelope bytes.
//!
//! The armored form is free of whitespace, safe to embed in URLs (other than
//! possibly its length) and safe to pass unescaped to a POSIX shell. The
//! version-tagged magic prefix lets the format evolve: a decoder accepts the
//! versions it implements and rejects the rest with a distinct error, so an
//! operator can tell "upgrade needed" from "wrong file" from "truncated".

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::{Result, SaltyboxError};

/// Prefix common to every saltybox format version.
const MAGIC_PREFIX: &str = "saltybox";

/// Magic token of the only format version this build produces and decodes.
const V1_MAGIC: &str = "saltybox1:";

/// Wrap bytes in versioned armor, returning the token string.
pub fn wrap(body: &[u8]) -> String {
    format!("{}{}", V1_MAGIC, URL_SAFE_NO_PAD.encode(body))
}

/// Unwrap an armored token back into bytes.
///
/// # Errors
///
/// - Input shorter than the magic token ⇒
///   [`SaltyboxError::ArmorTruncated`]; it cannot possibly be valid.
/// - Known magic but base64 payload fails to decode ⇒
///   [`SaltyboxError::Base64Decode`] with the underlying cause.
/// - The saltybox family prefix with an unsupported version suffix ⇒
///   [`SaltyboxError::UnsupportedFormatVersion`].
/// - Anything else ⇒ [`SaltyboxError::UnrecognizedFormat`].
pub fn unwrap(armored: &str) -> Result<Vec<u8>> {
    if armored.len() < V1_MAGIC.len() {
        return Err(SaltyboxError::ArmorTruncated);
    }

    if let Some(body) = armored.strip_prefix(V1_MAGIC) {
        return URL_SAFE_NO_PAD
            .decode(body)
            .map_err(SaltyboxError::Base64Decode);
    }

    if armored.starts_with(MAGIC_PREFIX) {
        return Err(SaltyboxError::UnsupportedFormatVersion);
    }

    Err(SaltyboxError::UnrecognizedFormat)
}
