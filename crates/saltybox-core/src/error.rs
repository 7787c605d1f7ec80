//! Error types for saltybox core operations.
//!
//! Every failure mode that callers may want to distinguish gets its own
//! variant. In particular, all the ways an envelope can be malformed are
//! separate kinds, while a wrong passphrase and tampered-with data are
//! deliberately the same [`SaltyboxError::AuthenticationFailure`]: the
//! underlying construction cannot tell them apart, and pretending otherwise
//! would leak information about why a decryption failed.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for saltybox operations.
pub type Result<T> = std::result::Result<T, SaltyboxError>;

/// The envelope field that was being read when input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvelopeField {
    Salt,
    Nonce,
    Length,
    SealedBox,
}

impl std::fmt::Display for EnvelopeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EnvelopeField::Salt => "salt",
            EnvelopeField::Nonce => "nonce",
            EnvelopeField::Length => "length",
            EnvelopeField::SealedBox => "sealed box",
        };
        f.write_str(name)
    }
}

/// Core error type for saltybox operations.
#[derive(Debug, Error)]
pub enum SaltyboxError {
    /// Input ended before the named envelope field could be read in full.
    #[error("input likely truncated while reading {0}")]
    TruncatedInput(EnvelopeField),

    /// The envelope's length field is negative.
    #[error("corrupt input: sealed box length is negative")]
    NegativeLength,

    /// The envelope's length field cannot be represented as a size on this
    /// platform. Only reachable on 32-bit targets.
    #[error("sealed box length exceeds what this platform can address")]
    LengthExceedsPlatformLimit,

    /// The envelope's length field claims more bytes than the input holds.
    #[error("truncated or corrupt input: claimed length greater than available input")]
    LengthExceedsAvailable,

    /// Bytes remained after the sealed box; a valid envelope consumes its
    /// entire input exactly.
    #[error("corrupt input: unexpected data after sealed box")]
    TrailingData,

    /// Authentication tag verification failed. Wrong passphrase and
    /// corrupted or tampered-with data are indistinguishable here.
    #[error("corrupt input, tampered-with data, or bad passphrase")]
    AuthenticationFailure,

    /// Sealing failed. The cipher only rejects plaintexts beyond its size
    /// limits, so this is unreachable for inputs that fit in memory.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// The armored input is shorter than the magic token and cannot possibly
    /// be valid.
    #[error("input size smaller than magic marker; likely truncated")]
    ArmorTruncated,

    /// The armored token carried the current magic prefix but its payload
    /// failed to base64-decode.
    #[error("base64 decoding failed")]
    Base64Decode(#[source] base64::DecodeError),

    /// The input is saltybox data, but of a version this build cannot decode.
    #[error("input claims to be saltybox, but not a version we support")]
    UnsupportedFormatVersion,

    /// The input does not look like saltybox output at all.
    #[error("input unrecognized as saltybox data")]
    UnrecognizedFormat,

    /// The passphrase source failed to produce a passphrase.
    #[error("failed to read passphrase: {0}")]
    PassphraseSource(String),

    /// scrypt key derivation failed (resource exhaustion; fatal, not retried).
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// The secure random source failed to produce the requested bytes.
    #[error("secure random source failed: {0}")]
    Rng(String),

    /// Filesystem interaction failed.
    #[error("failed to {operation} {}: {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SaltyboxError {
    /// Annotate an I/O error with the operation and path it occurred on.
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SaltyboxError::Io {
            operation,
            path: path.into(),
            source,
        }
    }
}
