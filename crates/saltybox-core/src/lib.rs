//! # saltybox-core
//!
//! Passphrase-based authenticated file encryption. A passphrase and a byte
//! sequence go in; a self-describing, versioned, text-safe token comes out,
//! decryptable only by the same passphrase and with explicit detection of
//! truncation, corruption, and format-version mismatch.
//!
//! The format is guaranteed to never change. Any such change will come in
//! the form of a new armor version rather than an evolution of this layout.
//!
//! ## Architecture
//!
//! - **crypto**: scrypt key derivation and the XSalsa20-Poly1305 secretbox
//! - **envelope**: binary framing (salt, nonce, length, sealed box) with
//!   strict validation
//! - **armor**: versioned, whitespace-free text encoding of envelope bytes
//! - **passphrase**: passphrase source capability and caching decorator
//! - **ops**: file-level encrypt/decrypt and the atomic update protocol

pub mod armor;
pub mod crypto;
pub mod envelope;
pub mod error;
mod fs;
pub mod ops;
pub mod passphrase;

pub use error::{EnvelopeField, Result, SaltyboxError};
pub use ops::{decrypt_file, encrypt_file, update_file};
pub use passphrase::{CachingPassphraseSource, Passphrase, PassphraseSource, StaticPassphraseSource};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
