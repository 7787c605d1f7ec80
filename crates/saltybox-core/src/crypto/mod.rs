//! Low-level crypto primitives: key derivation and the secretbox cipher.
//!
//! Nothing here knows about the envelope layout or armoring; these are the
//! building blocks the envelope module composes.

pub mod cipher;
pub mod key;

pub use cipher::{open, seal, NONCE_LENGTH, SEALED_BOX_OVERHEAD};
pub use key::{derive_key, DerivedKey, KEY_LENGTH, SALT_LENGTH};
