//! Passphrase sources.
//!
//! A [`PassphraseSource`] is the one capability the file operations need
//! from their caller: produce a passphrase on demand. Interactive prompting
//! lives in the CLI crate behind this trait; tests use
//! [`StaticPassphraseSource`].

use zeroize::Zeroizing;

use crate::error::Result;

/// A passphrase, zeroized when dropped.
pub type Passphrase = Zeroizing<String>;

/// A capability that produces a passphrase on demand.
pub trait PassphraseSource {
    /// Read a passphrase. May block (e.g. on an interactive prompt).
    fn read(&mut self) -> Result<Passphrase>;
}

/// A fixed passphrase, for tests and non-interactive callers.
pub struct StaticPassphraseSource {
    passphrase: String,
}

impl StaticPassphraseSource {
    pub fn new(passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: passphrase.into(),
        }
    }
}

impl PassphraseSource for StaticPassphraseSource {
    fn read(&mut self) -> Result<Passphrase> {
        Ok(Zeroizing::new(self.passphrase.clone()))
    }
}

/// Wraps another source, querying it at most once.
///
/// The update operation needs the passphrase twice (validate the existing
/// file, then re-encrypt) but an interactive prompt must fire exactly once;
/// the first successful read is memoized and replayed.
pub struct CachingPassphraseSource<S: PassphraseSource> {
    upstream: S,
    cached: Option<Passphrase>,
}

impl<S: PassphraseSource> CachingPassphraseSource<S> {
    pub fn new(upstream: S) -> Self {
        Self {
            upstream,
            cached: None,
        }
    }
}

impl<S: PassphraseSource> PassphraseSource for CachingPassphraseSource<S> {
    fn read(&mut self) -> Result<Passphrase> {
        match &self.cached {
            Some(passphrase) => Ok(passphrase.clone()),
            None => {
                let passphrase = self.upstream.read()?;
                self.cached = Some(passphrase.clone());
                Ok(passphrase)
            }
        }
    }
}

// Allow mutable references (including trait objects) wherever a source is
// expected, e.g. wrapping a borrowed source in the caching decorator.
impl<S: PassphraseSource + ?Sized> PassphraseSource for &mut S {
    fn read(&mut self) -> Result<Passphrase> {
        (**self).read()
    }
}
