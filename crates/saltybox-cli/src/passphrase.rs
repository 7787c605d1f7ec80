//! Interactive and non-interactive passphrase collection.

use std::io::{IsTerminal, Read};

use dialoguer::Password;
use saltybox_core::passphrase::{Passphrase, PassphraseSource};
use saltybox_core::{Result, SaltyboxError};
use zeroize::Zeroizing;

/// Passphrase source for CLI use.
///
/// Resolution order: the `SALTYBOX_PASSPHRASE` environment variable if set
/// and non-empty, then a hidden prompt when stdin is a terminal, otherwise
/// the whole of stdin (which makes piped invocations scriptable).
#[derive(Default)]
pub struct TerminalPassphraseSource;

impl TerminalPassphraseSource {
    pub fn new() -> Self {
        Self
    }
}

impl PassphraseSource for TerminalPassphraseSource {
    fn read(&mut self) -> Result<Passphrase> {
        if let Ok(value) = std::env::var("SALTYBOX_PASSPHRASE") {
            if !value.is_empty() {
                return Ok(Zeroizing::new(value));
            }
        }

        if std::io::stdin().is_terminal() {
            let phrase = Password::new()
                .with_prompt("Passphrase (saltybox)")
                .interact()
                .map_err(|e| {
                    SaltyboxError::PassphraseSource(format!("failure reading passphrase: {}", e))
                })?;
            return Ok(Zeroizing::new(phrase));
        }

        let mut phrase = String::new();
        std::io::stdin().read_to_string(&mut phrase).map_err(|e| {
            SaltyboxError::PassphraseSource(format!(
                "failure reading passphrase from stdin: {}",
                e
            ))
        })?;
        Ok(Zeroizing::new(phrase))
    }
}
