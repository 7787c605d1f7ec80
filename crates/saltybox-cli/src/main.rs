//! saltybox - passphrase-based file encryption
//!
//! Thin command-line front end over `saltybox-core`: each subcommand
//! delegates to the corresponding core operation, and any error maps to a
//! non-zero process exit.

mod passphrase;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use saltybox_core::VERSION;

use crate::passphrase::TerminalPassphraseSource;

/// saltybox - passphrase-based file encryption
#[derive(Parser)]
#[command(name = "saltybox")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file
    Encrypt {
        /// Path to the file whose contents is to be encrypted
        #[arg(short, long, value_name = "PATH")]
        input: PathBuf,

        /// Path to the file to write the encrypted text to
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
    },

    /// Decrypt a file
    Decrypt {
        /// Path to the file whose contents is to be decrypted
        #[arg(short, long, value_name = "PATH")]
        input: PathBuf,

        /// Path to the file to write the plaintext to
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
    },

    /// Replace an existing encrypted file with new encrypted content
    Update {
        /// Path to the file whose contents is to be encrypted
        #[arg(short, long, value_name = "PATH")]
        input: PathBuf,

        /// Path to the existing saltybox file to replace atomically
        #[arg(short, long, value_name = "PATH")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut source = TerminalPassphraseSource::new();

    match cli.command {
        Commands::Encrypt { input, output } => {
            saltybox_core::encrypt_file(&input, &output, &mut source)?;
        }
        Commands::Decrypt { input, output } => {
            saltybox_core::decrypt_file(&input, &output, &mut source)?;
        }
        Commands::Update { input, output } => {
            saltybox_core::update_file(&input, &output, &mut source)?;
        }
    }

    Ok(())
}
