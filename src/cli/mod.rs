//! CLI module — Clap argument parser, output helpers, and command implementations.

pub mod commands;
pub mod output;

use clap::Parser;

use crate::config::Settings;
use crate::errors::{Result, VaultError};

/// PassKeep CLI: local encrypted password vault.
#[derive(Parser)]
#[command(name = "passkeep", about = "Local encrypted password vault", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Store directory (default: .passkeep, or `store_dir` from .passkeep.toml)
    #[arg(long, global = true)]
    pub store_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Seal a new password into the store
    Add {
        /// Password value (omit for interactive prompt)
        value: Option<String>,
    },

    /// Decrypt and print every stored password
    Show,

    /// List stored entries without decrypting anything
    List,
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Build the full path to the store file from CLI arguments and config.
///
/// `--store-dir` wins over `.passkeep.toml`; both fall back to defaults.
/// Example: `<cwd>/.passkeep/passwords.store`
pub fn store_path(cli: &Cli) -> Result<std::path::PathBuf> {
    let cwd = std::env::current_dir()?;
    let mut settings = Settings::load(&cwd)?;

    // The flag wins over the config file; the file name stays configurable.
    if let Some(dir) = &cli.store_dir {
        settings.store_dir = dir.clone();
    }

    Ok(settings.store_path(&cwd))
}

/// Prompt interactively for a new password, hidden input with confirmation.
pub fn prompt_new_password() -> Result<String> {
    dialoguer::Password::new()
        .with_prompt("Enter the password to seal")
        .with_confirmation("Confirm the password", "Entries do not match, try again")
        .interact()
        .map_err(|e| VaultError::CommandFailed(format!("password prompt: {e}")))
}
