//! `passkeep show` — decrypt and print every stored password.

use console::style;
use zeroize::Zeroizing;

use crate::cli::{output, store_path, Cli};
use crate::crypto;
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `show` command.
///
/// A bad record is reported and skipped; it never aborts the batch.
/// Only I/O failures on the store file itself are fatal.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = store_path(cli)?;
    let store = VaultStore::new(&path);

    if !store.exists() {
        output::info("No passwords in the store yet.");
        output::tip("Run `passkeep add` to seal your first password.");
        return Ok(());
    }

    let results = store.load()?;
    if results.is_empty() {
        output::info("The store is empty.");
        return Ok(());
    }

    let mut recovered = 0usize;
    let mut failed = 0usize;

    for (position, result) in results.into_iter().enumerate() {
        match result {
            Ok(entry) => match crypto::open(&entry) {
                Ok(plaintext) => {
                    let plaintext = Zeroizing::new(plaintext);
                    println!(
                        "{} {}",
                        style(format!("{position}:")).dim(),
                        String::from_utf8_lossy(&plaintext)
                    );
                    recovered += 1;
                }
                Err(e) => {
                    output::warning(&format!("entry {position}: {e}"));
                    failed += 1;
                }
            },
            Err(e) => {
                output::warning(&e.to_string());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        output::warning(&format!(
            "{recovered} password(s) recovered, {failed} record(s) could not be opened"
        ));
    }

    Ok(())
}
