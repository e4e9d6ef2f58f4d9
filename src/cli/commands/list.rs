//! `passkeep list` — show stored entries without decrypting anything.

use crate::cli::output::{self, EntryRow};
use crate::cli::{store_path, Cli};
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `list` command.
///
/// This is a metadata-only view — no key is ever loaded into a cipher.
pub fn execute(cli: &Cli) -> Result<()> {
    let path = store_path(cli)?;
    let store = VaultStore::new(&path);

    let rows: Vec<EntryRow> = store
        .load()?
        .into_iter()
        .enumerate()
        .map(|(index, result)| match result {
            Ok(entry) => EntryRow {
                index,
                ciphertext_bytes: Some(entry.ciphertext.len()),
                status: "sealed".to_string(),
            },
            Err(e) => EntryRow {
                index,
                ciphertext_bytes: None,
                status: e.to_string(),
            },
        })
        .collect();

    output::print_entries_table(&rows);

    Ok(())
}
