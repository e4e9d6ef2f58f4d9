//! `passkeep add` — seal a new password and append it to the store.

use std::io::{self, IsTerminal, Read};

use zeroize::Zeroizing;

use crate::cli::{output, prompt_new_password, store_path, Cli};
use crate::crypto;
use crate::errors::Result;
use crate::vault::VaultStore;

/// Execute the `add` command.
pub fn execute(cli: &Cli, value: Option<&str>) -> Result<()> {
    let path = store_path(cli)?;

    // Determine the password from one of three sources.
    let password: Zeroizing<String> = if let Some(v) = value {
        // Source 1: Inline value on the command line.
        output::warning("Password provided on command line — it may appear in shell history.");
        Zeroizing::new(v.to_string())
    } else if !io::stdin().is_terminal() {
        // Source 2: Piped input (stdin is not a terminal).
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        Zeroizing::new(buf.trim_end_matches(['\r', '\n']).to_string())
    } else {
        // Source 3: Interactive hidden prompt (default).
        Zeroizing::new(prompt_new_password()?)
    };

    // Seal under a fresh key, then persist with an explicit append.
    let entry = crypto::seal(password.as_bytes())?;
    let store = VaultStore::new(&path);
    store.append(&entry)?;

    let total = store.load()?.len();
    output::success(&format!(
        "Password sealed into {} ({} total)",
        path.display(),
        total
    ));
    output::tip("Run `passkeep show` to decrypt your passwords.");

    Ok(())
}
