//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// One row of the `list` table: an entry's position and sizes, or the
/// decode error that sits at that position instead.
pub struct EntryRow {
    /// Zero-based record position in the store file.
    pub index: usize,
    /// Ciphertext size in bytes; `None` for records that failed to decode.
    pub ciphertext_bytes: Option<usize>,
    /// "sealed" for good records, the decode error text otherwise.
    pub status: String,
}

/// Print a table of store entries (Position, Ciphertext, Status).
pub fn print_entries_table(rows: &[EntryRow]) {
    if rows.is_empty() {
        info("No passwords in the store yet.");
        tip("Run `passkeep add` to seal your first password.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Ciphertext", "Status"]);

    for row in rows {
        let size = match row.ciphertext_bytes {
            Some(n) => format!("{n} bytes"),
            None => "-".to_string(),
        };
        table.add_row(vec![row.index.to_string(), size, row.status.clone()]);
    }

    println!("{table}");
}
