//! Flat text record format for the store file (format version 1).
//!
//! Each entry becomes one human-inspectable record:
//!
//! ```text
//! [<b64(ciphertext)>, <b64(verification)>, <b64(secret_key)>], \n
//! ```
//!
//! - Fields are standard Base64, joined with `", "`, wrapped in square
//!   brackets, and terminated by the record separator `", \n"` so
//!   records concatenate in one file without ambiguity (the Base64
//!   alphabet contains neither comma nor newline).
//! - Decoding is per-record isolated: one corrupt record yields one
//!   `DecodeError` at its position and the batch continues.
//! - Files written by the original exporter wrapped each field in a
//!   byte-literal `b'...'` marker.  The decoder strips that wrapper when
//!   present, so legacy stores still read cleanly; it is never written.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use super::entry::Entry;
use crate::errors::DecodeError;

/// Joins the three encoded fields within a record.
const FIELD_DELIM: &str = ", ";

/// Terminates each record.
const RECORD_SEP: &str = ", \n";

/// Encode one entry as a complete record, separator included.
pub fn encode(entry: &Entry) -> String {
    format!(
        "[{}{FIELD_DELIM}{}{FIELD_DELIM}{}]{RECORD_SEP}",
        BASE64.encode(&entry.ciphertext),
        BASE64.encode(&entry.verification),
        BASE64.encode(&entry.secret_key),
    )
}

/// Decode every record in the store contents.
///
/// Returns a lazy iterator of per-record results; iterating a fresh call
/// over unchanged contents always reproduces the same sequence.  An
/// empty or whitespace-only store yields nothing at all — that is "zero
/// entries", not an error.
pub fn decode_all(contents: &str) -> impl Iterator<Item = Result<Entry, DecodeError>> + '_ {
    contents
        .split(RECORD_SEP)
        .enumerate()
        .filter(|(_, raw)| !raw.trim().is_empty())
        .map(|(index, raw)| decode_record(index, raw))
}

/// Decode a single raw record string (bracket framing still attached).
fn decode_record(index: usize, raw: &str) -> Result<Entry, DecodeError> {
    let fields: Vec<&str> = raw.split(FIELD_DELIM).collect();

    if fields.len() < 3 {
        return Err(DecodeError::IncompleteRecord {
            index,
            found: fields.len(),
        });
    }

    Ok(Entry {
        ciphertext: decode_field(index, "ciphertext", fields[0])?,
        verification: decode_field(index, "verification", fields[1])?,
        secret_key: decode_field(index, "secret key", fields[2])?,
    })
}

/// Strip framing from one field and reverse the Base64 encoding.
fn decode_field(index: usize, field: &'static str, raw: &str) -> Result<Vec<u8>, DecodeError> {
    let s = raw.trim();

    // Bracket framing sits on the outer fields only.
    let s = s.strip_prefix('[').unwrap_or(s);
    let s = s.strip_suffix(']').unwrap_or(s);

    // Legacy byte-literal wrapper from the original exporter.
    let s = match s.strip_prefix("b'").and_then(|t| t.strip_suffix('\'')) {
        Some(inner) => inner,
        None => s,
    };

    BASE64
        .decode(s)
        .map_err(|_| DecodeError::InvalidEncoding { index, field })
}
