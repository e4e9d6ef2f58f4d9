use thiserror::Error;

pub use crate::crypto::cipher::CipherError;

/// Failure while sealing a plaintext into a new entry.
///
/// The only path here is primitive initialization — a fresh random key
/// always has the right length, so hitting this is a programmer error
/// rather than a runtime condition worth retrying.
#[derive(Debug, Error)]
pub enum SealError {
    #[error("cipher initialization failed: {0}")]
    CipherInit(String),
}

/// Failure while opening a stored entry back into plaintext.
#[derive(Debug, Error)]
pub enum OpenError {
    /// The entry is structurally incomplete — a field is absent or empty.
    /// No cryptographic work is attempted for these.
    #[error("malformed entry: {0}")]
    MalformedRecord(String),

    /// Verification data does not authenticate the ciphertext under the
    /// stored key (tampered, truncated, or mismatched fields).
    #[error("authentication failed — entry is tampered or mismatched")]
    AuthenticationFailed,
}

/// Textual corruption found while decoding the store file.
///
/// Each variant carries the zero-based record position so a batch caller
/// can report which line is bad and keep going.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("record {index}: expected 3 fields, found {found}")]
    IncompleteRecord { index: usize, found: usize },

    #[error("record {index}: {field} field is not valid base64")]
    InvalidEncoding { index: usize, field: &'static str },
}

/// All errors that can surface from PassKeep operations.
///
/// Open and decode failures never appear here: per-record problems are
/// reported where they happen and the batch continues, so only seal,
/// I/O, config, and command failures are fatal.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("seal failed: {0}")]
    Seal(#[from] SealError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    ConfigError(String),

    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for PassKeep results.
pub type Result<T> = std::result::Result<T, VaultError>;
