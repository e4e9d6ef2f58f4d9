//! The append-only store file behind the vault.
//!
//! `VaultStore` is a thin handle around the backing text file.  Writes
//! are pure appends — a new record never alters or reorders previously
//! written lines — and reads always scan the whole file.  Both sides
//! take an advisory `flock` so two concurrently running instances cannot
//! interleave half-written records.

use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use super::entry::Entry;
use super::format;
use crate::errors::{DecodeError, Result};

/// Handle to a store file on disk.  The file does not need to exist yet;
/// the first `append` creates it.
pub struct VaultStore {
    path: PathBuf,
}

impl VaultStore {
    /// Build a handle for the store file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns `true` if the store file exists on disk.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Append one encoded entry to the store file.
    ///
    /// Creates the file (and its parent directory) on first use, with
    /// permissions 0600 on Unix.  Holds an exclusive advisory lock for
    /// the duration of the write.
    pub fn append(&self, entry: &Entry) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut options = OpenOptions::new();
        options.append(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;
        lock(&file, LockKind::Exclusive)?;

        file.write_all(format::encode(entry).as_bytes())?;
        file.flush()?;

        // The lock releases when `file` closes.
        Ok(())
    }

    /// Read the raw store contents.  A missing file reads as empty.
    ///
    /// Holds a shared advisory lock while reading so a concurrent append
    /// cannot be observed half-written.
    pub fn read_raw(&self) -> Result<String> {
        let mut file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(String::new()),
            Err(e) => return Err(e.into()),
        };
        lock(&file, LockKind::Shared)?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents)
    }

    /// Read and decode every record in the store.
    ///
    /// Per-record decode failures are returned in place so the caller
    /// can report them without losing the well-formed entries around
    /// them.  I/O failures are fatal for the whole read.
    pub fn load(&self) -> Result<Vec<std::result::Result<Entry, DecodeError>>> {
        let contents = self.read_raw()?;
        Ok(format::decode_all(&contents).collect())
    }
}

enum LockKind {
    Shared,
    Exclusive,
}

/// Take an advisory lock on the open file (no-op off Unix).
#[cfg(unix)]
fn lock(file: &File, kind: LockKind) -> std::io::Result<()> {
    use std::os::unix::io::AsRawFd;

    let operation = match kind {
        LockKind::Shared => libc::LOCK_SH,
        LockKind::Exclusive => libc::LOCK_EX,
    };

    // Blocks until the lock is granted; released when the fd closes.
    let rc = unsafe { libc::flock(file.as_raw_fd(), operation) };
    if rc != 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}

#[cfg(not(unix))]
fn lock(_file: &File, _kind: LockKind) -> std::io::Result<()> {
    Ok(())
}
