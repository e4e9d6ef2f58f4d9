//! Sealing and opening of vault entries.
//!
//! `seal` generates a fresh random 64-byte key per password, runs one
//! seal operation through the cipher primitive, and packages the
//! (ciphertext, verification data, key) triple as an `Entry`.  `open`
//! reverses it, with authentication.  Neither function touches storage —
//! persisting the entry is the caller's job.

use rand::RngCore;
use zeroize::Zeroize;

use crate::crypto::cipher::{Cipher, CipherError, SECRET_KEY_LEN};
use crate::errors::{OpenError, SealError};
use crate::vault::Entry;

/// Seal a plaintext password into a new `Entry` under a fresh key.
///
/// The key comes from the thread-local CSPRNG (ChaCha-based, reseeded
/// from the OS) — never derived from the plaintext or any prior state,
/// never reused across entries.
pub fn seal(plaintext: &[u8]) -> Result<Entry, SealError> {
    let mut secret_key = [0u8; SECRET_KEY_LEN];
    rand::rng().fill_bytes(&mut secret_key);

    let cipher = Cipher::new(&secret_key).map_err(|e| SealError::CipherInit(e.to_string()))?;

    let (ciphertext, fin) = cipher
        .begin_seal()
        .seal(plaintext)
        .map_err(|e| SealError::CipherInit(e.to_string()))?;
    let verification = fin.finish();

    let entry = Entry {
        ciphertext,
        verification,
        secret_key: secret_key.to_vec(),
    };

    // Wipe the stack copy; the entry owns the only live copy now.
    secret_key.zeroize();

    Ok(entry)
}

/// Open a stored `Entry` back into plaintext, verifying integrity.
///
/// Structurally incomplete entries fail with `MalformedRecord` before
/// any cryptographic work.  Everything else that does not authenticate —
/// tampered ciphertext, truncated verification data, a key that belongs
/// to a different entry — fails with `AuthenticationFailed` and yields
/// no plaintext.
pub fn open(entry: &Entry) -> Result<Vec<u8>, OpenError> {
    if entry.ciphertext.is_empty() {
        return Err(OpenError::MalformedRecord("ciphertext is empty".into()));
    }
    if entry.verification.is_empty() {
        return Err(OpenError::MalformedRecord(
            "verification data is empty".into(),
        ));
    }
    if entry.secret_key.is_empty() {
        return Err(OpenError::MalformedRecord("secret key is empty".into()));
    }

    let cipher = Cipher::new(&entry.secret_key).map_err(auth_failure)?;

    let op = cipher.begin_open(&entry.verification).map_err(auth_failure)?;
    let (plaintext, fin) = op.open(&entry.ciphertext).map_err(auth_failure)?;
    fin.finish().map_err(auth_failure)?;

    Ok(plaintext)
}

/// Every cipher-level failure on the open path means the stored fields
/// do not fit together — surface them all as one authentication error.
fn auth_failure(_: CipherError) -> OpenError {
    OpenError::AuthenticationFailed
}
