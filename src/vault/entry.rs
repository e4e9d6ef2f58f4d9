//! The persisted unit of the vault: one sealed password.

use std::fmt;

use zeroize::Zeroize;

/// One stored password's triple, exactly as one seal operation produced
/// it.  All three fields belong together — mixing fields across entries
/// fails authentication at open time.
///
/// The key travels with the ciphertext it protects, so the store file
/// itself must be treated as sensitive.  All fields are wiped from
/// memory on drop.
#[derive(Clone, PartialEq, Eq, Zeroize)]
#[zeroize(drop)]
pub struct Entry {
    /// The sealed form of exactly one plaintext password.
    pub ciphertext: Vec<u8>,

    /// Cipher-produced blob binding this ciphertext/key pair; required
    /// for authenticated decryption.
    pub verification: Vec<u8>,

    /// The fresh random key this entry was sealed under (64 bytes).
    pub secret_key: Vec<u8>,
}

// Never print key or ciphertext bytes, only their sizes.
impl fmt::Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("ciphertext_len", &self.ciphertext.len())
            .field("verification_len", &self.verification.len())
            .field("secret_key_len", &self.secret_key.len())
            .finish()
    }
}
