//! The authenticated-cipher primitive: AES-256-GCM with an HMAC-SHA256
//! verification tag (encrypt-then-MAC).
//!
//! A `Cipher` is built from a 64-byte secret key, split into a 32-byte
//! AEAD key and a 32-byte MAC key.  Sealing and opening run as short
//! typestate operations so the call order — and one message per nonce —
//! is enforced at compile time:
//!
//! ```text
//! seal:  Cipher::new -> begin_seal -> SealOp::seal -> SealFinish::finish
//! open:  Cipher::new -> begin_open -> OpenOp::open -> OpenFinish::finish
//! ```
//!
//! `seal` and `open` consume their op, so a nonce can never encrypt a
//! second message.  `SealFinish::finish` returns the verification data:
//! the 12-byte nonce followed by a 32-byte HMAC tag over
//! (nonce || ciphertext).  That blob binds a specific ciphertext/key
//! pair — `OpenFinish::finish` re-verifies it in constant time, on top
//! of the GCM tag check done during decryption.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Size of the full secret key in bytes (AEAD half + MAC half).
pub const SECRET_KEY_LEN: usize = 64;

/// Size of the AES-256-GCM half of the secret key.
const ENC_KEY_LEN: usize = 32;

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Size of the HMAC-SHA256 tag in bytes.
const TAG_LEN: usize = 32;

/// Size of the verification data blob (nonce || tag).
pub const VERIFICATION_LEN: usize = NONCE_LEN + TAG_LEN;

/// Errors from the cipher primitive itself.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("secret key must be {SECRET_KEY_LEN} bytes, got {got}")]
    InvalidKeyLength { got: usize },

    #[error("verification data must be {VERIFICATION_LEN} bytes, got {got}")]
    InvalidVerificationData { got: usize },

    #[error("encryption error: {0}")]
    Encrypt(String),

    #[error("authentication failed")]
    Authentication,
}

/// An initialized cipher, ready to start seal or open operations.
pub struct Cipher {
    aead: Aes256Gcm,
    /// Keyed but not yet fed MAC state; cloned once per operation.
    mac: HmacSha256,
}

impl Cipher {
    /// Build a cipher from a 64-byte secret key.
    ///
    /// The first 32 bytes key the AEAD, the last 32 bytes key the MAC.
    pub fn new(secret_key: &[u8]) -> Result<Self, CipherError> {
        if secret_key.len() != SECRET_KEY_LEN {
            return Err(CipherError::InvalidKeyLength {
                got: secret_key.len(),
            });
        }

        let (enc_key, mac_key) = secret_key.split_at(ENC_KEY_LEN);

        let aead = Aes256Gcm::new_from_slice(enc_key).map_err(|_| CipherError::InvalidKeyLength {
            got: secret_key.len(),
        })?;
        // Qualified call: `KeyInit` is also in scope and provides its own
        // `new_from_slice` for `Hmac`.
        let mac = <HmacSha256 as Mac>::new_from_slice(mac_key).map_err(|_| {
            CipherError::InvalidKeyLength {
                got: secret_key.len(),
            }
        })?;

        Ok(Self { aead, mac })
    }

    /// Start a seal operation with a fresh random nonce.
    ///
    /// Each `SealOp` seals exactly one message — the nonce is generated
    /// here and must not be reused.
    pub fn begin_seal(&self) -> SealOp<'_> {
        let nonce: [u8; NONCE_LEN] = Aes256Gcm::generate_nonce(&mut OsRng).into();

        let mut mac = self.mac.clone();
        mac.update(&nonce);

        SealOp {
            aead: &self.aead,
            nonce,
            mac,
        }
    }

    /// Start an open operation seeded with stored verification data.
    pub fn begin_open(&self, verification: &[u8]) -> Result<OpenOp<'_>, CipherError> {
        if verification.len() != VERIFICATION_LEN {
            return Err(CipherError::InvalidVerificationData {
                got: verification.len(),
            });
        }

        let (nonce_bytes, tag) = verification.split_at(NONCE_LEN);
        let mut nonce = [0u8; NONCE_LEN];
        nonce.copy_from_slice(nonce_bytes);

        let mut mac = self.mac.clone();
        mac.update(&nonce);

        Ok(OpenOp {
            aead: &self.aead,
            nonce,
            tag: tag.to_vec(),
            mac,
        })
    }
}

/// An in-progress seal operation.  Holds one fresh nonce.
pub struct SealOp<'a> {
    aead: &'a Aes256Gcm,
    nonce: [u8; NONCE_LEN],
    mac: HmacSha256,
}

impl SealOp<'_> {
    /// Encrypt and authenticate one plaintext, consuming the operation.
    ///
    /// Consuming `self` is what makes nonce reuse unrepresentable —
    /// sealing a second message requires a new `begin_seal`.
    pub fn seal(mut self, plaintext: &[u8]) -> Result<(Vec<u8>, SealFinish), CipherError> {
        let ciphertext = self
            .aead
            .encrypt(Nonce::from_slice(&self.nonce), plaintext)
            .map_err(|e| CipherError::Encrypt(format!("AEAD encrypt: {e}")))?;

        self.mac.update(&ciphertext);

        Ok((
            ciphertext,
            SealFinish {
                nonce: self.nonce,
                mac: self.mac,
            },
        ))
    }
}

/// Pending finalization of a seal operation.
pub struct SealFinish {
    nonce: [u8; NONCE_LEN],
    mac: HmacSha256,
}

impl SealFinish {
    /// Finalize, producing the verification data (nonce || HMAC tag).
    pub fn finish(self) -> Vec<u8> {
        let mut verification = Vec::with_capacity(VERIFICATION_LEN);
        verification.extend_from_slice(&self.nonce);
        verification.extend_from_slice(&self.mac.finalize().into_bytes());
        verification
    }
}

/// An in-progress open operation.
pub struct OpenOp<'a> {
    aead: &'a Aes256Gcm,
    nonce: [u8; NONCE_LEN],
    tag: Vec<u8>,
    mac: HmacSha256,
}

impl OpenOp<'_> {
    /// Decrypt one ciphertext, consuming the operation.  The GCM tag is
    /// checked here; the HMAC tag from the verification data is checked
    /// in `OpenFinish::finish`.
    pub fn open(mut self, ciphertext: &[u8]) -> Result<(Vec<u8>, OpenFinish), CipherError> {
        self.mac.update(ciphertext);

        let plaintext = self
            .aead
            .decrypt(Nonce::from_slice(&self.nonce), ciphertext)
            .map_err(|_| CipherError::Authentication)?;

        Ok((
            plaintext,
            OpenFinish {
                tag: self.tag,
                mac: self.mac,
            },
        ))
    }
}

/// Pending finalization of an open operation.
pub struct OpenFinish {
    tag: Vec<u8>,
    mac: HmacSha256,
}

impl OpenFinish {
    /// Finalize, verifying the HMAC tag in constant time.
    ///
    /// Callers must not release plaintext until this succeeds.
    pub fn finish(self) -> Result<(), CipherError> {
        self.mac
            .verify_slice(&self.tag)
            .map_err(|_| CipherError::Authentication)
    }
}
