//! Cryptographic primitives for PassKeep.
//!
//! This module provides:
//! - The authenticated-cipher primitive (`cipher`)
//! - Per-entry sealing and opening of passwords (`seal`)

pub mod cipher;
pub mod seal;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{seal, open, Cipher, ...};
pub use cipher::{Cipher, CipherError, SECRET_KEY_LEN, VERIFICATION_LEN};
pub use seal::{open, seal};
