//! Vault module — encrypted password storage.
//!
//! This module provides:
//! - The `Entry` triple persisted per password (`entry`)
//! - The flat text record format (`format`)
//! - The append-only `VaultStore` file handle (`store`)

pub mod entry;
pub mod format;
pub mod store;

// Re-export the most commonly used items.
pub use entry::Entry;
pub use format::{decode_all, encode};
pub use store::VaultStore;
