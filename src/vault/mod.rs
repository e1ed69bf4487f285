//! Vault module — the plaintext record type and its codec.

pub mod entry;

// Re-export the most commonly used items.
pub use entry::{decode, encode, VaultEntry};
