//! Client-side crypto core for the PassVault password manager.
//!
//! The server is a dumb store for ciphertext: every vault entry is
//! encrypted in the client before it leaves, under a key derived from
//! the master password and the account email.  A stored verification
//! token lets the client confirm a re-entered password without the
//! server ever seeing password or key.

pub mod crypto;
pub mod errors;
pub mod session;
pub mod store;
pub mod unlock;
pub mod vault;

pub use errors::{PassVaultError, Result};
