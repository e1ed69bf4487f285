//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-GCM envelope encryption and decryption (`envelope`)
//! - PBKDF2 password-based key derivation (`kdf`)
//! - The master-password verification oracle (`verification`)

pub mod envelope;
pub mod kdf;
pub mod verification;

// Re-export the most commonly used items so callers can write:
//   use passvault::crypto::{encrypt, decrypt, derive_key, ...};
pub use envelope::{decrypt, encrypt};
pub use kdf::{derive_key, derive_key_with_params, DerivedKey, Pbkdf2Params};
pub use verification::{create_verification_token, verify_master_password, VERIFICATION_CANARY};
