//! Password-based key derivation using PBKDF2-HMAC-SHA-256.
//!
//! The master password is stretched into a 256-bit AES key with a high
//! iteration count, salted with the account's email address so the same
//! password on two accounts yields two different keys.  Derivation is
//! deterministic: every vault blob ever written must stay decryptable,
//! so the iteration count and hash are fixed for the application's
//! lifetime.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::errors::{PassVaultError, Result};

/// Length of the derived key in bytes (256 bits, for AES-256-GCM).
pub const KEY_LEN: usize = 32;

/// Iteration count used by every deployed client.  Changing this would
/// silently orphan existing vaults, so it is not configurable in the
/// normal derivation path.
const DEFAULT_ITERATIONS: u32 = 100_000;

/// Minimum iteration count accepted when callers pass explicit params.
const MIN_ITERATIONS: u32 = 10_000;

/// Configurable PBKDF2 parameters.
///
/// Only useful for tooling that must interoperate with vaults created
/// under a different iteration count.  Production unlock always uses
/// the defaults.
#[derive(Debug, Clone, Copy)]
pub struct Pbkdf2Params {
    /// Number of HMAC-SHA-256 iterations (default: 100 000).
    pub iterations: u32,
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
        }
    }
}

/// A 32-byte symmetric key derived from the master password.
///
/// Zeroes its memory on drop so key material cannot linger after the
/// session ends.  Deliberately does not implement `Debug`.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Reconstruct a key from raw bytes (e.g. from the session cache).
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to export into the session cache).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Derive a key from the master password and the account email.
///
/// Uses the fixed production parameters (100 000 iterations of
/// PBKDF2-HMAC-SHA-256).  CPU-bound by design — takes tens of
/// milliseconds; async callers should run it on a blocking thread
/// (see [`crate::unlock::unlock`]).
pub fn derive_key(password: &str, salt: &str) -> Result<DerivedKey> {
    derive_key_with_params(password, salt, &Pbkdf2Params::default())
}

/// Derive a key with explicit PBKDF2 parameters.
///
/// The same password + salt + params will always produce the same key.
/// Enforces a minimum iteration count to prevent dangerously weak
/// settings.
pub fn derive_key_with_params(
    password: &str,
    salt: &str,
    params: &Pbkdf2Params,
) -> Result<DerivedKey> {
    if password.is_empty() {
        return Err(PassVaultError::KeyDerivationFailed(
            "master password must not be empty".into(),
        ));
    }
    if salt.is_empty() {
        return Err(PassVaultError::KeyDerivationFailed(
            "salt must not be empty".into(),
        ));
    }
    if params.iterations < MIN_ITERATIONS {
        return Err(PassVaultError::KeyDerivationFailed(format!(
            "iterations must be at least {MIN_ITERATIONS} (got {})",
            params.iterations
        )));
    }

    let mut key = [0u8; KEY_LEN];
    pbkdf2_hmac::<Sha256>(
        password.as_bytes(),
        salt.as_bytes(),
        params.iterations,
        &mut key,
    );

    let derived = DerivedKey::from_bytes(key);
    key.zeroize();
    Ok(derived)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Low-but-valid iteration count so unit tests stay fast.
    const TEST_PARAMS: Pbkdf2Params = Pbkdf2Params { iterations: 10_000 };

    #[test]
    fn same_inputs_same_key() {
        let k1 = derive_key_with_params("hunter2", "alice@example.com", &TEST_PARAMS).unwrap();
        let k2 = derive_key_with_params("hunter2", "alice@example.com", &TEST_PARAMS).unwrap();
        assert_eq!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn different_salts_different_keys() {
        let k1 = derive_key_with_params("p", "a", &TEST_PARAMS).unwrap();
        let k2 = derive_key_with_params("p", "b", &TEST_PARAMS).unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn different_passwords_different_keys() {
        let k1 = derive_key_with_params("p1", "alice@example.com", &TEST_PARAMS).unwrap();
        let k2 = derive_key_with_params("p2", "alice@example.com", &TEST_PARAMS).unwrap();
        assert_ne!(k1.as_bytes(), k2.as_bytes());
    }

    #[test]
    fn empty_password_rejected() {
        let result = derive_key_with_params("", "alice@example.com", &TEST_PARAMS);
        assert!(matches!(
            result,
            Err(PassVaultError::KeyDerivationFailed(_))
        ));
    }

    #[test]
    fn empty_salt_rejected() {
        let result = derive_key_with_params("hunter2", "", &TEST_PARAMS);
        assert!(matches!(
            result,
            Err(PassVaultError::KeyDerivationFailed(_))
        ));
    }

    #[test]
    fn too_few_iterations_rejected() {
        let params = Pbkdf2Params { iterations: 1_000 };
        let result = derive_key_with_params("hunter2", "alice@example.com", &params);
        assert!(result.is_err());
    }

    #[test]
    fn key_roundtrips_through_raw_bytes() {
        let key = derive_key_with_params("hunter2", "alice@example.com", &TEST_PARAMS).unwrap();
        let restored = DerivedKey::from_bytes(*key.as_bytes());
        assert_eq!(key.as_bytes(), restored.as_bytes());
    }
}
