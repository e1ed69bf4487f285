//! Master-password verification oracle.
//!
//! The client proves a re-entered master password is correct without
//! the server ever seeing the password or the key: a fixed canary
//! string is encrypted under the derived key and the envelope is stored
//! server-side.  On a later unlock the client decrypts the stored
//! envelope with the candidate key — AEAD fails closed on a wrong key,
//! so success plus a matching canary means the password is correct.
//!
//! The server learns nothing beyond "a verification blob exists".

use subtle::ConstantTimeEq;

use crate::crypto::envelope;
use crate::crypto::kdf::DerivedKey;
use crate::errors::Result;

/// Canary plaintext encrypted into every verification token.
///
/// Identical across all accounts and frozen for the application's
/// lifetime — stored tokens out in the wild decrypt to exactly this.
pub const VERIFICATION_CANARY: &str = "VAULT_PASSWORD_VERIFICATION_TOKEN";

/// Encrypt the canary under `key`, producing a token for the caller to
/// persist server-side (one per account, created on first unlock).
pub fn create_verification_token(key: &DerivedKey) -> Result<String> {
    envelope::encrypt(VERIFICATION_CANARY.as_bytes(), key)
}

/// Check a candidate key against a stored verification token.
///
/// Returns `true` iff the token decrypts under `key` and the recovered
/// plaintext equals the canary.  Any failure — wrong key, tampered or
/// malformed token — yields `false`, never an error.
pub fn verify_master_password(token: &str, key: &DerivedKey) -> bool {
    match envelope::decrypt(token, key) {
        Ok(plaintext) => plaintext.ct_eq(VERIFICATION_CANARY.as_bytes()).into(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_verifies_under_its_own_key() {
        let key = DerivedKey::from_bytes([0x11u8; 32]);
        let token = create_verification_token(&key).unwrap();
        assert!(verify_master_password(&token, &key));
    }

    #[test]
    fn token_rejects_a_different_key() {
        let key = DerivedKey::from_bytes([0x11u8; 32]);
        let other = DerivedKey::from_bytes([0x22u8; 32]);
        let token = create_verification_token(&key).unwrap();
        assert!(!verify_master_password(&token, &other));
    }

    #[test]
    fn garbage_token_is_false_not_an_error() {
        let key = DerivedKey::from_bytes([0x11u8; 32]);
        assert!(!verify_master_password("definitely not an envelope", &key));
        assert!(!verify_master_password("", &key));
    }

    #[test]
    fn envelope_of_wrong_plaintext_is_false() {
        // A valid envelope under the right key, but not the canary.
        let key = DerivedKey::from_bytes([0x33u8; 32]);
        let not_canary = envelope::encrypt(b"SOME_OTHER_STRING", &key).unwrap();
        assert!(!verify_master_password(&not_canary, &key));
    }
}
