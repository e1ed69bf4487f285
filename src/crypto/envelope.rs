//! AES-256-GCM envelope encryption.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce,
//! prepends it to the ciphertext (which carries the 16-byte auth tag at
//! the end, per the AEAD's native convention), and base64-encodes the
//! whole thing.  The result is a self-contained printable blob the
//! server can store verbatim: no external nonce bookkeeping, every
//! envelope independently decryptable given only the key.
//!
//! Envelope layout (before base64):
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::crypto::kdf::DerivedKey;
use crate::errors::{PassVaultError, Result};

/// Size of the AES-256-GCM nonce in bytes.
pub const NONCE_LEN: usize = 12;

/// Size of the GCM authentication tag in bytes.
pub const TAG_LEN: usize = 16;

/// Encrypt `plaintext` under `key`, returning a base64 envelope.
///
/// A new random nonce is generated on every call; encrypting the same
/// plaintext twice yields two different envelopes.
pub fn encrypt(plaintext: &[u8], key: &DerivedKey) -> Result<String> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| PassVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Fresh 96-bit nonce from the OS CSPRNG.  Never caller-supplied.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the caller only needs to store one blob.
    let mut combined = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    combined.extend_from_slice(&nonce);
    combined.extend_from_slice(&ciphertext);

    Ok(BASE64.encode(combined))
}

/// Decrypt an envelope produced by [`encrypt`].
///
/// Fails closed with [`PassVaultError::DecryptionFailed`] on a wrong
/// key, any tampering, bad base64, or an envelope too short to contain
/// a nonce and tag.  No partial plaintext is ever returned.
pub fn decrypt(envelope: &str, key: &DerivedKey) -> Result<Vec<u8>> {
    let combined = BASE64
        .decode(envelope)
        .map_err(|_| PassVaultError::DecryptionFailed)?;

    // Anything shorter than nonce + tag cannot be a valid envelope.
    if combined.len() < NONCE_LEN + TAG_LEN {
        return Err(PassVaultError::DecryptionFailed);
    }

    let (nonce_bytes, ciphertext) = combined.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| PassVaultError::DecryptionFailed)?;

    // Decrypt and verify the auth tag.
    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| PassVaultError::DecryptionFailed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> DerivedKey {
        DerivedKey::from_bytes([0xABu8; 32])
    }

    #[test]
    fn roundtrip() {
        let key = test_key();
        let plaintext = b"the quick brown fox";

        let envelope = encrypt(plaintext, &key).unwrap();
        let recovered = decrypt(&envelope, &key).unwrap();
        assert_eq!(recovered, plaintext);
    }

    #[test]
    fn envelope_is_printable_base64() {
        let key = test_key();
        let envelope = encrypt(b"secret", &key).unwrap();
        assert!(BASE64.decode(&envelope).is_ok());
    }

    #[test]
    fn nonce_makes_envelopes_unique() {
        let key = test_key();
        let e1 = encrypt(b"same payload", &key).unwrap();
        let e2 = encrypt(b"same payload", &key).unwrap();
        assert_ne!(e1, e2, "fresh nonce must make envelopes differ");
    }

    #[test]
    fn wrong_key_fails() {
        let envelope = encrypt(b"secret", &test_key()).unwrap();
        let wrong = DerivedKey::from_bytes([0xCDu8; 32]);
        assert!(decrypt(&envelope, &wrong).is_err());
    }

    #[test]
    fn not_base64_fails_without_panic() {
        let result = decrypt("not valid base64!!!", &test_key());
        assert!(matches!(result, Err(PassVaultError::DecryptionFailed)));
    }

    #[test]
    fn too_short_envelope_fails_without_panic() {
        // 20 decoded bytes: longer than a nonce, shorter than nonce + tag.
        let short = BASE64.encode([0u8; 20]);
        let result = decrypt(&short, &test_key());
        assert!(matches!(result, Err(PassVaultError::DecryptionFailed)));
    }

    #[test]
    fn empty_plaintext_roundtrips() {
        let key = test_key();
        let envelope = encrypt(b"", &key).unwrap();
        assert_eq!(decrypt(&envelope, &key).unwrap(), b"");
    }
}
