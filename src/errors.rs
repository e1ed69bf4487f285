use thiserror::Error;

/// All errors that can occur in the PassVault crypto core.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong key, tampered ciphertext, or a malformed envelope.
    ///
    /// Deliberately carries no detail: AEAD cannot distinguish a wrong
    /// key from tampering, and the message must not leak which it was.
    #[error("Decryption failed — wrong key or corrupted data")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Vault errors ---
    #[error("Malformed vault record: {0}")]
    MalformedRecord(String),

    // --- Unlock errors ---
    #[error("Incorrect master password")]
    IncorrectMasterPassword,

    // --- External store errors ---
    #[error("Store error: {0}")]
    Store(String),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
