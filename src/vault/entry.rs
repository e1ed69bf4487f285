//! The plaintext vault record and its byte codec.
//!
//! A `VaultEntry` exists in plaintext only in memory.  Before it goes
//! anywhere near the server it is encoded to JSON bytes and sealed in
//! an envelope; coming back it is decrypted and decoded.  The JSON
//! shape is frozen — blobs written by older clients must keep parsing.

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// A single credential record.
///
/// Every field defaults to the empty string on decode, so records
/// written without e.g. notes still parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultEntry {
    /// Display name (e.g. "Gmail").
    #[serde(default)]
    pub title: String,

    /// Username or login email for the site.
    #[serde(default)]
    pub username: String,

    /// The stored password.
    #[serde(default)]
    pub password: String,

    /// Site URL.
    #[serde(default)]
    pub url: String,

    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

/// Encode an entry to the JSON bytes that get encrypted.
pub fn encode(entry: &VaultEntry) -> Result<Vec<u8>> {
    serde_json::to_vec(entry).map_err(|e| PassVaultError::MalformedRecord(format!("encode: {e}")))
}

/// Decode a decrypted payload back into a `VaultEntry`.
///
/// Fails with [`PassVaultError::MalformedRecord`] if the bytes are not
/// a JSON object of the expected shape.
pub fn decode(bytes: &[u8]) -> Result<VaultEntry> {
    serde_json::from_slice(bytes).map_err(|e| PassVaultError::MalformedRecord(format!("decode: {e}")))
}
