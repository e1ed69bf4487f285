//! Session-scoped cache for the derived key.
//!
//! Re-deriving the key costs 100 000 PBKDF2 iterations, so after a
//! successful unlock the key is kept in memory for the rest of the
//! browsing session.  The cache is an owned value with an explicit
//! lifecycle — no ambient globals — and must be cleared on logout.
//! It is never written to durable storage.

use crate::crypto::kdf::DerivedKey;

/// Holds the current session's derived key, if the vault is unlocked.
#[derive(Default)]
pub struct SessionKeyCache {
    key: Option<DerivedKey>,
}

impl SessionKeyCache {
    /// Create an empty (locked) cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache the key after a successful unlock.
    pub fn store(&mut self, key: DerivedKey) {
        self.key = Some(key);
    }

    /// The cached key, or `None` if the vault is locked.
    pub fn key(&self) -> Option<&DerivedKey> {
        self.key.as_ref()
    }

    /// Whether a key is currently cached.
    pub fn is_unlocked(&self) -> bool {
        self.key.is_some()
    }

    /// Drop the cached key (logout).  The key zeroizes itself on drop.
    pub fn clear(&mut self) {
        self.key = None;
    }
}
