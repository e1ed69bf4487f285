//! The vault unlock flow and the unlocked-session handle.
//!
//! Unlock sequence: derive the key from the entered master password
//! (on a blocking thread — PBKDF2 takes tens of milliseconds), fetch
//! the account's verification token, then either verify against it or,
//! on the very first unlock, enroll one.  Enrolment is trust on first
//! use: with nothing to check against, the entered password is
//! implicitly accepted as correct.
//!
//! After unlock, [`VaultSession`] does the encode→encrypt writes and
//! decrypt→decode reads for vault items.  An item that fails to
//! decrypt or parse is skipped, never fatal to the whole listing.

use tracing::{debug, info, warn};

use crate::crypto::kdf::{self, DerivedKey};
use crate::crypto::verification::{create_verification_token, verify_master_password};
use crate::crypto::{decrypt, encrypt};
use crate::errors::{PassVaultError, Result};
use crate::store::{AccountStore, ItemId, StoredItem, VaultItemStore};
use crate::vault::{self, VaultEntry};

/// Derive a key from the master password and confirm it against the
/// account's stored verification token.
///
/// `salt` is the account email.  Returns the derived key on success;
/// a wrong password yields [`PassVaultError::IncorrectMasterPassword`],
/// never a raw crypto error.  Derivation runs to completion on a
/// blocking thread — it is not cancelled mid-way.
pub async fn unlock(
    password: &str,
    salt: &str,
    accounts: &dyn AccountStore,
) -> Result<DerivedKey> {
    let password = password.to_owned();
    let salt_owned = salt.to_owned();
    let key = tokio::task::spawn_blocking(move || kdf::derive_key(&password, &salt_owned))
        .await
        .map_err(|e| PassVaultError::KeyDerivationFailed(format!("derivation task: {e}")))??;

    match accounts.verification_token().await? {
        None => {
            // First unlock ever: enroll the entered password.
            info!("no verification token stored; enrolling (trust on first use)");
            let token = create_verification_token(&key)?;
            accounts.store_verification_token(&token).await?;
            Ok(key)
        }
        Some(token) => {
            if verify_master_password(&token, &key) {
                debug!("master password verified");
                Ok(key)
            } else {
                debug!("verification token did not decrypt under candidate key");
                Err(PassVaultError::IncorrectMasterPassword)
            }
        }
    }
}

/// An unlocked vault: the derived key plus the item read/write paths.
pub struct VaultSession {
    key: DerivedKey,
}

/// A decrypted item as returned by [`VaultSession::load_entries`].
#[derive(Debug, Clone)]
pub struct DecryptedItem {
    pub id: ItemId,
    pub entry: VaultEntry,
}

impl VaultSession {
    pub fn new(key: DerivedKey) -> Self {
        Self { key }
    }

    /// The session key, e.g. to place into a [`crate::session::SessionKeyCache`].
    pub fn key(&self) -> &DerivedKey {
        &self.key
    }

    /// Encrypt and store a new entry; returns the store-assigned id.
    pub async fn save_entry(
        &self,
        items: &dyn VaultItemStore,
        entry: &VaultEntry,
    ) -> Result<ItemId> {
        let envelope = self.seal(entry)?;
        items.put_item(&envelope).await
    }

    /// Re-encrypt and replace an existing entry.
    pub async fn update_entry(
        &self,
        items: &dyn VaultItemStore,
        id: &ItemId,
        entry: &VaultEntry,
    ) -> Result<()> {
        let envelope = self.seal(entry)?;
        items.update_item(id, &envelope).await
    }

    /// Fetch, decrypt, and decode every stored item.
    ///
    /// Items that fail to decrypt (tampered, or written under another
    /// key) or fail to parse are skipped with a warning; one bad item
    /// never fails the listing.
    pub async fn load_entries(&self, items: &dyn VaultItemStore) -> Result<Vec<DecryptedItem>> {
        let stored = items.list_items().await?;
        let mut entries = Vec::with_capacity(stored.len());

        for StoredItem { id, encrypted_data } in stored {
            match self.open(&encrypted_data) {
                Ok(entry) => entries.push(DecryptedItem { id, entry }),
                Err(e) => {
                    warn!(item_id = %id, error = %e, "skipping undecryptable vault item");
                }
            }
        }

        Ok(entries)
    }

    fn seal(&self, entry: &VaultEntry) -> Result<String> {
        let payload = vault::encode(entry)?;
        encrypt(&payload, &self.key)
    }

    fn open(&self, envelope: &str) -> Result<VaultEntry> {
        let payload = decrypt(envelope, &self.key)?;
        vault::decode(&payload)
    }
}
