//! Traits for the server-side stores the crypto core talks to.
//!
//! The server is a dumb store for ciphertext: it holds one optional
//! verification token per account and a set of opaque envelopes per
//! vault.  Implementations typically wrap HTTP calls to the backend;
//! tests use in-memory fakes.

use async_trait::async_trait;

use crate::errors::Result;

/// Opaque identifier for a vault item, assigned by the store.
pub type ItemId = String;

/// One stored vault item: an id plus the envelope, verbatim.
///
/// The store never sees inside `encrypted_data`.
#[derive(Debug, Clone)]
pub struct StoredItem {
    pub id: ItemId,
    pub encrypted_data: String,
}

/// Per-account store for the master-password verification token.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// The stored verification token, or `None` if the account has
    /// never unlocked its vault.
    async fn verification_token(&self) -> Result<Option<String>>;

    /// Persist the verification token.
    ///
    /// The unlock flow only calls this when no token exists yet
    /// (trust on first use).  Implementations are expected to treat it
    /// as set-once, but the reference backend accepts overwrites — a
    /// caller who can reach this endpoint before first unlock can
    /// enroll their own token.
    async fn store_verification_token(&self, token: &str) -> Result<()>;
}

/// Store for a vault's encrypted items.  Envelopes pass through
/// unmodified in both directions.
#[async_trait]
pub trait VaultItemStore: Send + Sync {
    /// All stored items for the owning account.
    async fn list_items(&self) -> Result<Vec<StoredItem>>;

    /// Store a new envelope; returns the id the store assigned.
    async fn put_item(&self, encrypted_data: &str) -> Result<ItemId>;

    /// Replace the envelope for an existing item.
    async fn update_item(&self, id: &ItemId, encrypted_data: &str) -> Result<()>;

    /// Delete an item.
    async fn delete_item(&self, id: &ItemId) -> Result<()>;
}
