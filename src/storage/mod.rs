//! Bundle storage abstraction.
//!
//! The vault never talks to a specific database. Callers provide a
//! [`BundleStorage`] implementation over whatever backend holds the
//! encrypted bundles (a hosted row store, a local file, ...). The contract
//! is at-most-one-bundle-per-user key-value state with last-write-wins
//! semantics; a fresh encrypt fully replaces the stored bundle.

mod memory;

use std::future::Future;

pub use memory::InMemoryBundleStore;

use crate::error::OkxVaultError;
use crate::vault::CredentialBundle;

/// Trait for persisting encrypted credential bundles keyed by user id.
///
/// All methods are async and return `Result<T, OkxVaultError>`; backend
/// failures map to [`OkxVaultError::Storage`].
pub trait BundleStorage: Send + Sync {
    /// Store a bundle for a user. Idempotent upsert: replaces any existing
    /// bundle for the same user id.
    fn save(
        &self,
        user_id: &str,
        bundle: &CredentialBundle,
    ) -> impl Future<Output = Result<(), OkxVaultError>> + Send;

    /// Load the bundle for a user, or `None` if no bundle is stored.
    fn load(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<CredentialBundle>, OkxVaultError>> + Send;
}
