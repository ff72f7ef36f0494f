//! In-memory bundle store for tests and embedded use.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::error::OkxVaultError;
use crate::storage::BundleStorage;
use crate::vault::CredentialBundle;

/// A [`BundleStorage`] backed by an in-process map.
///
/// # Example
///
/// ```rust
/// use okx_vault_client::storage::{BundleStorage, InMemoryBundleStore};
/// use okx_vault_client::vault::{self, CredentialRecord};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), okx_vault_client::OkxVaultError> {
/// let store = InMemoryBundleStore::new();
/// let bundle = vault::encrypt("hunter2", &CredentialRecord::new("k", "s", "p"))?;
///
/// store.save("user-1", &bundle).await?;
/// assert_eq!(store.load("user-1").await?, Some(bundle));
/// assert_eq!(store.load("user-2").await?, None);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBundleStore {
    bundles: RwLock<HashMap<String, CredentialBundle>>,
}

impl InMemoryBundleStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the bundle for a user, if any.
    pub async fn remove(&self, user_id: &str) -> Option<CredentialBundle> {
        self.bundles.write().await.remove(user_id)
    }

    /// Number of stored bundles.
    pub async fn len(&self) -> usize {
        self.bundles.read().await.len()
    }

    /// Check if the store is empty.
    pub async fn is_empty(&self) -> bool {
        self.bundles.read().await.is_empty()
    }
}

impl BundleStorage for InMemoryBundleStore {
    async fn save(&self, user_id: &str, bundle: &CredentialBundle) -> Result<(), OkxVaultError> {
        self.bundles
            .write()
            .await
            .insert(user_id.to_string(), bundle.clone());
        Ok(())
    }

    async fn load(&self, user_id: &str) -> Result<Option<CredentialBundle>, OkxVaultError> {
        Ok(self.bundles.read().await.get(user_id).cloned())
    }
}
