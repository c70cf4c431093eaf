//! In-memory credential store.

use super::{CredentialStore, Installation, OAuthProvider};
use crate::types::{Result, UserId};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory credential store for tests and the CLI.
///
/// Installations are lost when the store is dropped. One installation per
/// (user, provider); installing again replaces the previous grant.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    installations: RwLock<HashMap<(UserId, OAuthProvider), Installation>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a grant, returning the stored installation.
    pub async fn install(&self, user_id: UserId, provider: OAuthProvider) -> Installation {
        let installation = Installation::new(user_id.clone(), provider);
        self.installations
            .write()
            .await
            .insert((user_id, provider), installation.clone());
        tracing::debug!("Installed provider={} for user={}", provider, installation.user_id);
        installation
    }

    /// Remove a grant. Returns whether one existed.
    pub async fn uninstall(&self, user_id: &UserId, provider: OAuthProvider) -> bool {
        let removed = self
            .installations
            .write()
            .await
            .remove(&(user_id.clone(), provider))
            .is_some();
        tracing::debug!(
            "Uninstalled provider={} for user={} existed={}",
            provider,
            user_id,
            removed
        );
        removed
    }

    /// All installations held by a user, ordered by provider name.
    pub async fn installations_for(&self, user_id: &UserId) -> Vec<Installation> {
        let mut found: Vec<Installation> = self
            .installations
            .read()
            .await
            .values()
            .filter(|i| &i.user_id == user_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.provider.as_str().cmp(b.provider.as_str()));
        found
    }

    pub async fn len(&self) -> usize {
        self.installations.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.installations.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn has_installation(&self, user_id: &UserId, provider: OAuthProvider) -> Result<bool> {
        Ok(self
            .installations
            .read()
            .await
            .contains_key(&(user_id.clone(), provider)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::from_string(id.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_install_and_check() {
        let store = MemoryCredentialStore::new();
        assert!(!store.has_installation(&user("u-1"), OAuthProvider::Sid).await.unwrap());

        let installation = store.install(user("u-1"), OAuthProvider::Sid).await;
        assert_eq!(installation.provider, OAuthProvider::Sid);

        assert!(store.has_installation(&user("u-1"), OAuthProvider::Sid).await.unwrap());
        assert!(!store.has_installation(&user("u-2"), OAuthProvider::Sid).await.unwrap());
    }

    #[tokio::test]
    async fn test_reinstall_replaces() {
        let store = MemoryCredentialStore::new();
        let first = store.install(user("u-1"), OAuthProvider::Sid).await;
        let second = store.install(user("u-1"), OAuthProvider::Sid).await;

        assert_ne!(first.id, second.id);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.installations_for(&user("u-1")).await, vec![second]);
    }

    #[tokio::test]
    async fn test_uninstall() {
        let store = MemoryCredentialStore::new();
        store.install(user("u-1"), OAuthProvider::Sid).await;

        assert!(store.uninstall(&user("u-1"), OAuthProvider::Sid).await);
        assert!(!store.uninstall(&user("u-1"), OAuthProvider::Sid).await);
        assert!(store.is_empty().await);
    }

    #[test]
    fn test_blocking_use_with_tokio_test() {
        let store = MemoryCredentialStore::new();
        tokio_test::block_on(store.install(user("u-3"), OAuthProvider::Sid));
        let has = tokio_test::block_on(store.has_installation(&user("u-3"), OAuthProvider::Sid));
        assert!(has.unwrap());
    }
}
