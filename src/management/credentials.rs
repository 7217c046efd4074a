use std::sync::Arc;

use chrono::Utc;

use crate::{
    management::store::{KEY_ACCESS_TOKEN, KEY_TOKEN_EXPIRY, KvStore, StoreError},
    types::Credential,
};

/// Reads and writes the bearer credential held by the key-value store.
///
/// The read side is the token provider used by every authorized request: a
/// pure lookup with no expiry validation, since expiry is enforced
/// server-side and observed as a 401.
pub struct CredentialManager<S> {
    store: Arc<S>,
}

impl<S> Clone for CredentialManager<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KvStore> CredentialManager<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Current bearer token, if one is stored.
    pub async fn access_token(&self) -> Option<String> {
        self.store.get(KEY_ACCESS_TOKEN).await
    }

    /// The full credential. Returns `None` unless both the token and a
    /// parseable expiry are present, so partial states never escape.
    pub async fn credential(&self) -> Option<Credential> {
        let access_token = self.store.get(KEY_ACCESS_TOKEN).await?;
        let expires_at = self
            .store
            .get(KEY_TOKEN_EXPIRY)
            .await?
            .parse::<i64>()
            .ok()?;

        Some(Credential {
            access_token,
            expires_at,
        })
    }

    /// Stores a freshly obtained token with an absolute expiry computed from
    /// its lifetime in seconds.
    pub async fn store_credential(
        &self,
        access_token: &str,
        expires_in_secs: u64,
    ) -> Result<(), StoreError> {
        let expires_at = Utc::now().timestamp_millis() + (expires_in_secs as i64) * 1000;
        self.store.set(KEY_ACCESS_TOKEN, access_token).await?;
        self.store
            .set(KEY_TOKEN_EXPIRY, &expires_at.to_string())
            .await
    }

    /// Whether a credential exists and its expiry is still in the future.
    /// A fast-path check only; the server remains the authority.
    pub async fn signed_in(&self) -> bool {
        match self.credential().await {
            Some(credential) => Utc::now().timestamp_millis() < credential.expires_at,
            None => false,
        }
    }

    /// Removes the stored credential.
    pub async fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(KEY_ACCESS_TOKEN).await?;
        self.store.remove(KEY_TOKEN_EXPIRY).await
    }
}
