use std::sync::Arc;

use crate::{
    config, error,
    management::{CredentialManager, FileStore, KEY_SWIPE_HINT_SEEN, KvStore},
    success,
};

pub async fn auth(token: String, expires_in: u64) {
    let store = Arc::new(FileStore::new(config::store_dir()));
    let credentials = CredentialManager::new(store);

    if let Err(e) = credentials.store_credential(&token, expires_in).await {
        error!("Failed to store credential: {}", e);
    }

    success!("Signed in. Token valid for {} seconds.", expires_in);
}

pub async fn logout() {
    let store = Arc::new(FileStore::new(config::store_dir()));
    let credentials = CredentialManager::new(Arc::clone(&store));

    if let Err(e) = credentials.clear().await {
        error!("Failed to clear credential: {}", e);
    }
    if let Err(e) = store.remove(KEY_SWIPE_HINT_SEEN).await {
        error!("Failed to clear session state: {}", e);
    }

    success!("Signed out.");
}
