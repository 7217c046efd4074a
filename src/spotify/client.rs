use std::sync::Arc;

use reqwest::{Client, Response, StatusCode, header};
use serde::de::DeserializeOwned;

use crate::management::{
    CredentialManager, EpisodeAck, KEY_SWIPE_HINT_SEEN, KvStore, Navigator, SessionGuard,
    SessionNotifier,
};

/// Failure taxonomy for every Web API operation.
///
/// `MalformedResponse` is a decode failure on a 2xx body; callers should
/// treat it exactly like `RequestFailed`. None of these are retried by the
/// client — retry policy belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// An authorized call observed HTTP 401. The session guard has already
    /// run (or detected an episode in progress); the caller should stop
    /// retrying and expect navigation back to sign-in.
    #[error("session expired, please sign in again")]
    SessionExpired,

    #[error("{operation} request failed with status {status}")]
    RequestFailed {
        operation: &'static str,
        status: StatusCode,
    },

    #[error("{operation} response is missing expected fields: {source}")]
    MalformedResponse {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation} pagination exceeded {pages} pages without a terminal cursor")]
    PaginationExceeded {
        operation: &'static str,
        pages: usize,
    },

    #[error("network failure during {operation}: {source}")]
    Network {
        operation: &'static str,
        #[source]
        source: reqwest::Error,
    },
}

/// Authorized Spotify Web API client.
///
/// Holds the HTTP client, the injected base URL, the credential manager
/// reading the shared key-value store, and the process-wide session guard
/// with its two collaborators. Handles are cheap to clone and clones share
/// the guard, so any number of concurrent in-flight requests observe a
/// single expiration episode.
pub struct ApiClient<S> {
    http: Client,
    base_url: String,
    credentials: CredentialManager<S>,
    store: Arc<S>,
    guard: SessionGuard,
    notifier: Arc<dyn SessionNotifier>,
    navigator: Arc<dyn Navigator>,
}

impl<S> Clone for ApiClient<S> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            credentials: self.credentials.clone(),
            store: Arc::clone(&self.store),
            guard: self.guard.clone(),
            notifier: Arc::clone(&self.notifier),
            navigator: Arc::clone(&self.navigator),
        }
    }
}

impl<S: KvStore> ApiClient<S> {
    pub fn new(
        base_url: impl Into<String>,
        store: Arc<S>,
        notifier: Arc<dyn SessionNotifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            http: Client::new(),
            base_url,
            credentials: CredentialManager::new(Arc::clone(&store)),
            store,
            guard: SessionGuard::new(),
            notifier,
            navigator,
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Runs the session-expiration path. The first caller per episode wins
    /// the guard and performs the side effects: remove the credential and
    /// the session-scoped hint flag, then hand the acknowledgment to the
    /// notifier. Every other concurrent observer is a no-op here and just
    /// surfaces its own `SessionExpired` to its caller.
    async fn handle_unauthorized(&self) {
        if !self.guard.try_begin_episode() {
            return;
        }

        let _ = self.credentials.clear().await;
        let _ = self.store.remove(KEY_SWIPE_HINT_SEEN).await;

        let ack = EpisodeAck::new(self.guard.clone(), Arc::clone(&self.navigator));
        self.notifier.notify_expired(ack);
    }

    /// Current bearer token. An absent credential is treated as an already
    /// expired session: same guard path, same error, no doomed request.
    async fn bearer_token(&self) -> Result<String, ApiError> {
        match self.credentials.access_token().await {
            Some(token) => Ok(token),
            None => {
                self.handle_unauthorized().await;
                Err(ApiError::SessionExpired)
            }
        }
    }

    async fn read_success_body(
        &self,
        operation: &'static str,
        response: Response,
    ) -> Result<String, ApiError> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            self.handle_unauthorized().await;
            return Err(ApiError::SessionExpired);
        }
        if !status.is_success() {
            return Err(ApiError::RequestFailed { operation, status });
        }

        response
            .text()
            .await
            .map_err(|source| ApiError::Network { operation, source })
    }

    /// Authorized GET against a path below the configured base URL.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path_and_query: &str,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        self.get_json_url(operation, &url).await
    }

    /// Authorized GET against an absolute URL, as handed out by cursor
    /// pagination.
    pub(crate) async fn get_json_url<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
    ) -> Result<T, ApiError> {
        let token = self.bearer_token().await?;

        let response = self
            .http
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;

        let body = self.read_success_body(operation, response).await?;
        serde_json::from_str(&body).map_err(|source| ApiError::MalformedResponse {
            operation,
            source,
        })
    }

    /// Authorized bodyless PUT against a path below the configured base URL.
    pub(crate) async fn put_empty(
        &self,
        operation: &'static str,
        path_and_query: &str,
    ) -> Result<(), ApiError> {
        let token = self.bearer_token().await?;
        let url = format!("{}{}", self.base_url, path_and_query);

        let response = self
            .http
            .put(&url)
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|source| ApiError::Network { operation, source })?;

        self.read_success_body(operation, response).await?;
        Ok(())
    }
}
