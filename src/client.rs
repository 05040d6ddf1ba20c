//! HTTP client for the Outbreaks Near Me API.
//!
//! [`Client`] is the public entry point. It hands a shared [`RequestExecutor`]
//! to each locator:
//!
//! - [`Client::user_data`]: user-submitted symptom reports and totals
//! - [`Client::cdc_data`]: CDC county-level statistics
//!
//! # Sessions
//!
//! A caller may inject its own `reqwest::Client`, which is used as-is and never
//! torn down here. Without one, every request builds a session scoped to that
//! call and drops it on all exit paths.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cdc::CdcData;
use crate::config::ClientConfig;
use crate::errors::RequestError;
use crate::user::UserData;

/// Entry point for all API calls.
#[derive(Clone)]
pub struct Client {
    /// User-submitted report data.
    pub user_data: UserData,

    /// CDC-sourced county data.
    pub cdc_data: CdcData,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Create a client with default settings and self-owned sessions.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default(), None)
    }

    /// Create a client that sends every request through `session`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let session = reqwest::Client::new();
    /// let client = Client::with_session(session);
    /// let nearest = client.cdc_data.get_nearest(39.7251035, -104.99918).await?;
    /// ```
    pub fn with_session(session: reqwest::Client) -> Self {
        Self::with_config(ClientConfig::default(), Some(session))
    }

    /// Create a client from explicit settings and an optional injected session.
    pub fn with_config(config: ClientConfig, session: Option<reqwest::Client>) -> Self {
        let executor = RequestExecutor::new(config, session);

        Self {
            user_data: UserData::new(executor.clone()),
            cdc_data: CdcData::new(executor),
        }
    }
}

/// Performs GET-style requests against the API root and decodes JSON bodies.
///
/// Cloning is cheap; clones share the same configuration and session.
#[derive(Clone)]
pub struct RequestExecutor {
    inner: Arc<ExecutorInner>,
}

struct ExecutorInner {
    config: ClientConfig,
    session: Option<reqwest::Client>,
}

impl RequestExecutor {
    pub fn new(config: ClientConfig, session: Option<reqwest::Client>) -> Self {
        Self {
            inner: Arc::new(ExecutorInner { config, session }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Whether requests go through a caller-supplied session.
    pub fn has_external_session(&self) -> bool {
        self.inner.session.is_some()
    }

    /// Send a request to `path` (relative to the API root) and decode the body.
    ///
    /// # Arguments
    ///
    /// * `method` - HTTP method; every endpoint this crate uses is `GET`
    /// * `path` - Endpoint path such as `markers/US`
    /// * `params` - Optional query parameters
    ///
    /// # Errors
    ///
    /// Non-2xx statuses, transport failures, and bodies that do not decode as
    /// `T` are all reported as [`RequestError`].
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: Option<&[(&str, &str)]>,
    ) -> Result<T, RequestError> {
        // Self-owned sessions live only for this call and drop on every return.
        let session = match &self.inner.session {
            Some(session) => session.clone(),
            None => reqwest::Client::builder()
                .timeout(self.inner.config.timeout)
                .build()
                .map_err(RequestError::Session)?,
        };

        let url = format!("{}/{}", self.inner.config.base_url, path);
        let mut request = session.request(method, &url);
        if let Some(params) = params {
            request = request.query(params);
        }

        let response = request.send().await.map_err(|source| RequestError::Transport {
            endpoint: path.to_string(),
            source,
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                endpoint: path.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| RequestError::Transport {
                endpoint: path.to_string(),
                source,
            })?;

        let data = serde_json::from_slice::<T>(&body).map_err(|source| RequestError::Decode {
            endpoint: path.to_string(),
            source,
        })?;

        debug!(url = %url, bytes = body.len(), "Data returned for /{}", path);

        Ok(data)
    }

    /// `GET` without query parameters.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        self.request(Method::GET, path, None).await
    }
}
