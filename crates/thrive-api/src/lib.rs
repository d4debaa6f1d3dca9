//! thrive-api
//!
//! Typed REST client for the Right2Thrive UK platform API. JSON in, JSON
//! out, bearer-token auth, base URL from an environment-supplied origin.
//! Every response is validated into a typed record at this boundary — the
//! rest of the workspace never sees raw JSON. There is no retry or backoff
//! anywhere: a failed request is retried only by explicit user action.

pub mod assessments;
pub mod auth;
pub mod bookings;
pub mod chat;
pub mod contact;
pub mod error;
pub mod goals;
pub mod therapists;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use error::ApiError;

/// Client configuration. The origin comes from the deployment environment,
/// never from code.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API origin, e.g. `https://api.right2thrive.example`.
    pub base_url: String,
    /// Path of the broadcasting-auth endpoint used to join private realtime
    /// channels.
    pub broadcast_auth_path: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            broadcast_auth_path: "/broadcasting/auth".to_string(),
        }
    }

    /// Read the API origin from `THRIVE_API_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = std::env::var("THRIVE_API_URL")
            .map_err(|_| ApiError::Config("set THRIVE_API_URL env var".to_string()))?;
        Ok(Self::new(base_url))
    }
}

/// The `{"data": ...}` envelope the API wraps collection responses in.
#[derive(Debug, Deserialize)]
pub(crate) struct Data<T> {
    pub data: T,
}

/// Plain acknowledgement body returned by fire-and-forget endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// The API client. Cheap to clone; the token travels with the clone.
/// No `Debug` impl: the bearer token must never end up in log output.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            token: None,
        }
    }

    /// Attach a bearer token to every subsequent call.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.authed(self.http.get(self.url(path))).send().await?;
        decode(resp).await
    }

    pub(crate) async fn get_json_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        let resp = self
            .authed(self.http.get(self.url(path)).query(query))
            .send()
            .await?;
        decode(resp).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .authed(self.http.post(self.url(path)).json(body))
            .send()
            .await?;
        decode(resp).await
    }

    pub(crate) async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self
            .authed(self.http.put(self.url(path)).json(body))
            .send()
            .await?;
        decode(resp).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.authed(self.http.delete(self.url(path))).send().await?;
        decode(resp).await
    }
}

/// Turn a response into a typed value or an [`ApiError`]. Success bodies
/// that fail to deserialize are a schema violation, not a transport error.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    if status.is_success() {
        serde_json::from_slice(&bytes).map_err(|e| ApiError::Schema(e.to_string()))
    } else {
        Err(error::classify_error(status.as_u16(), &bytes))
    }
}
