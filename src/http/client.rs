//! Low-level HTTP client: `FacturamaHttp`.
//!
//! Executes exactly one request per call against a base URL with Basic
//! Authentication and JSON headers, classifies the response and decodes
//! successful bodies. Never retries. Internal to the SDK; the endpoint
//! sub-clients wrap it.

use crate::error::{ApiError, HttpError, InternalError};

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use tokio_util::sync::CancellationToken;

/// Basic Authentication credentials for a Facturama account.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Authenticated transport for the Facturama REST API.
#[derive(Debug, Clone)]
pub struct FacturamaHttp {
    base_url: String,
    client: Client,
    credentials: Credentials,
    cancellation: Option<CancellationToken>,
}

impl FacturamaHttp {
    pub fn new(base_url: &str, credentials: Credentials, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            credentials,
            cancellation: None,
        }
    }

    /// A copy of this transport whose requests abort when `token` fires.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            cancellation: Some(token),
            ..self.clone()
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cancellation_token(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }

    // ── Typed wrappers ───────────────────────────────────────────────────

    pub async fn get<T: DeserializeOwned + Default>(&self, path: &str) -> Result<T, HttpError> {
        let body = self.execute(Method::GET, path, None::<&()>).await?;
        Self::decode(&body)
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let body = self.execute(Method::POST, path, Some(body)).await?;
        Self::decode(&body)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned + Default,
    {
        let body = self.execute(Method::PUT, path, Some(body)).await?;
        Self::decode(&body)
    }

    /// Send a body and ignore whatever the server answers on success.
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), HttpError> {
        self.execute(method, path, Some(body)).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), HttpError> {
        self.execute(Method::DELETE, path, None::<&()>)
            .await
            .map(|_| ())
    }

    /// DELETE whose response carries a result.
    pub async fn delete_as<T: DeserializeOwned + Default>(&self, path: &str) -> Result<T, HttpError> {
        let body = self.execute(Method::DELETE, path, None::<&()>).await?;
        Self::decode(&body)
    }

    /// Decode a success body. An empty body yields `T::default()`.
    pub fn decode<T: DeserializeOwned + Default>(body: &str) -> Result<T, HttpError> {
        if body.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(body).map_err(|e| InternalError::Deserialize(e).into())
    }

    // ── Round trip ───────────────────────────────────────────────────────

    /// Perform one request and return the raw success body.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<String, HttpError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(method = %method, path, "Facturama request");

        let mut req = self
            .client
            .request(method.clone(), &url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json");

        if let Some(b) = body {
            let bytes = serde_json::to_vec(b).map_err(InternalError::Serialize)?;
            req = req.body(bytes);
        }

        let round_trip = async {
            let resp = req.send().await.map_err(InternalError::Request)?;
            let status = resp.status();
            let text = resp.text().await.map_err(InternalError::ReadBody)?;
            Ok::<_, InternalError>((status, text))
        };

        let outcome = match &self.cancellation {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(InternalError::Cancelled),
                    result = round_trip => result,
                }
            }
            None => round_trip.await,
        };

        let (status, text) = outcome.map_err(|e| {
            tracing::warn!(method = %method, path, error = %e, "Facturama request failed");
            e
        })?;

        tracing::debug!(method = %method, path, status = status.as_u16(), "Facturama response");

        if status.as_u16() >= 400 {
            let err = ApiError::from_body(status.as_u16(), &text);
            tracing::warn!(method = %method, path, status = err.status, "{}", err);
            return Err(err.into());
        }

        Ok(text)
    }
}
