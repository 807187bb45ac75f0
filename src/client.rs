//! High-level client: `FacturamaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::cfdi::client::Cfdis;
use crate::domain::csd::client::Csds;
use crate::error::ConfigError;
use crate::http::{Credentials, FacturamaHttp};
use crate::network::{Environment, DEFAULT_TIMEOUT};

use std::time::Duration;
use tokio_util::sync::CancellationToken;

// Re-export sub-client types for convenience.
pub use crate::domain::cfdi::client::Cfdis as CfdisClient;
pub use crate::domain::csd::client::Csds as CsdsClient;

/// The primary entry point for the Facturama SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.cfdis()`, `client.csds()`.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FacturamaClient {
    pub(crate) http: FacturamaHttp,
}

impl FacturamaClient {
    pub fn builder(username: &str, password: &str) -> FacturamaClientBuilder {
        FacturamaClientBuilder::new(username, password)
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn cfdis(&self) -> Cfdis<'_> {
        Cfdis { client: self }
    }

    pub fn csds(&self) -> Csds<'_> {
        Csds { client: self }
    }

    /// A clone whose requests abort with
    /// [`InternalError::Cancelled`](crate::error::InternalError::Cancelled)
    /// once `token` is cancelled.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            http: self.http.with_cancellation(token),
        }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

/// Options are applied in call order, so a later `environment` overrides an
/// earlier `base_url` and vice versa.
#[derive(Debug)]
pub struct FacturamaClientBuilder {
    credentials: Credentials,
    base_url: String,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
    cancellation_token: Option<CancellationToken>,
}

impl FacturamaClientBuilder {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            base_url: Environment::default().base_url().to_string(),
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
            cancellation_token: None,
        }
    }

    /// Configure from `FACTURAMA_*` environment variables.
    ///
    /// `FACTURAMA_USERNAME` and `FACTURAMA_PASSWORD` are required;
    /// `FACTURAMA_ENVIRONMENT`, `FACTURAMA_BASE_URL` and
    /// `FACTURAMA_TIMEOUT_SECS` are optional.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVar(name))
        };
        let optional = |name: &'static str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut builder = Self::new(
            &required("FACTURAMA_USERNAME")?,
            &required("FACTURAMA_PASSWORD")?,
        );

        if let Some(value) = optional("FACTURAMA_ENVIRONMENT") {
            let env = value.parse::<Environment>().map_err(|_| ConfigError::InvalidVar {
                name: "FACTURAMA_ENVIRONMENT",
                value: value.clone(),
            })?;
            builder = builder.environment(env);
        }
        if let Some(url) = optional("FACTURAMA_BASE_URL") {
            builder = builder.base_url(&url);
        }
        if let Some(value) = optional("FACTURAMA_TIMEOUT_SECS") {
            let secs = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidVar {
                    name: "FACTURAMA_TIMEOUT_SECS",
                    value: value.clone(),
                })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(builder)
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.base_url = environment.base_url().to_string();
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout. Ignored when a custom `http_client` is supplied.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a preconfigured `reqwest::Client` as is.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn build(self) -> Result<FacturamaClient, ConfigError> {
        let client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(ConfigError::HttpClient)?,
        };

        let mut http = FacturamaHttp::new(&self.base_url, self.credentials, client);
        if let Some(token) = self.cancellation_token {
            http = http.with_cancellation(token);
        }

        tracing::debug!(base_url = http.base_url(), "Facturama client ready");
        Ok(FacturamaClient { http })
    }
}
