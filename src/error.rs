//! Unified SDK error types.
//!
//! Every endpoint returns exactly one of three error kinds:
//!
//! - [`SdkError::Invalid`]: the request failed local validation and never
//!   reached the network.
//! - [`SdkError::Internal`]: transport-level failure (connection, timeout,
//!   serialization, cancellation).
//! - [`SdkError::Api`]: Facturama answered with HTTP status >= 400.

use crate::shared::serde_util::null_as_default;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Coarse classification of an [`SdkError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Invalid,
    Internal,
    Api,
}

/// Top-level SDK error, tagged with the operation that produced it.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("{op}: invalid request: {source}")]
    Invalid {
        op: &'static str,
        #[source]
        source: ValidationError,
    },

    #[error("{op}: {source}")]
    Internal {
        op: &'static str,
        #[source]
        source: InternalError,
    },

    #[error("{op}: {source}")]
    Api {
        op: &'static str,
        #[source]
        source: ApiError,
    },
}

impl SdkError {
    pub(crate) fn invalid(op: &'static str, source: ValidationError) -> Self {
        Self::Invalid { op, source }
    }

    pub(crate) fn http(op: &'static str, source: HttpError) -> Self {
        match source {
            HttpError::Internal(source) => Self::Internal { op, source },
            HttpError::Api(source) => Self::Api { op, source },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Invalid { .. } => ErrorKind::Invalid,
            Self::Internal { .. } => ErrorKind::Internal,
            Self::Api { .. } => ErrorKind::Api,
        }
    }

    /// Name of the operation that failed, e.g. `cfdis.cancel`.
    pub fn op(&self) -> &'static str {
        match self {
            Self::Invalid { op, .. } | Self::Internal { op, .. } | Self::Api { op, .. } => op,
        }
    }

    /// HTTP status code, for API errors.
    pub fn status(&self) -> Option<u16> {
        self.api_error().map(|e| e.status)
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn internal_error(&self) -> Option<&InternalError> {
        match self {
            Self::Internal { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A request failed local validation. Names the first violated rule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Transport-level failures. Never retried.
#[derive(Error, Debug)]
pub enum InternalError {
    #[cfg(feature = "http")]
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[cfg(feature = "http")]
    #[error("failed to read response body: {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("failed to serialize request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("failed to deserialize response: {0}")]
    Deserialize(#[source] serde_json::Error),

    #[error("request cancelled")]
    Cancelled,
}

impl InternalError {
    pub fn is_timeout(&self) -> bool {
        match self {
            #[cfg(feature = "http")]
            Self::Request(e) | Self::ReadBody(e) => e.is_timeout(),
            _ => false,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Facturama returned HTTP status >= 400.
///
/// When the body is not the documented JSON error payload, `response` is left
/// empty and only `raw_body` and `status` are populated.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: u16,
    pub response: ErrorResponse,
    pub raw_body: String,
}

impl ApiError {
    /// Classify an error response body.
    pub fn from_body(status: u16, body: &str) -> Self {
        let response = serde_json::from_str::<ErrorResponse>(body).unwrap_or_default();
        Self {
            status,
            response,
            raw_body: body.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.response.message
    }

    pub fn model_state(&self) -> &ModelState {
        &self.response.model_state
    }

    fn summary(&self) -> String {
        let mut out = if self.response.message.is_empty() {
            self.raw_body.trim().to_string()
        } else {
            self.response.message.clone()
        };
        let details = self.response.model_state.entries();
        if !details.is_empty() {
            out.push_str(" (");
            out.push_str(&details.join("; "));
            out.push(')');
        }
        out
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Facturama API error {}: {}", self.status, self.summary())
    }
}

impl std::error::Error for ApiError {}

/// JSON payload returned on HTTP 4xx/5xx.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ErrorResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub model_state: ModelState,
}

/// Field-level validation errors reported by the API, keyed by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModelState {
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub message: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub certificate: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", deserialize_with = "null_as_default")]
    pub key: Vec<String>,
}

impl ModelState {
    pub fn is_empty(&self) -> bool {
        self.message.is_empty() && self.certificate.is_empty() && self.key.is_empty()
    }

    fn entries(&self) -> Vec<String> {
        let categories = [
            ("Message", &self.message),
            ("Certificate", &self.certificate),
            ("Key", &self.key),
        ];
        categories
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(name, values)| format!("{}: {}", name, values.join(", ")))
            .collect()
    }
}

/// Errors returned by the transport layer.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error(transparent)]
    Internal(#[from] InternalError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Errors raised while assembling a client.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },

    #[cfg(feature = "http")]
    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}
