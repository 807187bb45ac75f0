//! CSD request DTOs and their validators.

use crate::error::ValidationError;
use crate::shared::encoding::file_to_base64;
use crate::shared::validate::{require, Validate};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Body for `POST /api-lite/csds` and `PUT /api-lite/csds/{rfc}`.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCsdRequest {
    pub rfc: String,
    /// Base64 `.cer` contents.
    pub certificate: String,
    /// Base64 `.key` contents.
    pub private_key: String,
    pub private_key_password: String,
}

impl CreateCsdRequest {
    pub fn new(
        rfc: impl Into<String>,
        certificate: impl Into<String>,
        private_key: impl Into<String>,
        private_key_password: impl Into<String>,
    ) -> Self {
        Self {
            rfc: rfc.into(),
            certificate: certificate.into(),
            private_key: private_key.into(),
            private_key_password: private_key_password.into(),
        }
    }

    /// Build a request from the `.cer` and `.key` files the SAT hands out.
    pub fn from_files(
        rfc: impl Into<String>,
        certificate_path: impl AsRef<Path>,
        private_key_path: impl AsRef<Path>,
        private_key_password: impl Into<String>,
    ) -> io::Result<Self> {
        Ok(Self::new(
            rfc,
            file_to_base64(certificate_path)?,
            file_to_base64(private_key_path)?,
            private_key_password,
        ))
    }

    pub(crate) fn path(&self) -> String {
        csd_path(&self.rfc)
    }
}

// Keeps key material out of logs.
impl std::fmt::Debug for CreateCsdRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateCsdRequest")
            .field("rfc", &self.rfc)
            .field("certificate", &format_args!("<{} bytes>", self.certificate.len()))
            .field("private_key", &"<redacted>")
            .field("private_key_password", &"<redacted>")
            .finish()
    }
}

impl Validate for CreateCsdRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.rfc, "RFC is required")?;
        require(&self.certificate, "Certificate is required")?;
        require(&self.private_key, "PrivateKey is required")?;
        require(&self.private_key_password, "PrivateKeyPassword is required")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCsdRequest {
    pub rfc: String,
}

impl GetCsdRequest {
    pub fn new(rfc: impl Into<String>) -> Self {
        Self { rfc: rfc.into() }
    }

    pub(crate) fn path(&self) -> String {
        csd_path(&self.rfc)
    }
}

impl Validate for GetCsdRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.rfc, "RFC is required")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteCsdRequest {
    pub rfc: String,
}

impl DeleteCsdRequest {
    pub fn new(rfc: impl Into<String>) -> Self {
        Self { rfc: rfc.into() }
    }

    pub(crate) fn path(&self) -> String {
        csd_path(&self.rfc)
    }
}

impl Validate for DeleteCsdRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.rfc, "RFC is required")
    }
}

fn csd_path(rfc: &str) -> String {
    format!("/api-lite/csds/{}", urlencoding::encode(rfc))
}
