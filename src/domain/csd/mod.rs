//! CSD (Certificado de Sello Digital) management for issuing taxpayers.
//!
//! A CSD is the certificate/private-key pair the SAT issues to a taxpayer.
//! Facturama stores one per RFC and uses it to seal every CFDI issued under
//! that RFC.

#[cfg(feature = "http")]
pub mod client;
pub mod request;

pub use request::{CreateCsdRequest, DeleteCsdRequest, GetCsdRequest};

use crate::shared::serde_util::null_as_default;
use crate::shared::FacturamaTime;
use serde::{Deserialize, Serialize};

/// A stored CSD as returned by `GET /api-lite/csds[/{rfc}]`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TaxEntityCsd {
    #[serde(deserialize_with = "null_as_default")]
    pub rfc: String,
    /// Base64 `.cer` contents.
    #[serde(deserialize_with = "null_as_default")]
    pub certificate: String,
    /// Base64 `.key` contents.
    #[serde(deserialize_with = "null_as_default")]
    pub private_key: String,
    #[serde(deserialize_with = "null_as_default")]
    pub private_key_password: String,
    #[serde(skip_serializing_if = "FacturamaTime::is_zero")]
    pub csd_expiration_date: FacturamaTime,
    #[serde(skip_serializing_if = "FacturamaTime::is_zero")]
    pub upload_date: FacturamaTime,
}
