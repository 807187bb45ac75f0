//! CSD sub-client: upload, inspect, replace and remove certificates.

use crate::client::FacturamaClient;
use crate::domain::csd::request::{CreateCsdRequest, DeleteCsdRequest, GetCsdRequest};
use crate::domain::csd::TaxEntityCsd;
use crate::error::SdkError;
use crate::shared::Validate;

const CSDS_PATH: &str = "/api-lite/csds";

pub struct Csds<'a> {
    pub(crate) client: &'a FacturamaClient,
}

impl<'a> Csds<'a> {
    /// Upload a CSD for a new issuing RFC.
    pub async fn create(&self, request: &CreateCsdRequest) -> Result<(), SdkError> {
        const OP: &str = "csds.create";
        request.validate().map_err(|e| SdkError::invalid(OP, e))?;
        self.client
            .http
            .send(reqwest::Method::POST, CSDS_PATH, request)
            .await
            .map_err(|e| SdkError::http(OP, e))
    }

    pub async fn get(&self, request: &GetCsdRequest) -> Result<TaxEntityCsd, SdkError> {
        const OP: &str = "csds.get";
        request.validate().map_err(|e| SdkError::invalid(OP, e))?;
        self.client
            .http
            .get(&request.path())
            .await
            .map_err(|e| SdkError::http(OP, e))
    }

    /// All CSDs stored for the account.
    pub async fn list(&self) -> Result<Vec<TaxEntityCsd>, SdkError> {
        self.client
            .http
            .get(CSDS_PATH)
            .await
            .map_err(|e| SdkError::http("csds.list", e))
    }

    /// Replace the CSD stored for `request.rfc`.
    pub async fn update(&self, request: &CreateCsdRequest) -> Result<(), SdkError> {
        const OP: &str = "csds.update";
        request.validate().map_err(|e| SdkError::invalid(OP, e))?;
        self.client
            .http
            .send(reqwest::Method::PUT, &request.path(), request)
            .await
            .map_err(|e| SdkError::http(OP, e))
    }

    pub async fn delete(&self, request: &DeleteCsdRequest) -> Result<(), SdkError> {
        const OP: &str = "csds.delete";
        request.validate().map_err(|e| SdkError::invalid(OP, e))?;
        self.client
            .http
            .delete(&request.path())
            .await
            .map_err(|e| SdkError::http(OP, e))
    }
}
