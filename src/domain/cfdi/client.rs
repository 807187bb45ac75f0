//! CFDI sub-client: issue, cancel, fetch and render invoices.

use crate::client::FacturamaClient;
use crate::domain::cfdi::request::{
    CancelCfdiRequest, CreateCfdiV4Request, GetCfdiFileRequest, GetCfdiRequest,
};
use crate::domain::cfdi::{CancelationStatus, CfdiInfo, FileContent};
use crate::error::SdkError;
use crate::shared::Validate;

pub struct Cfdis<'a> {
    pub(crate) client: &'a FacturamaClient,
}

impl<'a> Cfdis<'a> {
    /// Issue a CFDI 4.0 on behalf of the issuer named in the request.
    pub async fn create_v4(&self, request: &CreateCfdiV4Request) -> Result<CfdiInfo, SdkError> {
        const OP: &str = "cfdis.create_v4";
        request.validate().map_err(|e| SdkError::invalid(OP, e))?;
        self.client
            .http
            .post("/api-lite/3/cfdis", request)
            .await
            .map_err(|e| SdkError::http(OP, e))
    }

    /// Cancel an issued CFDI.
    pub async fn cancel(&self, request: &CancelCfdiRequest) -> Result<CancelationStatus, SdkError> {
        const OP: &str = "cfdis.cancel";
        request.validate().map_err(|e| SdkError::invalid(OP, e))?;
        self.client
            .http
            .delete_as(&request.path())
            .await
            .map_err(|e| SdkError::http(OP, e))
    }

    pub async fn get(&self, request: &GetCfdiRequest) -> Result<CfdiInfo, SdkError> {
        const OP: &str = "cfdis.get";
        request.validate().map_err(|e| SdkError::invalid(OP, e))?;
        self.client
            .http
            .get(&request.path())
            .await
            .map_err(|e| SdkError::http(OP, e))
    }

    /// Download a rendered PDF, HTML or XML. The content is base64 encoded;
    /// see [`FileContent::decode`].
    pub async fn file(&self, request: &GetCfdiFileRequest) -> Result<FileContent, SdkError> {
        const OP: &str = "cfdis.file";
        request.validate().map_err(|e| SdkError::invalid(OP, e))?;
        self.client
            .http
            .get(&request.path())
            .await
            .map_err(|e| SdkError::http(OP, e))
    }
}
