//! CFDI domain: issued invoices, their rendered files and cancellation status.

#[cfg(feature = "http")]
pub mod client;
pub mod request;
pub mod wire;

pub use request::{CancelCfdiRequest, CreateCfdiV4Request, GetCfdiFileRequest, GetCfdiRequest};

use crate::shared::serde_util::null_as_default;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── CfdiInfo ───────────────────────────────────────────────────────────────

/// An issued CFDI as returned by create and fetch.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct CfdiInfo {
    /// Facturama document id (not the SAT UUID, see [`TaxStamp::uuid`]).
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    /// Human-readable type, e.g. `"ingreso"`.
    #[serde(deserialize_with = "null_as_default")]
    pub cfdi_type: String,
    #[serde(rename = "Type")]
    pub document_type: Option<String>,
    pub serie: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub folio: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    pub cert_number: Option<String>,
    pub payment_terms: Option<String>,
    pub payment_conditions: Option<String>,
    pub payment_method: Option<String>,
    pub payment_account_number: Option<String>,
    pub payment_bank_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub expedition_place: String,
    pub exchange_rate: Option<Decimal>,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtotal: Decimal,
    pub discount: Option<Decimal>,
    #[serde(deserialize_with = "null_as_default")]
    pub total: Decimal,
    pub observations: Option<String>,
    pub order_number: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub issuer: IssuerInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub receiver: ReceiverInfo,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<ItemInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub taxes: Vec<TaxInfo>,
    #[serde(deserialize_with = "null_as_default")]
    pub complement: CfdiComplement,
}

impl CfdiInfo {
    /// SAT folio fiscal (UUID) from the tax stamp, when stamped.
    pub fn uuid(&self) -> Option<&str> {
        let uuid = self.complement.tax_stamp.uuid.as_str();
        (!uuid.is_empty()).then_some(uuid)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct IssuerInfo {
    pub fiscal_regime: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub rfc: String,
    pub tax_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ReceiverInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub rfc: String,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct ItemInfo {
    pub discount: Option<Decimal>,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: Decimal,
    pub unit: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit_value: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub total: Decimal,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TaxInfo {
    #[serde(deserialize_with = "null_as_default")]
    pub total: Decimal,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rate: Decimal,
    #[serde(rename = "Type")]
    pub tax_type: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct CfdiComplement {
    #[serde(deserialize_with = "null_as_default")]
    pub tax_stamp: TaxStamp,
}

/// Timbre fiscal digital: the SAT stamp applied by the certification provider.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct TaxStamp {
    #[serde(deserialize_with = "null_as_default")]
    pub uuid: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub cfdi_sign: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sat_cert_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub sat_sign: String,
    #[serde(deserialize_with = "null_as_default")]
    pub rfc_prov_certif: String,
}

// ─── Files ──────────────────────────────────────────────────────────────────

/// A rendered CFDI file (PDF, HTML or XML).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct FileContent {
    /// Always `"base64"` in practice.
    #[serde(deserialize_with = "null_as_default")]
    pub content_encoding: String,
    /// `"pdf"`, `"html"` or `"xml"`.
    #[serde(deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content_length: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
}

impl FileContent {
    /// Decode the base64 payload into raw bytes.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        use base64::Engine;
        base64::engine::general_purpose::STANDARD.decode(&self.content)
    }
}

// ─── Cancellation ───────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase", default)]
pub struct CancelationStatus {
    /// e.g. `"Ok"`, `"canceled"`, `"pending"`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    pub message: Option<String>,
    pub uuid: Option<String>,
    pub request_date: Option<String>,
    pub acuse_xml_base64: Option<String>,
    pub cancelation_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cfdi_info_deserialize() {
        let json = r#"{
            "Id": "VRHXPSsy-Xx0i0LyHNziJA2",
            "CfdiType": "ingreso",
            "Type": "issued",
            "Serie": null,
            "Folio": "Test-001",
            "Date": "2025-05-20T10:11:12",
            "CertNumber": "30001000000500003416",
            "PaymentTerms": "PUE",
            "PaymentConditions": null,
            "PaymentMethod": "Pago en una sola exhibición",
            "ExpeditionPlace": "78116",
            "ExchangeRate": 1,
            "Currency": "MXN",
            "Subtotal": 100.0,
            "Discount": 0.0,
            "Total": 116.0,
            "Observations": null,
            "Issuer": {"FiscalRegime": "612", "Rfc": "EKU9003173C9", "TaxName": "ESCUELA KEMPER URGATE"},
            "Receiver": {"Rfc": "XAXX010101000", "Name": "PUBLICO EN GENERAL"},
            "Items": [
                {"Discount": 0.0, "Quantity": 1.0, "Unit": "PIECE", "Description": "Test product", "UnitValue": 100.0, "Total": 100.0}
            ],
            "Taxes": [{"Total": 16.0, "Name": "IVA", "Rate": 16.0, "Type": "transferred"}],
            "Complement": {
                "TaxStamp": {
                    "Uuid": "27568D31-E579-442F-BA77-798CBF30BD7D",
                    "Date": "2025-05-20T10:11:15",
                    "CfdiSign": "abc",
                    "SatCertNumber": "30001000000500003456",
                    "SatSign": "def",
                    "RfcProvCertif": "SPR190613I52"
                }
            }
        }"#;
        let cfdi: CfdiInfo = serde_json::from_str(json).unwrap();
        assert_eq!(cfdi.id, "VRHXPSsy-Xx0i0LyHNziJA2");
        assert_eq!(cfdi.cfdi_type, "ingreso");
        assert_eq!(cfdi.document_type.as_deref(), Some("issued"));
        assert_eq!(cfdi.serie, None);
        assert_eq!(cfdi.total, Decimal::new(116, 0));
        assert_eq!(cfdi.issuer.rfc, "EKU9003173C9");
        assert_eq!(cfdi.items.len(), 1);
        assert_eq!(cfdi.taxes[0].tax_type.as_deref(), Some("transferred"));
        assert_eq!(cfdi.uuid(), Some("27568D31-E579-442F-BA77-798CBF30BD7D"));
    }

    #[test]
    fn test_cfdi_info_tolerates_nulls_and_missing_sections() {
        let json = r#"{"Id": "abc", "Items": null, "Complement": null}"#;
        let cfdi: CfdiInfo = serde_json::from_str(json).unwrap();
        assert_eq!(cfdi.id, "abc");
        assert!(cfdi.items.is_empty());
        assert!(cfdi.taxes.is_empty());
        assert_eq!(cfdi.uuid(), None);
    }

    #[test]
    fn test_file_content_decode() {
        let file: FileContent = serde_json::from_str(
            r#"{"ContentEncoding": "base64", "ContentType": "xml", "ContentLength": 8, "Content": "PGNmZGkvPg=="}"#,
        )
        .unwrap();
        assert_eq!(file.content_length, 8);
        assert_eq!(file.decode().unwrap(), b"<cfdi/>");
    }

    #[test]
    fn test_cancelation_status_deserialize() {
        let status: CancelationStatus = serde_json::from_str(
            r#"{"Status": "Ok", "Message": "Solicitud de cancelación exitosa", "Uuid": "27568D31-E579-442F-BA77-798CBF30BD7D"}"#,
        )
        .unwrap();
        assert_eq!(status.status, "Ok");
        assert_eq!(status.acuse_xml_base64, None);
    }

    #[test]
    fn test_read_models_accept_null_scalars() {
        let json = r#"{
            "Id": null, "CfdiType": null, "Folio": null, "Date": null,
            "ExpeditionPlace": null, "Currency": null, "Subtotal": null, "Total": null,
            "Issuer": {"Rfc": null, "TaxName": null},
            "Receiver": {"Rfc": null, "Name": null},
            "Items": [{"Description": null, "Quantity": null, "UnitValue": null, "Total": null}],
            "Taxes": [{"Total": null, "Name": null, "Rate": null}],
            "Complement": {"TaxStamp": {"Uuid": null, "Date": null, "CfdiSign": null,
                "SatCertNumber": null, "SatSign": null, "RfcProvCertif": null}}
        }"#;
        let cfdi: CfdiInfo = serde_json::from_str(json).unwrap();
        assert_eq!(cfdi.id, "");
        assert_eq!(cfdi.folio, "");
        assert_eq!(cfdi.total, Decimal::ZERO);
        assert_eq!(cfdi.items[0], ItemInfo::default());
        assert_eq!(cfdi.taxes[0], TaxInfo::default());
        assert_eq!(cfdi.uuid(), None);

        let status: CancelationStatus =
            serde_json::from_str(r#"{"Status": null, "Message": null}"#).unwrap();
        assert_eq!(status, CancelationStatus::default());

        let file: FileContent = serde_json::from_str(
            r#"{"ContentEncoding": null, "ContentType": null, "ContentLength": null, "Content": null}"#,
        )
        .unwrap();
        assert_eq!(file, FileContent::default());
        assert!(file.decode().unwrap().is_empty());
    }
}
