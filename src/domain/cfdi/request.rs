//! CFDI request DTOs and their validators.

use crate::domain::cfdi::wire::{Complement, GlobalInformation, Issuer, Item, Receiver, Relations};
use crate::error::ValidationError;
use crate::shared::validate::{
    is_cfdi_type, is_folio, is_zip_code, one_of, present, require, Validate,
    CANCELLATION_MOTIVES, FILE_FORMATS, FILE_TYPES, MOTIVE_ISSUED_WITH_ERRORS, PAYMENT_FORMS,
    PAYMENT_METHODS,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Create ─────────────────────────────────────────────────────────────────

/// Request body for `POST /api-lite/3/cfdis`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCfdiV4Request {
    /// Id of a stored PDF name template.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serie: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_exchange_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Postal code where the invoice is issued.
    pub expedition_place: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exportation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_information: Option<GlobalInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relations: Option<Relations>,
    pub folio: String,
    /// One of [`CFDI_TYPES`](crate::shared::validate::CFDI_TYPES).
    pub cfdi_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    pub issuer: Issuer,
    pub receiver: Receiver,
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complemento: Option<Complement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_bank_name: Option<String>,
}

impl Validate for CreateCfdiV4Request {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.expedition_place, "ExpeditionPlace is required")?;
        require(&self.folio, "Folio is required")?;
        require(&self.cfdi_type, "CfdiType is required")?;

        if !is_cfdi_type(&self.cfdi_type) {
            return Err(ValidationError::new("CfdiType must be one of: I, E, T, N, P"));
        }
        if !is_zip_code(&self.expedition_place) {
            return Err(ValidationError::new(
                "ExpeditionPlace must be a 5-digit zip code",
            ));
        }
        if !is_folio(&self.folio) {
            return Err(ValidationError::new(
                "Folio must be between 1 and 40 characters",
            ));
        }

        if let Some(form) = present(&self.payment_form) {
            one_of(form, PAYMENT_FORMS, "Invalid PaymentForm value")?;
        }
        if let Some(method) = present(&self.payment_method) {
            one_of(method, PAYMENT_METHODS, "PaymentMethod must be either PUE or PPD")?;
        }

        require(&self.issuer.rfc, "Issuer.Rfc is required")?;
        require(&self.issuer.fiscal_regime, "Issuer.FiscalRegime is required")?;

        require(&self.receiver.rfc, "Receiver.Rfc is required")?;
        require(&self.receiver.name, "Receiver.Name is required")?;
        require(&self.receiver.cfdi_use, "Receiver.CfdiUse is required")?;
        require(&self.receiver.fiscal_regime, "Receiver.FiscalRegime is required")?;
        require(&self.receiver.tax_zip_code, "Receiver.TaxZipCode is required")?;

        if self.items.is_empty() {
            return Err(ValidationError::new("At least one item is required"));
        }
        for (i, item) in self.items.iter().enumerate() {
            let fields = [
                ("ProductCode", &item.product_code),
                ("Description", &item.description),
                ("Unit", &item.unit),
                ("UnitCode", &item.unit_code),
                ("TaxObject", &item.tax_object),
            ];
            for (name, value) in fields {
                require(value, &format!("Items[{}].{} is required", i, name))?;
            }
        }

        Ok(())
    }
}

// ─── Cancel ─────────────────────────────────────────────────────────────────

/// Cancels an issued CFDI.
///
/// `DELETE /api-lite/cfdis/{id}?motive={motive}&uuidReplacement={uuid}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CancelCfdiRequest {
    pub id: String,
    /// One of [`CANCELLATION_MOTIVES`]; empty to let Facturama apply its default.
    pub motive: String,
    /// UUID of the substituting CFDI. Required when `motive` is `"01"`.
    pub uuid_replacement: String,
}

impl CancelCfdiRequest {
    pub fn new(id: impl Into<String>, motive: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            motive: motive.into(),
            uuid_replacement: String::new(),
        }
    }

    pub fn with_replacement(mut self, uuid: impl Into<String>) -> Self {
        self.uuid_replacement = uuid.into();
        self
    }

    /// Path plus query string. `uuidReplacement` is only sent alongside a motive.
    pub(crate) fn path(&self) -> String {
        let mut path = format!("/api-lite/cfdis/{}", urlencoding::encode(&self.id));
        if !self.motive.is_empty() {
            path.push_str(&format!("?motive={}", urlencoding::encode(&self.motive)));
            if !self.uuid_replacement.is_empty() {
                path.push_str(&format!(
                    "&uuidReplacement={}",
                    urlencoding::encode(&self.uuid_replacement)
                ));
            }
        }
        path
    }
}

impl Validate for CancelCfdiRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.id, "CFDI ID is required")?;

        if !self.motive.is_empty() {
            one_of(
                &self.motive,
                CANCELLATION_MOTIVES,
                "Motive must be one of: 01, 02, 03, 04",
            )?;
        }

        if self.motive == MOTIVE_ISSUED_WITH_ERRORS && self.uuid_replacement.is_empty() {
            return Err(ValidationError::new(
                "UUID replacement is required when motive is 01",
            ));
        }

        Ok(())
    }
}

// ─── Get ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCfdiRequest {
    pub id: String,
}

impl GetCfdiRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub(crate) fn path(&self) -> String {
        format!("/api-lite/cfdis/{}", urlencoding::encode(&self.id))
    }
}

impl Validate for GetCfdiRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.id, "CFDI ID is required")
    }
}

// ─── File ───────────────────────────────────────────────────────────────────

/// Fetches a rendered CFDI: `GET /cfdi/{format}/{type}/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCfdiFileRequest {
    /// `pdf`, `html` or `xml`, case-insensitive.
    pub format: String,
    /// `payroll`, `received`, `issued` or `issuedLite`.
    pub cfdi_type: String,
    pub id: String,
}

impl GetCfdiFileRequest {
    pub fn new(
        format: impl Into<String>,
        cfdi_type: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            format: format.into(),
            cfdi_type: cfdi_type.into(),
            id: id.into(),
        }
    }

    pub(crate) fn path(&self) -> String {
        format!(
            "/cfdi/{}/{}/{}",
            self.format.to_ascii_lowercase(),
            self.cfdi_type,
            urlencoding::encode(&self.id)
        )
    }
}

impl Validate for GetCfdiFileRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        require(&self.id, "CFDI ID is required")?;
        one_of(
            &self.format.to_ascii_lowercase(),
            FILE_FORMATS,
            "Format must be one of: pdf, html, xml",
        )?;
        one_of(
            &self.cfdi_type,
            FILE_TYPES,
            "Type must be one of: payroll, received, issued, issuedLite",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cfdi::wire::Tax;

    fn valid_request() -> CreateCfdiV4Request {
        CreateCfdiV4Request {
            name_id: Some(1),
            expedition_place: "78116".to_string(),
            folio: "Test-001".to_string(),
            cfdi_type: "I".to_string(),
            payment_form: Some("01".to_string()),
            payment_method: Some("PUE".to_string()),
            currency: Some("MXN".to_string()),
            global_information: Some(GlobalInformation {
                periodicity: "01".to_string(),
                months: "05".to_string(),
                year: 2025,
            }),
            issuer: Issuer {
                name: Some("FRANCO VALENCIA ADAN".to_string()),
                rfc: "EKU9003173C9".to_string(),
                fiscal_regime: "612".to_string(),
                ..Default::default()
            },
            receiver: Receiver {
                rfc: "XAXX010101000".to_string(),
                name: "PUBLICO EN GENERAL".to_string(),
                cfdi_use: "S01".to_string(),
                fiscal_regime: "616".to_string(),
                tax_zip_code: "78116".to_string(),
                ..Default::default()
            },
            items: vec![Item {
                product_code: "01010101".to_string(),
                description: "Test product".to_string(),
                unit: "PIECE".to_string(),
                unit_code: "H87".to_string(),
                unit_price: Decimal::new(100, 0),
                quantity: Decimal::ONE,
                subtotal: Decimal::new(100, 0),
                total: Decimal::new(116, 0),
                tax_object: "02".to_string(),
                taxes: vec![Tax {
                    name: "IVA".to_string(),
                    base: Decimal::new(100, 0),
                    rate: Decimal::new(16, 2),
                    total: Decimal::new(16, 0),
                    is_retention: false,
                    is_quota: false,
                    tax_object: None,
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn message(result: Result<(), ValidationError>) -> String {
        result.unwrap_err().message
    }

    #[test]
    fn test_create_valid_request_passes() {
        assert_eq!(valid_request().validate(), Ok(()));
    }

    #[test]
    fn test_create_required_fields_in_order() {
        let mut req = valid_request();
        req.expedition_place.clear();
        req.folio.clear();
        assert_eq!(message(req.validate()), "ExpeditionPlace is required");

        let mut req = valid_request();
        req.folio.clear();
        req.cfdi_type.clear();
        assert_eq!(message(req.validate()), "Folio is required");

        let mut req = valid_request();
        req.cfdi_type.clear();
        assert_eq!(message(req.validate()), "CfdiType is required");
    }

    #[test]
    fn test_create_cfdi_type_catalog() {
        for t in ["I", "E", "T", "N", "P"] {
            let mut req = valid_request();
            req.cfdi_type = t.to_string();
            assert!(req.validate().is_ok(), "{} should pass", t);
        }
        for t in ["X", "i", "IE", "Ingreso"] {
            let mut req = valid_request();
            req.cfdi_type = t.to_string();
            assert_eq!(message(req.validate()), "CfdiType must be one of: I, E, T, N, P");
        }
    }

    #[test]
    fn test_create_format_rules() {
        let mut req = valid_request();
        req.expedition_place = "7811".to_string();
        assert_eq!(
            message(req.validate()),
            "ExpeditionPlace must be a 5-digit zip code"
        );

        let mut req = valid_request();
        req.folio = "F".repeat(41);
        assert_eq!(
            message(req.validate()),
            "Folio must be between 1 and 40 characters"
        );

        // type is checked before the zip code
        let mut req = valid_request();
        req.cfdi_type = "Z".to_string();
        req.expedition_place = "abc".to_string();
        assert_eq!(message(req.validate()), "CfdiType must be one of: I, E, T, N, P");
    }

    #[test]
    fn test_create_payment_form_catalog() {
        for form in PAYMENT_FORMS {
            let mut req = valid_request();
            req.payment_form = Some(form.to_string());
            assert!(req.validate().is_ok(), "{} should pass", form);
        }
        for form in ["07", "09", "10", "11", "16", "18", "22", "32", "98", "1"] {
            let mut req = valid_request();
            req.payment_form = Some(form.to_string());
            assert_eq!(message(req.validate()), "Invalid PaymentForm value");
        }

        let mut req = valid_request();
        req.payment_form = None;
        assert!(req.validate().is_ok());

        let mut req = valid_request();
        req.payment_form = Some(String::new());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_payment_method_catalog() {
        for method in ["PUE", "PPD"] {
            let mut req = valid_request();
            req.payment_method = Some(method.to_string());
            assert!(req.validate().is_ok());
        }
        let mut req = valid_request();
        req.payment_method = Some("pue".to_string());
        assert_eq!(
            message(req.validate()),
            "PaymentMethod must be either PUE or PPD"
        );
    }

    fn assert_rejected(mutate: impl FnOnce(&mut CreateCfdiV4Request), expected: &str) {
        let mut req = valid_request();
        mutate(&mut req);
        assert_eq!(message(req.validate()), expected);
    }

    #[test]
    fn test_create_parties() {
        assert_rejected(|r| r.issuer.rfc.clear(), "Issuer.Rfc is required");
        assert_rejected(|r| r.issuer.fiscal_regime.clear(), "Issuer.FiscalRegime is required");
        assert_rejected(|r| r.receiver.rfc.clear(), "Receiver.Rfc is required");
        assert_rejected(|r| r.receiver.name.clear(), "Receiver.Name is required");
        assert_rejected(|r| r.receiver.cfdi_use.clear(), "Receiver.CfdiUse is required");
        assert_rejected(
            |r| r.receiver.fiscal_regime.clear(),
            "Receiver.FiscalRegime is required",
        );
        assert_rejected(
            |r| r.receiver.tax_zip_code.clear(),
            "Receiver.TaxZipCode is required",
        );
    }

    #[test]
    fn test_create_items() {
        let mut req = valid_request();
        req.items.clear();
        assert_eq!(message(req.validate()), "At least one item is required");

        let mut req = valid_request();
        let mut second = req.items[0].clone();
        second.unit_code.clear();
        req.items.push(second);
        assert_eq!(message(req.validate()), "Items[1].UnitCode is required");

        let mut req = valid_request();
        req.items[0].product_code.clear();
        req.items[0].tax_object.clear();
        assert_eq!(message(req.validate()), "Items[0].ProductCode is required");

        let mut req = valid_request();
        req.items[0].tax_object.clear();
        assert_eq!(message(req.validate()), "Items[0].TaxObject is required");
    }

    #[test]
    fn test_create_serializes_documented_names() {
        let req = valid_request();
        req.validate().unwrap();
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["NameId"], 1);
        assert_eq!(json["ExpeditionPlace"], "78116");
        assert_eq!(json["Folio"], "Test-001");
        assert_eq!(json["CfdiType"], "I");
        assert_eq!(json["PaymentForm"], "01");
        assert_eq!(json["PaymentMethod"], "PUE");
        assert_eq!(json["GlobalInformation"]["Year"], 2025);
        assert_eq!(json["Issuer"]["Rfc"], "EKU9003173C9");
        assert_eq!(json["Issuer"]["FiscalRegime"], "612");
        assert_eq!(json["Receiver"]["CfdiUse"], "S01");
        assert_eq!(json["Receiver"]["TaxZipCode"], "78116");

        let item = &json["Items"][0];
        for field in ["ProductCode", "Description", "Unit", "UnitCode", "TaxObject"] {
            assert!(item[field].is_string(), "missing {}", field);
        }
        assert_eq!(item["Total"].as_f64(), Some(116.0));
        assert_eq!(item["Taxes"][0]["Name"], "IVA");
        assert_eq!(item["Taxes"][0]["Rate"].as_f64(), Some(0.16));
        assert_eq!(item["Taxes"][0]["IsRetention"], false);

        // unset optionals are omitted, not null
        assert!(json.get("Relations").is_none());
        assert!(json.get("Complemento").is_none());
        assert!(json.get("LogoUrl").is_none());
    }

    #[test]
    fn test_cancel_conditional_replacement() {
        let req = CancelCfdiRequest::new("abc", "01");
        assert_eq!(
            message(req.validate()),
            "UUID replacement is required when motive is 01"
        );

        let req = CancelCfdiRequest::new("abc", "01")
            .with_replacement("27568D31-E579-442F-BA77-798CBF30BD7D");
        assert!(req.validate().is_ok());

        for motive in ["02", "03", "04"] {
            assert!(CancelCfdiRequest::new("abc", motive).validate().is_ok());
            assert!(CancelCfdiRequest::new("abc", motive)
                .with_replacement("x")
                .validate()
                .is_ok());
        }
    }

    #[test]
    fn test_cancel_motive_catalog() {
        for motive in ["00", "05", "1", "001", "99"] {
            assert_eq!(
                message(CancelCfdiRequest::new("abc", motive).validate()),
                "Motive must be one of: 01, 02, 03, 04"
            );
        }
        assert!(CancelCfdiRequest::new("abc", "").validate().is_ok());
        assert_eq!(
            message(CancelCfdiRequest::new("", "02").validate()),
            "CFDI ID is required"
        );
    }

    #[test]
    fn test_cancel_path() {
        assert_eq!(CancelCfdiRequest::new("abc", "").path(), "/api-lite/cfdis/abc");
        assert_eq!(
            CancelCfdiRequest::new("abc", "02").path(),
            "/api-lite/cfdis/abc?motive=02"
        );
        assert_eq!(
            CancelCfdiRequest::new("abc", "01").with_replacement("uuid-1").path(),
            "/api-lite/cfdis/abc?motive=01&uuidReplacement=uuid-1"
        );
        // replacement without motive is not sent
        assert_eq!(
            CancelCfdiRequest::new("abc", "").with_replacement("uuid-1").path(),
            "/api-lite/cfdis/abc"
        );
    }

    #[test]
    fn test_get_validation_and_path() {
        assert_eq!(message(GetCfdiRequest::new("").validate()), "CFDI ID is required");
        let req = GetCfdiRequest::new("VRHXPSsy-Xx0i0LyHNziJA2");
        assert!(req.validate().is_ok());
        assert_eq!(req.path(), "/api-lite/cfdis/VRHXPSsy-Xx0i0LyHNziJA2");
        assert_eq!(GetCfdiRequest::new("a/b").path(), "/api-lite/cfdis/a%2Fb");
    }

    #[test]
    fn test_file_catalogs() {
        for format in ["pdf", "html", "xml", "PDF", "Xml"] {
            for cfdi_type in ["payroll", "received", "issued", "issuedLite"] {
                let req = GetCfdiFileRequest::new(format, cfdi_type, "abc");
                assert!(req.validate().is_ok(), "{}/{}", format, cfdi_type);
            }
        }
        assert_eq!(
            message(GetCfdiFileRequest::new("docx", "issued", "abc").validate()),
            "Format must be one of: pdf, html, xml"
        );
        assert_eq!(
            message(GetCfdiFileRequest::new("pdf", "issuedlite", "abc").validate()),
            "Type must be one of: payroll, received, issued, issuedLite"
        );
        assert_eq!(
            message(GetCfdiFileRequest::new("docx", "nope", "").validate()),
            "CFDI ID is required"
        );
    }

    #[test]
    fn test_file_path_normalizes_format() {
        let req = GetCfdiFileRequest::new("PDF", "issuedLite", "abc");
        assert_eq!(req.path(), "/cfdi/pdf/issuedLite/abc");
    }
}
