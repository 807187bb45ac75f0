//! CFDI 4.0 binding models: the payload shapes accepted by
//! `POST /api-lite/3/cfdis`.
//!
//! Field names serialize in Facturama's PascalCase. Optional fields are
//! omitted from the JSON when unset.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ─── Header sections ────────────────────────────────────────────────────────

/// Global information, required for invoices issued to the general public.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalInformation {
    /// c_Periodicidad, e.g. `"01"` (daily) .. `"05"` (bimonthly).
    pub periodicity: String,
    /// c_Meses, e.g. `"01"` for January.
    pub months: String,
    pub year: i32,
}

/// Relation to previously issued CFDIs.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Relations {
    /// c_TipoRelacion, e.g. `"04"` for substitution.
    #[serde(rename = "Type")]
    pub relation_type: String,
    pub cfdis: Vec<RelatedCfdi>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RelatedCfdi {
    pub uuid: String,
}

// ─── Parties ────────────────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Issuer {
    pub fiscal_regime: String,
    pub rfc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fac_atr_acquirer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Receiver {
    /// Facturama client id, when the receiver is a stored client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub rfc: String,
    pub name: String,
    /// c_UsoCFDI, e.g. `"G03"` or `"S01"`.
    pub cfdi_use: String,
    pub fiscal_regime: String,
    pub tax_zip_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_residence: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_registration_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    pub street: String,
    pub exterior_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interior_number: Option<String>,
    pub neighborhood: String,
    pub zip_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    pub municipality: String,
    pub state: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

// ─── Items ──────────────────────────────────────────────────────────────────

/// One concept line of the invoice.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_product: Option<String>,
    /// c_ClaveProdServ, e.g. `"01010101"`.
    pub product_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification_number: Option<String>,
    #[serde(rename = "SKU", skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub description: String,
    pub unit: String,
    /// c_ClaveUnidad, e.g. `"H87"` (piece).
    pub unit_code: String,
    pub unit_price: Decimal,
    pub quantity: Decimal,
    pub subtotal: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Decimal>,
    /// c_ObjetoImp, e.g. `"02"` (subject to tax).
    pub tax_object: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taxes: Vec<Tax>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party_account: Option<ThirdPartyAccount>,
    #[serde(
        rename = "PropertyTaxIDNumber",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub property_tax_id_number: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub numeros_pedimento: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<ItemPart>,
    pub total: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<ItemComplement>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Tax {
    pub total: Decimal,
    /// `"IVA"`, `"ISR"` or `"IEPS"`.
    pub name: String,
    pub base: Decimal,
    pub rate: Decimal,
    pub is_retention: bool,
    pub is_quota: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_object: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ThirdPartyAccount {
    pub rfc: String,
    pub name: String,
    pub fiscal_regime: String,
    pub tax_zip_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ItemPart {
    pub quantity: Decimal,
    pub unit_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification_number: Option<String>,
    pub description: String,
    pub unit_price: Decimal,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customs_information: Vec<CustomsInformation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct CustomsInformation {
    pub number: String,
    pub date: String,
    pub customs: String,
}

// ─── Item complements ───────────────────────────────────────────────────────

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ItemComplement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educational_institution: Option<EducationalInstitution>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_party_account: Option<ThirdPartyAccountFull>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct EducationalInstitution {
    pub students_name: String,
    pub curp: String,
    pub education_level: String,
    pub aut_rvoe: String,
    pub payment_rfc: String,
}

/// Third-party account complement ("Concepto por cuenta de terceros").
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ThirdPartyAccountFull {
    pub rfc: String,
    pub name: String,
    pub fiscal_regime: String,
    pub tax_zip_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_tax_information: Option<ThirdTaxInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_information: Option<CustomsInformation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parts: Vec<ThirdPartyPart>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_tax_number: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taxes: Vec<ThirdPartyTax>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ThirdTaxInformation {
    pub street: String,
    pub exterior_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interior_number: Option<String>,
    pub neighborhood: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    pub municipality: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub zip_code: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ThirdPartyPart {
    pub quantity: Decimal,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification_number: Option<String>,
    pub description: String,
    // Facturama's field name is misspelled on the wire.
    #[serde(rename = "UnitPrce")]
    pub unit_price: Decimal,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub customs_information: Vec<CustomsInformation>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ThirdPartyTax {
    pub name: String,
    pub rate: Decimal,
    pub amount: Decimal,
}

// ─── Document complements ───────────────────────────────────────────────────

/// Document-level complements.
///
/// Payments are modelled; the remaining complements are passed through as raw
/// JSON in the shape Facturama documents for them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Complement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notarios_publicos: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ine: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detallista: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub payments: Vec<Payment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_trade: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_legends: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carta_porte31: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vales_de_despensa: Option<serde_json::Value>,
}

/// Payment complement entry ("Complemento de pago").
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct Payment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_payment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert_payment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_type_payment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related_documents: Vec<RelatedDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taxes: Vec<Tax>,
    pub date: String,
    pub payment_form: String,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfc_issuer_payer_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_account_name_payer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rfc_receiver_beneficiary_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beneficiary_account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_paid: Option<Decimal>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct RelatedDocument {
    pub uuid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serie: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equivalence_doc_rel: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exchange_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partiality_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_balance_amount: Option<Decimal>,
    pub amount_paid: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_object: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub taxes: Vec<Tax>,
}
