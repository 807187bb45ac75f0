//! Request validation: the [`Validate`] trait and the rule helpers and code
//! catalogs the per-request validators are built from.

use crate::error::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;

/// Local, side-effect-free validation run before a request is sent.
///
/// Implementations check a fixed list of rules in order and return the first
/// violation.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// CFDI document types: Ingreso, Egreso, Traslado, Nómina, Pago.
pub const CFDI_TYPES: &[&str] = &["I", "E", "T", "N", "P"];

/// SAT payment form codes (c_FormaPago).
pub const PAYMENT_FORMS: &[&str] = &[
    "01", "02", "03", "04", "05", "06", "08", "12", "13", "14", "15", "17", "23", "24", "25",
    "26", "27", "28", "29", "30", "31", "99",
];

/// Payment methods: single payment (PUE) or deferred/partial (PPD).
pub const PAYMENT_METHODS: &[&str] = &["PUE", "PPD"];

/// Cancellation motive codes accepted by the cancel endpoint.
pub const CANCELLATION_MOTIVES: &[&str] = &["01", "02", "03", "04"];

/// "Issued with errors, with relation": the only motive that requires a
/// replacement UUID.
pub const MOTIVE_ISSUED_WITH_ERRORS: &str = "01";

/// Rendered file formats.
pub const FILE_FORMATS: &[&str] = &["pdf", "html", "xml"];

/// Document families a rendered file can be requested for.
pub const FILE_TYPES: &[&str] = &["payroll", "received", "issued", "issuedLite"];

/// Inclusive character bounds for a folio.
pub const FOLIO_MAX_LEN: usize = 40;

lazy_static! {
    static ref CFDI_TYPE_RE: Regex = Regex::new(r"^[IETNP]$").unwrap();
    static ref ZIP_CODE_RE: Regex = Regex::new(r"^[0-9]{5}$").unwrap();
}

pub(crate) fn require(value: &str, message: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(message));
    }
    Ok(())
}

pub(crate) fn one_of(value: &str, allowed: &[&str], message: &str) -> Result<(), ValidationError> {
    if !allowed.contains(&value) {
        return Err(ValidationError::new(message));
    }
    Ok(())
}

/// Returns the value when it is present and non-empty.
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub fn is_cfdi_type(value: &str) -> bool {
    CFDI_TYPE_RE.is_match(value)
}

/// Mexican postal codes are exactly five digits.
pub fn is_zip_code(value: &str) -> bool {
    ZIP_CODE_RE.is_match(value)
}

pub fn is_folio(value: &str) -> bool {
    (1..=FOLIO_MAX_LEN).contains(&value.chars().count())
}
