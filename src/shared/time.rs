//! `FacturamaTime`: the timestamp format used on certificate records.
//!
//! Facturama emits local timestamps without an offset, sometimes with
//! fractional seconds and sometimes without. Empty strings and the literal
//! `"null"` stand for "no value".

use chrono::{NaiveDateTime, ParseError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Primary wire format, without fractional seconds.
pub const FACTURAMA_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Fallback wire format, with fractional seconds.
pub const FACTURAMA_TIME_FORMAT_FRACTIONAL: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A timestamp that may be zero (absent).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FacturamaTime(Option<NaiveDateTime>);

impl FacturamaTime {
    pub const fn zero() -> Self {
        Self(None)
    }

    pub const fn new(value: NaiveDateTime) -> Self {
        Self(Some(value))
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_naive(&self) -> Option<&NaiveDateTime> {
        self.0.as_ref()
    }

    pub fn into_naive(self) -> Option<NaiveDateTime> {
        self.0
    }
}

impl From<NaiveDateTime> for FacturamaTime {
    fn from(value: NaiveDateTime) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for FacturamaTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(t) => write!(f, "{}", t.format(FACTURAMA_TIME_FORMAT_FRACTIONAL)),
            None => Ok(()),
        }
    }
}

/// Parse a Facturama timestamp.
///
/// Tries [`FACTURAMA_TIME_FORMAT`] first and falls back to
/// [`FACTURAMA_TIME_FORMAT_FRACTIONAL`]. Empty input and `"null"` give
/// [`FacturamaTime::zero`].
pub fn parse_facturama_time(input: &str) -> Result<FacturamaTime, ParseError> {
    let s = input.trim().trim_matches('"');
    if s.is_empty() || s == "null" {
        return Ok(FacturamaTime::zero());
    }

    NaiveDateTime::parse_from_str(s, FACTURAMA_TIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, FACTURAMA_TIME_FORMAT_FRACTIONAL))
        .map(FacturamaTime::new)
}

impl Serialize for FacturamaTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.0 {
            Some(_) => serializer.collect_str(self),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for FacturamaTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => parse_facturama_time(&s)
                .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {:?}: {}", s, e))),
            None => Ok(FacturamaTime::zero()),
        }
    }
}
