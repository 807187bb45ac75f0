//! Shared types and helpers used across all domain modules.

pub mod encoding;
pub mod serde_util;
pub mod time;
pub mod validate;

pub use encoding::file_to_base64;
pub use time::{parse_facturama_time, FacturamaTime};
pub use validate::Validate;
