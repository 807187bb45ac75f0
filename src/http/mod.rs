//! HTTP transport layer: `FacturamaHttp`, one authenticated round trip per call.

pub mod client;

pub use client::{Credentials, FacturamaHttp};
