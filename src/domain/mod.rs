//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: response models and re-exports
//! - `request.rs`: request DTOs with their [`Validate`](crate::shared::Validate) impls
//! - `wire.rs`: nested binding models shared by requests and responses
//! - `client.rs`: sub-client with one method per endpoint

pub mod cfdi;
pub mod csd;
