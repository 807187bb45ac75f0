//! # Facturama SDK
//!
//! A typed Rust client for the Facturama Multiemissor API: issuing, cancelling
//! and downloading Mexican CFDI 4.0 e-invoices, and managing the CSD
//! certificates they are sealed with.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core**: request/response models, validators, error types, network
//!    constants (always available)
//! 2. **HTTP transport**: `FacturamaHttp`, one Basic-authenticated JSON round
//!    trip per call
//! 3. **High-Level Client**: `FacturamaClient` with nested sub-clients
//!
//! Every endpoint validates its request locally before touching the network
//! and fails with one of three error kinds: invalid request, internal
//! (transport) error, or API error.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use facturama_sdk::prelude::*;
//!
//! let client = FacturamaClient::builder("user", "password")
//!     .environment(Environment::Sandbox)
//!     .build()?;
//!
//! let cfdi = client.cfdis().get(&GetCfdiRequest::new("VRHXPSsy-Xx0i0LyHNziJA2")).await?;
//! let pdf = client
//!     .cfdis()
//!     .file(&GetCfdiFileRequest::new("pdf", "issuedLite", &cfdi.id))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared types: timestamps, validation, base64 helpers.
pub mod shared;

/// Domain modules (vertical slices): models, requests, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and environments.
pub mod network;

// ── Layer 2: HTTP transport ──────────────────────────────────────────────────

/// Authenticated HTTP transport.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `FacturamaClient`: the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{FacturamaTime, Validate};

    // Domain types: CFDI
    pub use crate::domain::cfdi::wire::{
        Address, Complement, GlobalInformation, Issuer, Item, Payment, Receiver, RelatedCfdi,
        RelatedDocument, Relations, Tax,
    };
    pub use crate::domain::cfdi::{
        CancelCfdiRequest, CancelationStatus, CfdiInfo, CreateCfdiV4Request, FileContent,
        GetCfdiFileRequest, GetCfdiRequest,
    };

    // Domain types: CSD
    pub use crate::domain::csd::{CreateCsdRequest, DeleteCsdRequest, GetCsdRequest, TaxEntityCsd};

    // Errors
    pub use crate::error::{
        ApiError, ConfigError, ErrorKind, ErrorResponse, InternalError, ModelState, SdkError,
        ValidationError,
    };

    // Network
    pub use crate::network::{Environment, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{CfdisClient, CsdsClient, FacturamaClient, FacturamaClientBuilder};
    #[cfg(feature = "http")]
    pub use tokio_util::sync::CancellationToken;
}
