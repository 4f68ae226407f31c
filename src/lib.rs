//! # Faspay SendMe Snap SDK
//!
//! Signed REST client for the Faspay SendMe "Snap" open-banking gateway.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Canonical JSON, RSA-SHA256 signing, credentials, DTOs (always available)
//! 2. **HTTP** — `SnapHttp`: pinned-certificate TLS, signed headers, one POST per call
//! 3. **High-Level Client** — `FaspaySnapClient` with one sub-client per gateway product
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use faspay_snap::prelude::*;
//!
//! let config = SnapConfig::builder("99999", key_pem, cert_pem)
//!     .environment(Environment::Sandbox)
//!     .build();
//! let client = FaspaySnapClient::new(config)?;
//!
//! let balance = client
//!     .balances()
//!     .inquire(&BalanceInquiryRequest::new("9920017573"))
//!     .await?;
//! if balance.is_success() {
//!     println!("{:?}", balance.available_balance());
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Gateway URLs, endpoint paths and fixed header values.
pub mod network;

/// Client configuration.
pub mod config;

/// Partner id, private key, per-call timestamp and external id.
pub mod credentials;

/// Canonical JSON and RSA-SHA256 request signatures.
pub mod signing;

/// Request / response DTOs per gateway product.
pub mod domain;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Signed HTTP transport.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `FaspaySnapClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types
    pub use crate::domain::account::{AccountInquiryRequest, AccountInquiryResponse};
    pub use crate::domain::balance::{BalanceInquiryRequest, BalanceInquiryResponse};
    pub use crate::domain::bill::{
        BillInquiryRequest, BillInquiryResponse, BillPaymentRequest, BillPaymentResponse,
    };
    pub use crate::domain::history::{HistoryListRequest, HistoryListResponse};
    pub use crate::domain::topup::{TopupRequest, TopupResponse, TopupStatusResponse};
    pub use crate::domain::transfer::{
        TransferInterbankRequest, TransferInterbankResponse, TransferStatusResponse,
    };
    pub use crate::domain::{Amount, BusinessResponse, StatusRequest, TransactionStatus};

    // Errors
    pub use crate::error::{ApiResult, ErrorKind, SigningError, SnapError};

    // Configuration + credentials
    pub use crate::config::SnapConfig;
    pub use crate::credentials::{CredentialSource, PartnerCredentials};
    pub use crate::network::Environment;

    // Signing
    pub use crate::signing::{canonicalize, sign, HttpMethod, PrivateKey};

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AccountsClient, BalancesClient, BillsClient, FaspaySnapClient, FaspaySnapClientBuilder,
        HistoryClient, TopupsClient, TransfersClient,
    };
}
