//! Domain modules organized as vertical slices, one per gateway product.
//!
//! Each sub-module contains:
//! - `wire.rs` — request / response DTOs matching the gateway's JSON
//! - `client.rs` — sub-client with one method per operation

pub mod account;
pub mod balance;
pub mod bill;
pub mod history;
pub mod topup;
pub mod transfer;

use serde::{Deserialize, Serialize};

/// Free-form `additionalInfo` object returned by the gateway.
pub type AdditionalInfo = std::collections::BTreeMap<String, serde_json::Value>;

// ─── BusinessResponse ────────────────────────────────────────────────────────

/// Business-level outcome carried inside an HTTP 200 response.
///
/// A decoded response only means the call went through; the gateway may still
/// have declined the operation. Check [`is_success`](Self::is_success).
pub trait BusinessResponse {
    /// Response code the gateway documents as success for this operation.
    const SUCCESS_CODE: &'static str;

    fn response_code(&self) -> &str;

    fn response_message(&self) -> &str;

    fn is_success(&self) -> bool {
        self.response_code() == Self::SUCCESS_CODE
    }
}

// ─── Amount ──────────────────────────────────────────────────────────────────

/// Monetary amount as the gateway sends it: a decimal string plus currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    pub value: String,
    pub currency: String,
}

impl Amount {
    pub fn new(value: impl Into<String>, currency: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            currency: currency.into(),
        }
    }

    /// Rupiah amount, e.g. `Amount::idr("10000.00")`.
    pub fn idr(value: impl Into<String>) -> Self {
        Self::new(value, "IDR")
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.currency)
    }
}

// ─── Status inquiries ────────────────────────────────────────────────────────

/// Lookup of an earlier transaction by its original references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusRequest {
    pub original_partner_reference_no: String,
    pub original_reference_no: String,
    /// Service code of the original operation (e.g. `"18"` for interbank transfer).
    pub service_code: String,
}

impl StatusRequest {
    pub fn new(
        original_partner_reference_no: impl Into<String>,
        original_reference_no: impl Into<String>,
        service_code: impl Into<String>,
    ) -> Self {
        Self {
            original_partner_reference_no: original_partner_reference_no.into(),
            original_reference_no: original_reference_no.into(),
            service_code: service_code.into(),
        }
    }
}

/// `latestTransactionStatus` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Success,
    Initiated,
    Paying,
    Pending,
    Refunded,
    Canceled,
    Failed,
    NotFound,
}

impl TransactionStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "00" => Some(Self::Success),
            "01" => Some(Self::Initiated),
            "02" => Some(Self::Paying),
            "03" => Some(Self::Pending),
            "04" => Some(Self::Refunded),
            "05" => Some(Self::Canceled),
            "06" => Some(Self::Failed),
            "07" => Some(Self::NotFound),
            _ => None,
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Success => "00",
            Self::Initiated => "01",
            Self::Paying => "02",
            Self::Pending => "03",
            Self::Refunded => "04",
            Self::Canceled => "05",
            Self::Failed => "06",
            Self::NotFound => "07",
        }
    }

    /// No further status change is expected.
    pub fn is_final(&self) -> bool {
        matches!(
            self,
            Self::Success | Self::Refunded | Self::Canceled | Self::Failed | Self::NotFound
        )
    }
}
