//! Network constants for the Faspay SendMe Snap gateway.

/// Sandbox REST base URL.
pub const SANDBOX_API_URL: &str = "https://account-staging.faspay.co.id";

/// Production REST base URL.
pub const PRODUCTION_API_URL: &str = "https://sendme.faspay.co.id";

/// Channel identifier sent as `CHANNEL-ID` on every call.
pub const DEFAULT_CHANNEL_ID: &str = "88001";

/// SDK name reported in `User-Agent`.
pub const SDK_NAME: &str = "FaspaySendMeSnapRust";

/// `User-Agent` value: `FaspaySendMeSnapRust/<version>`.
pub fn default_user_agent() -> String {
    format!("{}/{}", SDK_NAME, env!("CARGO_PKG_VERSION"))
}

/// Gateway endpoint paths. These are part of the signed string, so they are
/// fixed and not configurable.
pub mod endpoints {
    pub const ACCOUNT_INQUIRY: &str = "/account/v1.0/account-inquiry-external";
    pub const TRANSFER_INTERBANK: &str = "/account/v1.0/transfer-interbank";
    pub const TRANSFER_STATUS: &str = "/account/v1.0/transfer/status";
    pub const BALANCE_INQUIRY: &str = "/account/v1.0/balance-inquiry";
    pub const HISTORY_LIST: &str = "/account/v1.0/transaction-history-list";
    pub const EMONEY_TOPUP: &str = "/account/v1.0/emoney/topup";
    pub const EMONEY_TOPUP_STATUS: &str = "/account/v1.0/emoney/topup-status";
    pub const BILL_INQUIRY: &str = "/account/v1.0/transfer-va/inquiry";
    pub const BILL_PAYMENT: &str = "/account/v1.0/transfer-va/payment";
}

/// Gateway environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// `"production"` selects production; anything else falls back to sandbox.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" => Self::Production,
            _ => Self::Sandbox,
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Sandbox => SANDBOX_API_URL,
            Self::Production => PRODUCTION_API_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sandbox => "sandbox",
            Self::Production => "production",
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
