//! High-level client — `FaspaySnapClient` with nested sub-client accessors.
//!
//! Each gateway product has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the dispatcher and the accessor methods.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::SnapConfig;
use crate::credentials::{CredentialSource, PartnerCredentials};
use crate::domain::account::client::Accounts;
use crate::domain::balance::client::Balances;
use crate::domain::bill::client::Bills;
use crate::domain::history::client::History;
use crate::domain::topup::client::Topups;
use crate::domain::transfer::client::Transfers;
use crate::error::ApiResult;
use crate::http::SnapHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::account::client::Accounts as AccountsClient;
pub use crate::domain::balance::client::Balances as BalancesClient;
pub use crate::domain::bill::client::Bills as BillsClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::topup::client::Topups as TopupsClient;
pub use crate::domain::transfer::client::Transfers as TransfersClient;

/// The primary entry point for the SDK.
///
/// Cheap to clone; clones share the connection pool and credentials and may
/// be used from concurrent tasks.
pub struct FaspaySnapClient {
    pub(crate) http: SnapHttp,
    user_agent: String,
}

impl FaspaySnapClient {
    /// Build a client from configuration, parsing the key and certificate.
    pub fn new(config: SnapConfig) -> ApiResult<Self> {
        Self::builder(config).build()
    }

    pub fn builder(config: SnapConfig) -> FaspaySnapClientBuilder {
        FaspaySnapClientBuilder {
            config,
            credentials: None,
        }
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts { client: self }
    }

    pub fn transfers(&self) -> Transfers<'_> {
        Transfers { client: self }
    }

    pub fn balances(&self) -> Balances<'_> {
        Balances { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn topups(&self) -> Topups<'_> {
        Topups { client: self }
    }

    pub fn bills(&self) -> Bills<'_> {
        Bills { client: self }
    }

    // ── Dispatcher ───────────────────────────────────────────────────────

    /// Sign and send `request` to `path`, decoding the reply as `TResp`.
    ///
    /// Every operation goes through here. A non-success business code in a
    /// 200 response is returned as `Ok`; check
    /// [`BusinessResponse::is_success`](crate::domain::BusinessResponse::is_success).
    pub async fn execute<TReq, TResp>(&self, path: &str, request: &TReq) -> ApiResult<TResp>
    where
        TReq: Serialize,
        TResp: DeserializeOwned,
    {
        tracing::debug!(path, partner_id = %self.http.partner_id(), "Dispatching request");
        self.http.post(path, &self.user_agent, request).await
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn partner_id(&self) -> &str {
        self.http.partner_id()
    }
}

impl Clone for FaspaySnapClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl std::fmt::Debug for FaspaySnapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FaspaySnapClient")
            .field("base_url", &self.base_url())
            .field("partner_id", &self.partner_id())
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct FaspaySnapClientBuilder {
    config: SnapConfig,
    credentials: Option<Arc<dyn CredentialSource>>,
}

impl FaspaySnapClientBuilder {
    /// Use a custom credential source instead of parsing the configured key.
    ///
    /// The configured private key PEM is then ignored.
    pub fn credentials(mut self, credentials: Arc<dyn CredentialSource>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn build(self) -> ApiResult<FaspaySnapClient> {
        let credentials = match self.credentials {
            Some(credentials) => credentials,
            None => {
                let mut partner = PartnerCredentials::from_pem(
                    self.config.partner_id.clone(),
                    &self.config.private_key_pem,
                )?;
                if let Some(offset) = self.config.utc_offset {
                    partner = partner.with_utc_offset(offset);
                }
                Arc::new(partner)
            }
        };

        let http = SnapHttp::new(&self.config, credentials)?;
        tracing::info!(
            environment = %self.config.environment,
            base_url = %http.base_url(),
            "Faspay Snap client ready"
        );

        Ok(FaspaySnapClient {
            http,
            user_agent: self.config.user_agent,
        })
    }
}
