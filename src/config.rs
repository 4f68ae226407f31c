//! Client configuration.
//!
//! Key and certificate are held as PEM text; they are parsed when the client
//! is built, so a bad key or certificate fails construction rather than the
//! first call.

use std::time::Duration;

use chrono::FixedOffset;

use crate::error::SnapError;
use crate::network::{self, Environment};

/// Default connect / request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything needed to build a [`FaspaySnapClient`](crate::client::FaspaySnapClient).
#[derive(Clone)]
pub struct SnapConfig {
    pub(crate) partner_id: String,
    pub(crate) private_key_pem: String,
    pub(crate) certificate_pem: String,
    pub(crate) environment: Environment,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Duration,
    pub(crate) channel_id: String,
    pub(crate) user_agent: String,
    pub(crate) utc_offset: Option<FixedOffset>,
}

impl SnapConfig {
    pub fn builder(
        partner_id: impl Into<String>,
        private_key_pem: impl Into<String>,
        certificate_pem: impl Into<String>,
    ) -> SnapConfigBuilder {
        SnapConfigBuilder::new(partner_id, private_key_pem, certificate_pem)
    }

    /// Load configuration from the process environment.
    ///
    /// | Variable | Required | Meaning |
    /// |---|---|---|
    /// | `FASPAY_PARTNER_ID` | yes | partner id |
    /// | `FASPAY_PRIVATE_KEY_PATH` | yes | path to the PEM private key |
    /// | `FASPAY_CERT_PATH` | yes | path to the gateway certificate (PEM) |
    /// | `FASPAY_ENV` | no | `production` or `sandbox` (default) |
    /// | `FASPAY_BASE_URL` | no | overrides the environment URL |
    /// | `FASPAY_CHANNEL_ID` | no | overrides `CHANNEL-ID` |
    pub fn from_env() -> Result<Self, SnapError> {
        let partner_id = required_var("FASPAY_PARTNER_ID")?;
        let private_key_pem = read_file(&required_var("FASPAY_PRIVATE_KEY_PATH")?)?;
        let certificate_pem = read_file(&required_var("FASPAY_CERT_PATH")?)?;

        let mut builder = Self::builder(partner_id, private_key_pem, certificate_pem);
        if let Ok(env) = std::env::var("FASPAY_ENV") {
            builder = builder.environment(Environment::from_name(&env));
        }
        if let Ok(url) = std::env::var("FASPAY_BASE_URL") {
            builder = builder.base_url(url);
        }
        if let Ok(channel) = std::env::var("FASPAY_CHANNEL_ID") {
            builder = builder.channel_id(channel);
        }
        Ok(builder.build())
    }

    pub fn partner_id(&self) -> &str {
        &self.partner_id
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Effective base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
    }

    /// `false` when the base URL is plain `http://`, which skips pinning.
    pub fn uses_tls(&self) -> bool {
        self.base_url()
            .get(..8)
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case("https://"))
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn utc_offset(&self) -> Option<FixedOffset> {
        self.utc_offset
    }
}

impl std::fmt::Debug for SnapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapConfig")
            .field("partner_id", &self.partner_id)
            .field("environment", &self.environment)
            .field("base_url", &self.base_url())
            .field("timeout", &self.timeout)
            .field("channel_id", &self.channel_id)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

fn required_var(name: &str) -> Result<String, SnapError> {
    std::env::var(name).map_err(|_| SnapError::Config(format!("{} is not set", name)))
}

fn read_file(path: &str) -> Result<String, SnapError> {
    std::fs::read_to_string(path)
        .map_err(|e| SnapError::Config(format!("Failed to read {}: {}", path, e)))
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct SnapConfigBuilder {
    config: SnapConfig,
}

impl SnapConfigBuilder {
    pub fn new(
        partner_id: impl Into<String>,
        private_key_pem: impl Into<String>,
        certificate_pem: impl Into<String>,
    ) -> Self {
        Self {
            config: SnapConfig {
                partner_id: partner_id.into(),
                private_key_pem: private_key_pem.into(),
                certificate_pem: certificate_pem.into(),
                environment: Environment::default(),
                base_url: None,
                timeout: DEFAULT_TIMEOUT,
                channel_id: network::DEFAULT_CHANNEL_ID.to_string(),
                user_agent: network::default_user_agent(),
                utc_offset: None,
            },
        }
    }

    pub fn environment(mut self, environment: Environment) -> Self {
        self.config.environment = environment;
        self
    }

    /// Override the environment's base URL (e.g. a local mock gateway).
    ///
    /// An `http://` URL sends requests in clear text and bypasses certificate
    /// pinning entirely. Use it only against local test gateways.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.config.channel_id = channel_id.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Offset used for `X-TIMESTAMP`. Defaults to the host's local zone.
    pub fn utc_offset(mut self, offset: FixedOffset) -> Self {
        self.config.utc_offset = Some(offset);
        self
    }

    pub fn build(self) -> SnapConfig {
        self.config
    }
}
