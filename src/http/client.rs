//! Low-level signed HTTP transport — `SnapHttp`.
//!
//! Every call: serialize → canonicalize → sign → POST once. No retries; a
//! non-2xx status becomes [`SnapError::Api`] and an undecodable 2xx body
//! becomes [`SnapError::Decode`].

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::SnapConfig;
use crate::credentials::CredentialSource;
use crate::error::SnapError;
use crate::http::tls;
use crate::signing::{canonicalize, sign_request, HttpMethod};

pub const X_TIMESTAMP: &str = "x-timestamp";
pub const X_SIGNATURE: &str = "x-signature";
pub const X_PARTNER_ID: &str = "x-partner-id";
pub const X_EXTERNAL_ID: &str = "x-external-id";
pub const CHANNEL_ID: &str = "channel-id";

const APPLICATION_JSON: &str = "application/json";

/// Per-call header values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub user_agent: String,
    pub timestamp: String,
    pub signature: String,
    pub partner_id: String,
    pub external_id: String,
    pub channel_id: String,
}

impl SignedHeaders {
    pub fn to_header_map(&self) -> Result<HeaderMap, SnapError> {
        let mut headers = HeaderMap::with_capacity(8);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(USER_AGENT, header_value("User-Agent", &self.user_agent)?);
        headers.insert(
            HeaderName::from_static(X_TIMESTAMP),
            header_value("X-TIMESTAMP", &self.timestamp)?,
        );
        headers.insert(
            HeaderName::from_static(X_SIGNATURE),
            header_value("X-Signature", &self.signature)?,
        );
        headers.insert(
            HeaderName::from_static(X_PARTNER_ID),
            header_value("X-Partner-Id", &self.partner_id)?,
        );
        headers.insert(
            HeaderName::from_static(X_EXTERNAL_ID),
            header_value("X-EXTERNAL-ID", &self.external_id)?,
        );
        headers.insert(
            HeaderName::from_static(CHANNEL_ID),
            header_value("CHANNEL-ID", &self.channel_id)?,
        );
        Ok(headers)
    }
}

fn header_value(name: &str, value: &str) -> Result<HeaderValue, SnapError> {
    HeaderValue::from_str(value)
        .map_err(|e| SnapError::Config(format!("Invalid header value for '{}': {}", name, e)))
}

/// Raw outcome of a successful (2xx) signed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedResponse {
    pub status: u16,
    pub body: String,
}

/// Signed HTTP client for the Snap REST API.
pub struct SnapHttp {
    base_url: String,
    client: Client,
    credentials: Arc<dyn CredentialSource>,
    channel_id: String,
}

impl SnapHttp {
    /// Build a client that trusts only the configured gateway certificate(s).
    ///
    /// Built-in and system roots are disabled. See [`tls`](super::tls) for how
    /// a pinned certificate is matched.
    pub fn new(
        config: &SnapConfig,
        credentials: Arc<dyn CredentialSource>,
    ) -> Result<Self, SnapError> {
        let certificates = tls::parse_pinned_certificates(&config.certificate_pem)?;
        let tls_config = tls::pinned_client_config(certificates)?;

        let client = Client::builder()
            .use_preconfigured_tls(tls_config)
            .connect_timeout(config.timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| SnapError::Config(format!("Failed to build HTTP client: {}", e)))?;

        if !config.uses_tls() {
            tracing::warn!(
                base_url = %config.base_url(),
                "Base URL is not https; the pinned certificate is not used"
            );
        }

        Ok(Self {
            base_url: config.base_url().to_string(),
            client,
            credentials,
            channel_id: config.channel_id.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn partner_id(&self) -> &str {
        self.credentials.partner_id()
    }

    /// Sign and POST `body`, decoding the response into `T`.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        user_agent: &str,
        body: &B,
    ) -> Result<T, SnapError> {
        let response = self.send_signed(path, user_agent, body).await?;
        serde_json::from_str(&response.body).map_err(|source| {
            tracing::warn!(path, error = %source, "Failed to decode response body");
            SnapError::Decode {
                source,
                body: response.body,
            }
        })
    }

    /// Sign and POST `body`, returning the raw 2xx response.
    pub async fn send_signed<B: Serialize>(
        &self,
        path: &str,
        user_agent: &str,
        body: &B,
    ) -> Result<SignedResponse, SnapError> {
        let json = serde_json::to_string(body).map_err(SnapError::Encode)?;
        let canonical_body = canonicalize(&json);

        let timestamp = self.credentials.timestamp();
        let signed = sign_request(
            HttpMethod::Post,
            path,
            &canonical_body,
            &timestamp,
            self.credentials.private_key(),
        )?;

        let headers = SignedHeaders {
            user_agent: user_agent.to_string(),
            timestamp,
            signature: signed.signature,
            partner_id: self.credentials.partner_id().to_string(),
            external_id: self.credentials.external_id(),
            channel_id: self.channel_id.clone(),
        };

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(
            url = %url,
            external_id = %headers.external_id,
            string_to_sign = %signed.string_to_sign,
            "Making POST request: {}",
            canonical_body
        );

        let resp = self
            .client
            .post(&url)
            .headers(headers.to_header_map()?)
            .body(canonical_body)
            .send()
            .await?;

        let status = resp.status();
        let body_text = resp.text().await?;

        tracing::debug!(
            status = status.as_u16(),
            "Received response: {}",
            body_text
        );

        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "API request failed");
            return Err(SnapError::Api {
                status: status.as_u16(),
                body: body_text,
            });
        }

        Ok(SignedResponse {
            status: status.as_u16(),
            body: body_text,
        })
    }
}

impl Clone for SnapHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            client: self.client.clone(),
            credentials: self.credentials.clone(),
            channel_id: self.channel_id.clone(),
        }
    }
}
