//! Credential context — partner id, private key and the per-call rotating
//! values (timestamp, external id).

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use rand::Rng;

use crate::error::SigningError;
use crate::signing::PrivateKey;

/// `X-TIMESTAMP` layout: seconds precision, numeric offset (`+07:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Supplies everything a signed call needs besides the body.
///
/// `timestamp` and `external_id` are evaluated once per call and must not be
/// cached. Implementations are shared across concurrent calls.
pub trait CredentialSource: Send + Sync {
    fn timestamp(&self) -> String;
    fn external_id(&self) -> String;
    fn partner_id(&self) -> &str;
    fn private_key(&self) -> &PrivateKey;
}

/// Format a timestamp the way the gateway expects.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// `{partner_id}{unix_millis}{nnn}` with a 3-digit random suffix.
///
/// Best-effort unique; the gateway only uses it as a dedupe hint.
pub fn generate_external_id(partner_id: &str, unix_millis: i64) -> String {
    let suffix: u16 = rand::thread_rng().gen_range(0..1000);
    format!("{}{}{:03}", partner_id, unix_millis, suffix)
}

/// Default [`CredentialSource`] backed by the system clock.
#[derive(Debug, Clone)]
pub struct PartnerCredentials {
    partner_id: String,
    private_key: PrivateKey,
    utc_offset: Option<FixedOffset>,
}

impl PartnerCredentials {
    pub fn new(partner_id: impl Into<String>, private_key: PrivateKey) -> Self {
        Self {
            partner_id: partner_id.into(),
            private_key,
            utc_offset: None,
        }
    }

    /// Parse the PEM key and build credentials in one step.
    pub fn from_pem(partner_id: impl Into<String>, private_key_pem: &str) -> Result<Self, SigningError> {
        Ok(Self::new(partner_id, PrivateKey::from_pem(private_key_pem)?))
    }

    /// Render timestamps in a fixed offset instead of the host's local zone.
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }
}

impl CredentialSource for PartnerCredentials {
    fn timestamp(&self) -> String {
        match self.utc_offset {
            Some(offset) => format_timestamp(&Utc::now().with_timezone(&offset)),
            None => format_timestamp(&Local::now()),
        }
    }

    fn external_id(&self) -> String {
        generate_external_id(&self.partner_id, Utc::now().timestamp_millis())
    }

    fn partner_id(&self) -> &str {
        &self.partner_id
    }

    fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }
}
