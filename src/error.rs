//! Unified SDK error types.

use thiserror::Error;

/// Result alias used by every SDK operation.
pub type ApiResult<T> = Result<T, SnapError>;

/// Top-level SDK error.
///
/// A gateway rejection carried inside an HTTP 200 body (a non-success
/// business response code) is NOT an error; it decodes into the typed
/// response and is checked with
/// [`BusinessResponse::is_success`](crate::domain::BusinessResponse::is_success).
#[derive(Error, Debug)]
pub enum SnapError {
    #[error("Signing configuration error: {0}")]
    Signing(#[from] SigningError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[cfg(feature = "http")]
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Decoding error: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    #[error("Request encoding error: {0}")]
    Encode(serde_json::Error),
}

/// Coarse classification of a [`SnapError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Key, certificate or client construction problem. Not recoverable per call.
    SigningConfiguration,
    /// Network, TLS or timeout failure.
    Transport,
    /// HTTP status outside `[200, 300)`.
    Api,
    /// HTTP success, but the body did not match the expected shape.
    Decoding,
    /// The request DTO could not be serialized.
    Encoding,
}

impl SnapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Signing(_) | Self::Config(_) => ErrorKind::SigningConfiguration,
            #[cfg(feature = "http")]
            Self::Transport(_) => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::Api,
            Self::Decode { .. } => ErrorKind::Decoding,
            Self::Encode(_) => ErrorKind::Encoding,
        }
    }

    /// HTTP status code for [`SnapError::Api`] errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body, when one was received.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }
}

/// Private key / signature errors.
#[derive(Error, Debug)]
pub enum SigningError {
    #[error("Unsupported key format or corrupted PEM: no RSA PRIVATE KEY or PRIVATE KEY envelope")]
    UnsupportedEnvelope,

    #[error("Invalid base64 in PEM body: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("Invalid PKCS#1 RSA private key: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),

    #[error("Invalid PKCS#8 private key: {0}")]
    Pkcs8(#[from] rsa::pkcs8::Error),

    #[error("Signing failed: {0}")]
    SignatureFailed(String),
}
