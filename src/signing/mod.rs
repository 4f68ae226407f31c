//! Request signing — canonical body, string-to-sign, RSA-SHA256 signature.
//!
//! The same canonical string is hashed into the string-to-sign and sent as the
//! request body. Canonicalize exactly once and reuse the result:
//!
//! ```rust,ignore
//! use faspay_snap::signing::{canonicalize, sign_request, HttpMethod, PrivateKey};
//!
//! let key = PrivateKey::from_pem(&pem)?;
//! let body = canonicalize(&serde_json::to_string(&request)?);
//! let signed = sign_request(HttpMethod::Post, path, &body, &timestamp, &key)?;
//! // send `body` with `X-Signature: signed.signature`
//! ```

pub mod canonical;
pub mod signature;

pub use canonical::canonicalize;
pub use signature::{
    body_digest_hex, build_string_to_sign, sign, sign_request, HttpMethod, PrivateKey,
    SignedRequest,
};
