//! HTTP transport layer — `SnapHttp`, pinned TLS and signed headers.

pub mod client;
pub mod tls;

pub use client::{SignedHeaders, SignedResponse, SnapHttp};
