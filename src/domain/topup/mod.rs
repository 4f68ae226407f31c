//! E-money top-up domain.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{TopupAdditionalInfo, TopupRequest, TopupResponse, TopupStatusResponse, TOPUP_SERVICE_CODE};
