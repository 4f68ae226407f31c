//! Balance domain.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{AccountInfo, BalanceInquiryRequest, BalanceInquiryResponse};
