//! Account domain — beneficiary account inquiry.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{AccountInquiryRequest, AccountInquiryResponse};
