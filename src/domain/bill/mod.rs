//! Bill domain — virtual-account bill inquiry and payment.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{
    BillInquiryRequest, BillInquiryResponse, BillPaymentRequest, BillPaymentResponse,
    PaidBillData, VirtualAccountData,
};
