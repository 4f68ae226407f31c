//! Transfer domain — interbank transfer and its status lookup.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{
    OriginatorInfos, TransferAdditionalInfo, TransferInterbankRequest, TransferInterbankResponse,
    TransferStatusResponse, TRANSFER_SERVICE_CODE,
};
