//! Transaction history domain.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

pub use wire::{HistoryDetail, HistoryListRequest, HistoryListResponse};
