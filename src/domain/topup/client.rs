//! Top-ups sub-client.

use crate::client::FaspaySnapClient;
use crate::domain::topup::wire::{TopupRequest, TopupResponse, TopupStatusResponse};
use crate::domain::StatusRequest;
use crate::error::ApiResult;
use crate::network::endpoints;

pub struct Topups<'a> {
    pub(crate) client: &'a FaspaySnapClient,
}

impl<'a> Topups<'a> {
    /// Credit a customer's e-money wallet.
    pub async fn topup(&self, request: &TopupRequest) -> ApiResult<TopupResponse> {
        tracing::info!(
            partner_reference_no = %request.partner_reference_no,
            platform = %request.additional_info.platform_code,
            amount = %request.amount,
            "E-money top-up"
        );
        let response: TopupResponse = self
            .client
            .execute(endpoints::EMONEY_TOPUP, request)
            .await?;
        tracing::info!(response_code = %response.response_code, "E-money top-up completed");
        Ok(response)
    }

    pub async fn status(&self, request: &StatusRequest) -> ApiResult<TopupStatusResponse> {
        tracing::info!(
            original_partner_reference_no = %request.original_partner_reference_no,
            "Top-up status"
        );
        let response: TopupStatusResponse = self
            .client
            .execute(endpoints::EMONEY_TOPUP_STATUS, request)
            .await?;
        tracing::info!(
            response_code = %response.response_code,
            latest_status = ?response.latest_transaction_status,
            "Top-up status completed"
        );
        Ok(response)
    }
}
