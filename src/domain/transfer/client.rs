//! Transfers sub-client — interbank transfer and status.

use crate::client::FaspaySnapClient;
use crate::domain::transfer::wire::{
    TransferInterbankRequest, TransferInterbankResponse, TransferStatusResponse,
};
use crate::domain::StatusRequest;
use crate::error::ApiResult;
use crate::network::endpoints;

/// Sub-client for transfer operations.
pub struct Transfers<'a> {
    pub(crate) client: &'a FaspaySnapClient,
}

impl<'a> Transfers<'a> {
    /// Send money to an account at another bank.
    ///
    /// Each call is a new transfer attempt; the SDK never retries.
    pub async fn interbank(
        &self,
        request: &TransferInterbankRequest,
    ) -> ApiResult<TransferInterbankResponse> {
        tracing::info!(
            partner_reference_no = %request.partner_reference_no,
            amount = %request.amount,
            bank_code = %request.beneficiary_bank_code,
            "Interbank transfer"
        );
        let response: TransferInterbankResponse = self
            .client
            .execute(endpoints::TRANSFER_INTERBANK, request)
            .await?;
        tracing::info!(
            response_code = %response.response_code,
            reference_no = ?response.reference_no,
            "Interbank transfer completed"
        );
        Ok(response)
    }

    pub async fn status(&self, request: &StatusRequest) -> ApiResult<TransferStatusResponse> {
        tracing::info!(
            original_partner_reference_no = %request.original_partner_reference_no,
            "Transfer status"
        );
        let response: TransferStatusResponse = self
            .client
            .execute(endpoints::TRANSFER_STATUS, request)
            .await?;
        tracing::info!(
            response_code = %response.response_code,
            latest_status = ?response.latest_transaction_status,
            "Transfer status completed"
        );
        Ok(response)
    }
}
