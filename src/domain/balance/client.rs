//! Balances sub-client.

use crate::client::FaspaySnapClient;
use crate::domain::balance::wire::{BalanceInquiryRequest, BalanceInquiryResponse};
use crate::error::ApiResult;
use crate::network::endpoints;

pub struct Balances<'a> {
    pub(crate) client: &'a FaspaySnapClient,
}

impl<'a> Balances<'a> {
    pub async fn inquire(&self, request: &BalanceInquiryRequest) -> ApiResult<BalanceInquiryResponse> {
        tracing::info!(account_no = %request.account_no, "Balance inquiry");
        let response: BalanceInquiryResponse = self
            .client
            .execute(endpoints::BALANCE_INQUIRY, request)
            .await?;
        tracing::info!(response_code = %response.response_code, "Balance inquiry completed");
        Ok(response)
    }
}
