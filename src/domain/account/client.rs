//! Accounts sub-client.

use crate::client::FaspaySnapClient;
use crate::domain::account::wire::{AccountInquiryRequest, AccountInquiryResponse};
use crate::error::ApiResult;
use crate::network::endpoints;

/// Sub-client for account operations.
pub struct Accounts<'a> {
    pub(crate) client: &'a FaspaySnapClient,
}

impl<'a> Accounts<'a> {
    /// Look up the holder of a beneficiary account.
    pub async fn inquire(&self, request: &AccountInquiryRequest) -> ApiResult<AccountInquiryResponse> {
        tracing::info!(
            bank_code = %request.beneficiary_bank_code,
            account_no = %request.beneficiary_account_no,
            "Account inquiry"
        );
        let response: AccountInquiryResponse = self
            .client
            .execute(endpoints::ACCOUNT_INQUIRY, request)
            .await?;
        tracing::info!(response_code = %response.response_code, "Account inquiry completed");
        Ok(response)
    }
}
