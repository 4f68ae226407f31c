//! Bills sub-client.

use crate::client::FaspaySnapClient;
use crate::domain::bill::wire::{
    BillInquiryRequest, BillInquiryResponse, BillPaymentRequest, BillPaymentResponse,
};
use crate::error::ApiResult;
use crate::network::endpoints;

pub struct Bills<'a> {
    pub(crate) client: &'a FaspaySnapClient,
}

impl<'a> Bills<'a> {
    /// Fetch the outstanding bill behind a virtual account.
    pub async fn inquire(&self, request: &BillInquiryRequest) -> ApiResult<BillInquiryResponse> {
        tracing::info!(
            partner_reference_no = %request.partner_reference_no,
            virtual_account_no = %request.virtual_account_no,
            "Bill inquiry"
        );
        let response: BillInquiryResponse = self
            .client
            .execute(endpoints::BILL_INQUIRY, request)
            .await?;
        tracing::info!(response_code = %response.response_code, "Bill inquiry completed");
        Ok(response)
    }

    pub async fn pay(&self, request: &BillPaymentRequest) -> ApiResult<BillPaymentResponse> {
        tracing::info!(
            partner_reference_no = %request.partner_reference_no,
            virtual_account_no = %request.virtual_account_no,
            amount = %request.paid_amount,
            "Bill payment"
        );
        let response: BillPaymentResponse = self
            .client
            .execute(endpoints::BILL_PAYMENT, request)
            .await?;
        tracing::info!(response_code = %response.response_code, "Bill payment completed");
        Ok(response)
    }
}
