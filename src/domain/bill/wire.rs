//! Wire types for virtual-account bills.
//!
//! `partnerServiceId` is fixed-width and may carry leading spaces
//! (`"   88001"`); it is sent exactly as given.

use serde::{Deserialize, Serialize};

use crate::domain::{AdditionalInfo, Amount, BusinessResponse};

// ─── Inquiry ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillInquiryRequest {
    pub partner_reference_no: String,
    pub partner_service_id: String,
    pub customer_no: String,
    pub virtual_account_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<BillInquiryAdditionalInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillInquiryAdditionalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biller_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_account: Option<String>,
}

impl BillInquiryRequest {
    pub fn new(
        partner_reference_no: impl Into<String>,
        partner_service_id: impl Into<String>,
        customer_no: impl Into<String>,
        virtual_account_no: impl Into<String>,
    ) -> Self {
        Self {
            partner_reference_no: partner_reference_no.into(),
            partner_service_id: partner_service_id.into(),
            customer_no: customer_no.into(),
            virtual_account_no: virtual_account_no.into(),
            additional_info: None,
        }
    }

    pub fn with_biller_code(mut self, code: impl Into<String>) -> Self {
        self.additional_info
            .get_or_insert_with(Default::default)
            .biller_code = Some(code.into());
        self
    }

    pub fn with_source_account(mut self, account: impl Into<String>) -> Self {
        self.additional_info
            .get_or_insert_with(Default::default)
            .source_account = Some(account.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillInquiryResponse {
    pub response_code: String,
    #[serde(default)]
    pub response_message: String,
    #[serde(default)]
    pub virtual_account_data: Option<VirtualAccountData>,
    #[serde(default)]
    pub additional_info: Option<AdditionalInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualAccountData {
    #[serde(default)]
    pub partner_service_id: Option<String>,
    #[serde(default)]
    pub customer_no: Option<String>,
    #[serde(default)]
    pub virtual_account_no: Option<String>,
    #[serde(default)]
    pub virtual_account_name: Option<String>,
    #[serde(default)]
    pub total_amount: Option<Amount>,
    /// `"C"` closed amount, `"O"` open amount.
    #[serde(default)]
    pub virtual_account_trx_type: Option<String>,
    #[serde(default)]
    pub partner_reference_no: Option<String>,
}

impl BusinessResponse for BillInquiryResponse {
    const SUCCESS_CODE: &'static str = "2003200";

    fn response_code(&self) -> &str {
        &self.response_code
    }

    fn response_message(&self) -> &str {
        &self.response_message
    }
}

// ─── Payment ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentRequest {
    pub partner_reference_no: String,
    pub partner_service_id: String,
    pub customer_no: String,
    pub virtual_account_no: String,
    pub virtual_account_name: String,
    pub source_account: String,
    pub paid_amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trx_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<BillPaymentAdditionalInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentAdditionalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biller_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruct_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl BillPaymentRequest {
    pub fn new(
        partner_reference_no: impl Into<String>,
        partner_service_id: impl Into<String>,
        customer_no: impl Into<String>,
        virtual_account_no: impl Into<String>,
        virtual_account_name: impl Into<String>,
        source_account: impl Into<String>,
        paid_amount: Amount,
    ) -> Self {
        Self {
            partner_reference_no: partner_reference_no.into(),
            partner_service_id: partner_service_id.into(),
            customer_no: customer_no.into(),
            virtual_account_no: virtual_account_no.into(),
            virtual_account_name: virtual_account_name.into(),
            source_account: source_account.into(),
            paid_amount,
            trx_date_time: None,
            additional_info: None,
        }
    }

    /// Pay a bill returned by a successful inquiry.
    ///
    /// Returns `None` when the inquiry carried no virtual account data.
    pub fn from_inquiry(
        inquiry: &BillInquiryResponse,
        partner_reference_no: impl Into<String>,
        source_account: impl Into<String>,
    ) -> Option<Self> {
        let data = inquiry.virtual_account_data.as_ref()?;
        Some(Self::new(
            partner_reference_no,
            data.partner_service_id.clone()?,
            data.customer_no.clone()?,
            data.virtual_account_no.clone()?,
            data.virtual_account_name.clone().unwrap_or_default(),
            source_account,
            data.total_amount.clone()?,
        ))
    }

    pub fn with_trx_date_time(mut self, at: impl Into<String>) -> Self {
        self.trx_date_time = Some(at.into());
        self
    }

    pub fn with_biller_code(mut self, code: impl Into<String>) -> Self {
        self.additional_info_mut().biller_code = Some(code.into());
        self
    }

    pub fn with_instruct_date(mut self, date: impl Into<String>) -> Self {
        self.additional_info_mut().instruct_date = Some(date.into());
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.additional_info_mut().callback_url = Some(url.into());
        self
    }

    fn additional_info_mut(&mut self) -> &mut BillPaymentAdditionalInfo {
        self.additional_info.get_or_insert_with(Default::default)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentResponse {
    pub response_code: String,
    #[serde(default)]
    pub response_message: String,
    #[serde(default)]
    pub virtual_account_data: Option<PaidBillData>,
    #[serde(default)]
    pub additional_info: Option<AdditionalInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidBillData {
    #[serde(default)]
    pub partner_reference_no: Option<String>,
    #[serde(default)]
    pub reference_no: Option<String>,
    #[serde(default)]
    pub partner_service_id: Option<String>,
    #[serde(default)]
    pub customer_no: Option<String>,
    #[serde(default)]
    pub virtual_account_no: Option<String>,
    #[serde(default)]
    pub virtual_account_name: Option<String>,
    #[serde(default)]
    pub source_account: Option<String>,
    #[serde(default)]
    pub paid_amount: Option<Amount>,
    #[serde(default)]
    pub trx_date_time: Option<String>,
}

impl BusinessResponse for BillPaymentResponse {
    const SUCCESS_CODE: &'static str = "2003300";

    fn response_code(&self) -> &str {
        &self.response_code
    }

    fn response_message(&self) -> &str {
        &self.response_message
    }
}
