//! Wire types for account inquiry.

use serde::{Deserialize, Serialize};

use crate::domain::{AdditionalInfo, BusinessResponse};

/// Check that a beneficiary account exists before sending money to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInquiryRequest {
    pub beneficiary_bank_code: String,
    pub beneficiary_account_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partner_reference_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AccountInquiryAdditionalInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInquiryAdditionalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_account: Option<String>,
}

impl AccountInquiryRequest {
    pub fn new(
        beneficiary_bank_code: impl Into<String>,
        beneficiary_account_no: impl Into<String>,
    ) -> Self {
        Self {
            beneficiary_bank_code: beneficiary_bank_code.into(),
            beneficiary_account_no: beneficiary_account_no.into(),
            partner_reference_no: None,
            additional_info: None,
        }
    }

    pub fn with_partner_reference_no(mut self, reference: impl Into<String>) -> Self {
        self.partner_reference_no = Some(reference.into());
        self
    }

    /// Partner account the inquiry is billed against.
    pub fn with_source_account(mut self, account: impl Into<String>) -> Self {
        self.additional_info
            .get_or_insert_with(Default::default)
            .source_account = Some(account.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInquiryResponse {
    pub response_code: String,
    #[serde(default)]
    pub response_message: String,
    #[serde(default)]
    pub reference_no: Option<String>,
    #[serde(default)]
    pub partner_reference_no: Option<String>,
    #[serde(default)]
    pub beneficiary_account_name: Option<String>,
    #[serde(default)]
    pub beneficiary_account_no: Option<String>,
    #[serde(default)]
    pub beneficiary_bank_code: Option<String>,
    #[serde(default)]
    pub beneficiary_bank_name: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub additional_info: Option<AdditionalInfo>,
}

impl BusinessResponse for AccountInquiryResponse {
    const SUCCESS_CODE: &'static str = "2001600";

    fn response_code(&self) -> &str {
        &self.response_code
    }

    fn response_message(&self) -> &str {
        &self.response_message
    }
}
