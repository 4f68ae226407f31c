use serde::{Deserialize, Serialize};

use crate::domain::{Amount, BusinessResponse};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceInquiryRequest {
    pub account_no: String,
}

impl BalanceInquiryRequest {
    pub fn new(account_no: impl Into<String>) -> Self {
        Self {
            account_no: account_no.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceInquiryResponse {
    pub response_code: String,
    #[serde(default)]
    pub response_message: String,
    #[serde(default)]
    pub account_no: Option<String>,
    #[serde(default)]
    pub account_infos: Vec<AccountInfo>,
}

/// One balance bucket of the inquired account.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountInfo {
    #[serde(default)]
    pub balance_type: Option<String>,
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default)]
    pub available_balance: Option<Amount>,
    #[serde(default)]
    pub status: Option<String>,
}

impl BalanceInquiryResponse {
    /// Available balance of the first bucket, which is the cash balance.
    pub fn available_balance(&self) -> Option<&Amount> {
        self.account_infos
            .first()
            .and_then(|info| info.available_balance.as_ref())
    }
}

impl BusinessResponse for BalanceInquiryResponse {
    const SUCCESS_CODE: &'static str = "2001100";

    fn response_code(&self) -> &str {
        &self.response_code
    }

    fn response_message(&self) -> &str {
        &self.response_message
    }
}
