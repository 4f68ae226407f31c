//! Wire types for interbank transfers.

use serde::{Deserialize, Serialize};

use crate::domain::{AdditionalInfo, Amount, BusinessResponse, StatusRequest, TransactionStatus};

/// Service code of an interbank transfer, used for status lookups.
pub const TRANSFER_SERVICE_CODE: &str = "18";

// ─── Request ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInterbankRequest {
    pub partner_reference_no: String,
    pub amount: Amount,
    pub beneficiary_account_name: String,
    pub beneficiary_account_no: String,
    pub beneficiary_bank_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_email: Option<String>,
    pub source_account_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub originator_infos: Option<OriginatorInfos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<TransferAdditionalInfo>,
}

/// Ultimate sender, when the partner transfers on behalf of a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OriginatorInfos {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub originator_customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub originator_customer_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub originator_bank_code: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferAdditionalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruct_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl TransferInterbankRequest {
    pub fn new(
        partner_reference_no: impl Into<String>,
        amount: Amount,
        beneficiary_account_name: impl Into<String>,
        beneficiary_account_no: impl Into<String>,
        beneficiary_bank_code: impl Into<String>,
        source_account_no: impl Into<String>,
    ) -> Self {
        Self {
            partner_reference_no: partner_reference_no.into(),
            amount,
            beneficiary_account_name: beneficiary_account_name.into(),
            beneficiary_account_no: beneficiary_account_no.into(),
            beneficiary_bank_code: beneficiary_bank_code.into(),
            beneficiary_email: None,
            source_account_no: source_account_no.into(),
            transaction_date: None,
            originator_infos: None,
            additional_info: None,
        }
    }

    pub fn with_beneficiary_email(mut self, email: impl Into<String>) -> Self {
        self.beneficiary_email = Some(email.into());
        self
    }

    pub fn with_transaction_date(mut self, date: impl Into<String>) -> Self {
        self.transaction_date = Some(date.into());
        self
    }

    pub fn with_originator(
        mut self,
        customer_name: impl Into<String>,
        customer_no: impl Into<String>,
        bank_code: impl Into<String>,
    ) -> Self {
        self.originator_infos = Some(OriginatorInfos {
            originator_customer_name: Some(customer_name.into()),
            originator_customer_no: Some(customer_no.into()),
            originator_bank_code: Some(bank_code.into()),
        });
        self
    }

    /// Schedule the transfer for a later date (`YYYY-MM-DD`).
    pub fn with_instruct_date(mut self, date: impl Into<String>) -> Self {
        self.additional_info_mut().instruct_date = Some(date.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.additional_info_mut().transaction_description = Some(description.into());
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.additional_info_mut().callback_url = Some(url.into());
        self
    }

    fn additional_info_mut(&mut self) -> &mut TransferAdditionalInfo {
        self.additional_info.get_or_insert_with(Default::default)
    }
}

// ─── Responses ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferInterbankResponse {
    pub response_code: String,
    #[serde(default)]
    pub response_message: String,
    #[serde(default)]
    pub reference_no: Option<String>,
    #[serde(default)]
    pub partner_reference_no: Option<String>,
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default)]
    pub beneficiary_account_no: Option<String>,
    #[serde(default)]
    pub beneficiary_bank_code: Option<String>,
    #[serde(default)]
    pub source_account_no: Option<String>,
    #[serde(default)]
    pub originator_infos: Option<serde_json::Value>,
    #[serde(default)]
    pub additional_info: Option<AdditionalInfo>,
}

impl TransferInterbankResponse {
    /// Status lookup for this transfer, if the gateway assigned a reference.
    pub fn status_request(&self) -> Option<StatusRequest> {
        Some(StatusRequest::new(
            self.partner_reference_no.clone()?,
            self.reference_no.clone()?,
            TRANSFER_SERVICE_CODE,
        ))
    }
}

impl BusinessResponse for TransferInterbankResponse {
    const SUCCESS_CODE: &'static str = "2001800";

    fn response_code(&self) -> &str {
        &self.response_code
    }

    fn response_message(&self) -> &str {
        &self.response_message
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferStatusResponse {
    pub response_code: String,
    #[serde(default)]
    pub response_message: String,
    #[serde(default)]
    pub original_reference_no: Option<String>,
    #[serde(default)]
    pub original_partner_reference_no: Option<String>,
    #[serde(default)]
    pub service_code: Option<String>,
    #[serde(default)]
    pub transaction_date: Option<String>,
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default)]
    pub beneficiary_account_no: Option<String>,
    #[serde(default)]
    pub beneficiary_bank_code: Option<String>,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub source_account_no: Option<String>,
    #[serde(default)]
    pub latest_transaction_status: Option<String>,
    #[serde(default)]
    pub transaction_status_desc: Option<String>,
    #[serde(default)]
    pub additional_info: Option<AdditionalInfo>,
}

impl TransferStatusResponse {
    pub fn latest_status(&self) -> Option<TransactionStatus> {
        self.latest_transaction_status
            .as_deref()
            .and_then(TransactionStatus::from_code)
    }
}

impl BusinessResponse for TransferStatusResponse {
    const SUCCESS_CODE: &'static str = "2003600";

    fn response_code(&self) -> &str {
        &self.response_code
    }

    fn response_message(&self) -> &str {
        &self.response_message
    }
}
