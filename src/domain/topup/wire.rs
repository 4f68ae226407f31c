//! Wire types for e-money top-ups.

use serde::{Deserialize, Serialize};

use crate::domain::{AdditionalInfo, Amount, BusinessResponse, StatusRequest, TransactionStatus};

/// Service code of a customer top-up, used for status lookups.
pub const TOPUP_SERVICE_CODE: &str = "38";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopupRequest {
    pub partner_reference_no: String,
    /// Wallet identifier at the e-money platform (usually a phone number).
    pub customer_number: String,
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    pub additional_info: TopupAdditionalInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopupAdditionalInfo {
    pub source_account: String,
    /// E-money platform, e.g. `"OVO"` or `"DANA"`.
    pub platform_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instruct_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beneficiary_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
}

impl TopupRequest {
    pub fn new(
        partner_reference_no: impl Into<String>,
        customer_number: impl Into<String>,
        amount: Amount,
        source_account: impl Into<String>,
        platform_code: impl Into<String>,
    ) -> Self {
        Self {
            partner_reference_no: partner_reference_no.into(),
            customer_number: customer_number.into(),
            amount,
            transaction_date: None,
            additional_info: TopupAdditionalInfo {
                source_account: source_account.into(),
                platform_code: platform_code.into(),
                instruct_date: None,
                beneficiary_email: None,
                transaction_description: None,
                callback_url: None,
            },
        }
    }

    pub fn with_transaction_date(mut self, date: impl Into<String>) -> Self {
        self.transaction_date = Some(date.into());
        self
    }

    pub fn with_instruct_date(mut self, date: impl Into<String>) -> Self {
        self.additional_info.instruct_date = Some(date.into());
        self
    }

    pub fn with_beneficiary_email(mut self, email: impl Into<String>) -> Self {
        self.additional_info.beneficiary_email = Some(email.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.additional_info.transaction_description = Some(description.into());
        self
    }

    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.additional_info.callback_url = Some(url.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopupResponse {
    pub response_code: String,
    #[serde(default)]
    pub response_message: String,
    #[serde(default)]
    pub reference_no: Option<String>,
    #[serde(default)]
    pub partner_reference_no: Option<String>,
    #[serde(default)]
    pub customer_number: Option<String>,
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default)]
    pub additional_info: Option<AdditionalInfo>,
}

impl TopupResponse {
    pub fn status_request(&self) -> Option<StatusRequest> {
        Some(StatusRequest::new(
            self.partner_reference_no.clone()?,
            self.reference_no.clone()?,
            TOPUP_SERVICE_CODE,
        ))
    }
}

impl BusinessResponse for TopupResponse {
    const SUCCESS_CODE: &'static str = "2003800";

    fn response_code(&self) -> &str {
        &self.response_code
    }

    fn response_message(&self) -> &str {
        &self.response_message
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopupStatusResponse {
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
    pub amount: Option<Amount>,
    #[serde(default)]
    pub latest_transaction_status: Option<String>,
    #[serde(default)]
    pub transaction_status_desc: Option<String>,
    #[serde(default)]
    pub additional_info: Option<AdditionalInfo>,
}

impl TopupStatusResponse {
    pub fn latest_status(&self) -> Option<TransactionStatus> {
        self.latest_transaction_status
            .as_deref()
            .and_then(TransactionStatus::from_code)
    }
}

impl BusinessResponse for TopupStatusResponse {
    const SUCCESS_CODE: &'static str = "2003900";

    fn response_code(&self) -> &str {
        &self.response_code
    }

    fn response_message(&self) -> &str {
        &self.response_message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body() {
        let request = TopupRequest::new(
            "TOPUP-0001",
            "081234567890",
            Amount::idr("25000.00"),
            "9920017573",
            "OVO",
        )
        .with_callback_url("https://partner.example/topup");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["customerNumber"], "081234567890");
        assert_eq!(json["additionalInfo"]["sourceAccount"], "9920017573");
        assert_eq!(json["additionalInfo"]["platformCode"], "OVO");
        assert_eq!(
            json["additionalInfo"]["callbackUrl"],
            "https://partner.example/topup"
        );
        assert!(json["additionalInfo"].get("instructDate").is_none());
        assert!(json.get("transactionDate").is_none());
    }

    #[test]
    fn test_response_status_request_uses_topup_service_code() {
        let body = r#"{
            "responseCode": "2003800",
            "responseMessage": "Successful",
            "referenceNo": "88001-7781",
            "partnerReferenceNo": "TOPUP-0001",
            "customerNumber": "081234567890",
            "amount": {"value": "25000.00", "currency": "IDR"},
            "additionalInfo": {"latestTransactionStatus": "03"}
        }"#;
        let response: TopupResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_success());
        let status = response.status_request().unwrap();
        assert_eq!(status.service_code, "38");
        assert_eq!(status.original_reference_no, "88001-7781");
    }

    #[test]
    fn test_status_response() {
        let body = r#"{
            "responseCode": "2003900",
            "responseMessage": "Successful",
            "originalPartnerReferenceNo": "TOPUP-0001",
            "serviceCode": "38",
            "latestTransactionStatus": "00",
            "transactionStatusDesc": "Success",
            "additionalInfo": {"platformName": "OVO"}
        }"#;
        let response: TopupStatusResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_success());
        assert_eq!(response.latest_status(), Some(TransactionStatus::Success));
    }
}
