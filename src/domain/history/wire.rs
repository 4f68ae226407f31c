//! Wire types for the transaction history list.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, BusinessResponse};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryListRequest {
    pub from_date_time: String,
    pub to_date_time: String,
    pub additional_info: HistoryRequestInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRequestInfo {
    pub account_no: String,
}

impl HistoryListRequest {
    /// Range bounds use the `X-TIMESTAMP` layout, e.g. `2025-06-01T00:00:00+07:00`.
    pub fn new(
        account_no: impl Into<String>,
        from_date_time: impl Into<String>,
        to_date_time: impl Into<String>,
    ) -> Self {
        Self {
            from_date_time: from_date_time.into(),
            to_date_time: to_date_time.into(),
            additional_info: HistoryRequestInfo {
                account_no: account_no.into(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryListResponse {
    pub response_code: String,
    #[serde(default)]
    pub response_message: String,
    #[serde(default)]
    pub detail_data: Vec<HistoryDetail>,
    #[serde(default)]
    pub additional_info: Option<HistoryResponseInfo>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryDetail {
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub amount: Option<Amount>,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub source_of_funds: Vec<SourceOfFunds>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub additional_info: Option<HistoryDetailInfo>,
}

impl HistoryDetail {
    /// `true` for credits, `false` for debits, `None` when unreported.
    pub fn is_credit(&self) -> Option<bool> {
        let flag = self.additional_info.as_ref()?.debit_credit.as_deref()?;
        match flag {
            "CREDIT" | "C" => Some(true),
            "DEBIT" | "D" => Some(false),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SourceOfFunds {
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryDetailInfo {
    #[serde(default)]
    pub debit_credit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponseInfo {
    #[serde(default)]
    pub account_no: Option<String>,
    #[serde(default)]
    pub from_date_time: Option<String>,
    #[serde(default)]
    pub to_date_time: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl BusinessResponse for HistoryListResponse {
    const SUCCESS_CODE: &'static str = "2001200";

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
        let request = HistoryListRequest::new(
            "9920017573",
            "2025-06-01T00:00:00+07:00",
            "2025-06-02T00:00:00+07:00",
        );
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"fromDateTime":"2025-06-01T00:00:00+07:00","toDateTime":"2025-06-02T00:00:00+07:00","additionalInfo":{"accountNo":"9920017573"}}"#
        );
    }

    #[test]
    fn test_response_decodes_entries() {
        let body = r#"{
            "responseCode": "2001200",
            "responseMessage": "Successful",
            "detailData": [
                {
                    "dateTime": "2025-06-01T09:12:44+07:00",
                    "amount": {"value": "10000.00", "currency": "IDR"},
                    "remark": "Transfer to 8377388292",
                    "sourceOfFunds": [{"source": "DEPOSIT"}],
                    "status": "SUCCESS",
                    "type": "TRANSFER",
                    "additionalInfo": {"debitCredit": "DEBIT"}
                },
                {
                    "dateTime": "2025-06-01T11:00:00+07:00",
                    "amount": {"value": "50000.00", "currency": "IDR"},
                    "type": "TOPUP",
                    "additionalInfo": {"debitCredit": "CREDIT"}
                }
            ],
            "additionalInfo": {"accountNo": "9920017573", "message": "OK"}
        }"#;
        let response: HistoryListResponse = serde_json::from_str(body).unwrap();
        assert!(response.is_success());
        assert_eq!(response.detail_data.len(), 2);

        let first = &response.detail_data[0];
        assert_eq!(first.kind.as_deref(), Some("TRANSFER"));
        assert_eq!(first.source_of_funds[0].source.as_deref(), Some("DEPOSIT"));
        assert_eq!(first.is_credit(), Some(false));
        assert_eq!(response.detail_data[1].is_credit(), Some(true));
        assert!(response.detail_data[1].source_of_funds.is_empty());
        assert_eq!(
            response.additional_info.unwrap().account_no.as_deref(),
            Some("9920017573")
        );
    }
}
