//! History sub-client.

use crate::client::FaspaySnapClient;
use crate::domain::history::wire::{HistoryListRequest, HistoryListResponse};
use crate::error::ApiResult;
use crate::network::endpoints;

pub struct History<'a> {
    pub(crate) client: &'a FaspaySnapClient,
}

impl<'a> History<'a> {
    /// List account movements between two instants.
    pub async fn list(&self, request: &HistoryListRequest) -> ApiResult<HistoryListResponse> {
        tracing::info!(
            account_no = %request.additional_info.account_no,
            from = %request.from_date_time,
            to = %request.to_date_time,
            "Transaction history"
        );
        let response: HistoryListResponse = self
            .client
            .execute(endpoints::HISTORY_LIST, request)
            .await?;
        tracing::info!(
            response_code = %response.response_code,
            entries = response.detail_data.len(),
            "Transaction history completed"
        );
        Ok(response)
    }
}
