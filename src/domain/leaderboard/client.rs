//! Leaderboard sub-client.

use crate::client::CFToolsClient;
use crate::domain::leaderboard::wire::LeaderboardResponse;
use crate::domain::leaderboard::{GetLeaderboardRequest, LeaderboardEntry, MAX_LEADERBOARD_LIMIT};
use crate::error::SdkError;
use crate::http::{HttpRequest, RequestOptions};

pub struct Leaderboards<'a> {
    pub(crate) client: &'a CFToolsClient,
}

impl<'a> Leaderboards<'a> {
    /// Get the top players of a server ranked by a statistic.
    pub async fn get(
        &self,
        request: impl Into<GetLeaderboardRequest>,
    ) -> Result<Vec<LeaderboardEntry>, SdkError> {
        let request = request.into();
        if request.limit == 0 || request.limit > MAX_LEADERBOARD_LIMIT {
            return Err(SdkError::Validation(format!(
                "leaderboard limit must be 1-{}",
                MAX_LEADERBOARD_LIMIT
            )));
        }
        let server = self.client.server_api_id(request.server_api_id)?;

        let response: LeaderboardResponse = self
            .client
            .executor
            .execute_json(HttpRequest::get(
                self.client.server_url(&server, "leaderboard"),
                RequestOptions::default()
                    .query("stat", request.statistic.as_str())
                    .query("order", request.order.as_query())
                    .query("limit", request.limit.to_string())
                    .cacheable(),
            ))
            .await?;
        Ok(response
            .leaderboard
            .into_iter()
            .map(LeaderboardEntry::from)
            .collect())
    }
}
