//! Game-sessions sub-client.

use crate::client::CFToolsClient;
use crate::domain::game_session::wire::GameSessionsResponse;
use crate::domain::game_session::GameSession;
use crate::error::SdkError;
use crate::http::{HttpRequest, RequestOptions};
use crate::shared::ServerApiId;

pub struct GameSessions<'a> {
    pub(crate) client: &'a CFToolsClient,
}

impl<'a> GameSessions<'a> {
    /// List the players currently connected to a server.
    ///
    /// Live data, never served from the response cache.
    pub async fn list(
        &self,
        server_api_id: Option<ServerApiId>,
    ) -> Result<Vec<GameSession>, SdkError> {
        let server = self.client.server_api_id(server_api_id)?;
        let response: GameSessionsResponse = self
            .client
            .executor
            .execute_json(HttpRequest::get(
                self.client.server_url(&server, "GSM/list"),
                RequestOptions::default(),
            ))
            .await?;
        Ok(response.sessions.into_iter().map(GameSession::from).collect())
    }
}
