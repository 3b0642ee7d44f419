//! Game-servers sub-client.

use std::collections::HashMap;

use crate::client::CFToolsClient;
use crate::domain::game_server::wire::GameServerResponse;
use crate::domain::game_server::{GameServer, GetGameServerRequest};
use crate::error::{ApiError, SdkError};
use crate::http::{AuthMode, HttpRequest, RequestOptions};

pub struct GameServers<'a> {
    pub(crate) client: &'a CFToolsClient,
}

impl<'a> GameServers<'a> {
    /// Get the listing details of a game server.
    pub async fn get(
        &self,
        request: impl Into<GetGameServerRequest>,
    ) -> Result<GameServer, SdkError> {
        let id = request.into().id();
        let http_request = HttpRequest::get(
            format!("{}/v1/gameserver/{}", self.client.base_url, id),
            RequestOptions::default()
                .auth(AuthMode::Optional)
                .cacheable(),
        );
        let url = http_request.full_url();
        let mut response: HashMap<String, serde_json::Value> =
            self.client.executor.execute_json(http_request).await?;

        let entry = response
            .remove(id.as_str())
            .ok_or(ApiError::ResourceNotFound { url })?;
        let entry: GameServerResponse = serde_json::from_value(entry)?;
        Ok(GameServer::from_wire(id, entry))
    }
}
