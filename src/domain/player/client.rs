//! Players sub-client — account details.

use std::collections::HashMap;

use crate::client::CFToolsClient;
use crate::domain::player::wire::PlayerEntryResponse;
use crate::domain::player::Player;
use crate::domain::PlayerRequest;
use crate::error::{ApiError, SdkError};
use crate::http::{HttpRequest, RequestOptions};

pub struct Players<'a> {
    pub(crate) client: &'a CFToolsClient,
}

impl<'a> Players<'a> {
    /// Get the account details of a player on a server.
    pub async fn get(&self, request: impl Into<PlayerRequest>) -> Result<Player, SdkError> {
        let request = request.into();
        let server = self.client.server_api_id(request.server_api_id)?;
        let cftools_id = self.client.resolver.resolve(&request.player).await?;

        let http_request = HttpRequest::get(
            self.client.server_url(&server, "player"),
            RequestOptions::default()
                .query("cftools_id", cftools_id.as_str())
                .cacheable(),
        );
        let url = http_request.full_url();
        let mut response: HashMap<String, serde_json::Value> =
            self.client.executor.execute_json(http_request).await?;

        let entry = response
            .remove(cftools_id.as_str())
            .ok_or(ApiError::ResourceNotFound { url })?;
        let entry: PlayerEntryResponse = serde_json::from_value(entry)?;
        Ok(Player::from_wire(cftools_id, entry))
    }
}
