//! Server list sub-client — priority queue and whitelist entries.

use crate::client::CFToolsClient;
use crate::domain::server_list::wire::{ListEntriesResponse, PutListEntryBody};
use crate::domain::server_list::{ListEntry, PutListEntryRequest, ServerList};
use crate::domain::PlayerRequest;
use crate::error::SdkError;
use crate::http::{HttpRequest, RequestOptions};
use crate::shared::ServerApiId;

/// Sub-client for one server list. Obtained from `client.priority_queue()`
/// or `client.whitelist()`.
pub struct ServerLists<'a> {
    pub(crate) client: &'a CFToolsClient,
    pub(crate) list: ServerList,
}

impl<'a> ServerLists<'a> {
    pub fn list(&self) -> ServerList {
        self.list
    }

    /// Get the entry of a player, `None` if the player is not on the list.
    pub async fn get(
        &self,
        request: impl Into<PlayerRequest>,
    ) -> Result<Option<ListEntry>, SdkError> {
        let request = request.into();
        let url = self.url(request.server_api_id)?;
        let cftools_id = self.client.resolver.resolve(&request.player).await?;

        let response: ListEntriesResponse = self
            .client
            .executor
            .execute_json(HttpRequest::get(
                url,
                self.options().query("cftools_id", cftools_id.as_str()).cacheable(),
            ))
            .await?;
        Ok(response.entries.into_iter().next().map(ListEntry::from))
    }

    /// Add a player to the list.
    pub async fn put(&self, request: PutListEntryRequest) -> Result<(), SdkError> {
        let url = self.url(request.server_api_id)?;
        let body = PutListEntryBody {
            cftools_id: self.client.resolver.resolve(&request.player).await?,
            comment: request.comment,
            expires_at: request.expires_at,
        };

        self.client
            .executor
            .execute_empty(HttpRequest::post(
                &url,
                self.options().json(serde_json::to_value(&body)?),
            ))
            .await?;
        self.client.invalidate(&url).await;
        Ok(())
    }

    /// Remove a player from the list.
    pub async fn delete(&self, request: impl Into<PlayerRequest>) -> Result<(), SdkError> {
        let request = request.into();
        let url = self.url(request.server_api_id)?;
        let cftools_id = self.client.resolver.resolve(&request.player).await?;

        self.client
            .executor
            .execute_empty(HttpRequest::delete(
                &url,
                self.options().query("cftools_id", cftools_id.as_str()),
            ))
            .await?;
        self.client.invalidate(&url).await;
        Ok(())
    }

    fn url(&self, server: Option<ServerApiId>) -> Result<String, SdkError> {
        let server = self.client.server_api_id(server)?;
        Ok(self.client.server_url(&server, self.list.as_str()))
    }

    fn options(&self) -> RequestOptions {
        RequestOptions::default().bucket(self.list.as_str())
    }
}
