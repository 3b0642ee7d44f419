//! Bans sub-client — list, add and remove ban list entries.

use crate::client::CFToolsClient;
use crate::domain::ban::wire::{BansResponse, PutBanBody};
use crate::domain::ban::{Ban, BanFormat, DeleteBanRequest, ListBansRequest, PutBanRequest};
use crate::error::SdkError;
use crate::http::{HttpRequest, RequestOptions};
use crate::shared::{BanlistId, GenericId};

pub struct Bans<'a> {
    pub(crate) client: &'a CFToolsClient,
}

impl<'a> Bans<'a> {
    /// List the bans of a player or IP address.
    pub async fn list(&self, request: ListBansRequest) -> Result<Vec<Ban>, SdkError> {
        self.fetch_bans(&request.banlist_id, &request.player, true).await
    }

    /// Ban a player or IP address.
    pub async fn put(&self, request: PutBanRequest) -> Result<(), SdkError> {
        let url = self.url(&request.banlist_id);
        let (format, identifier) = self.identify(&request.player).await?;
        let body = PutBanBody {
            format,
            identifier,
            reason: request.reason,
            expires_at: request.expires_at,
        };

        self.client
            .executor
            .execute_empty(HttpRequest::post(
                &url,
                RequestOptions::default().json(serde_json::to_value(&body)?),
            ))
            .await?;
        self.client.invalidate(&url).await;
        Ok(())
    }

    /// Remove a ban.
    ///
    /// Deleting by player removes its only ban; a player without bans is a
    /// no-op and a player with several bans is rejected as ambiguous.
    pub async fn delete(&self, request: DeleteBanRequest) -> Result<(), SdkError> {
        let (banlist_id, ban_id) = match request {
            DeleteBanRequest::ById { banlist_id, ban_id } => (banlist_id, ban_id),
            DeleteBanRequest::ByPlayer { banlist_id, player } => {
                // Never served from the cache.
                let mut bans = self.fetch_bans(&banlist_id, &player, false).await?;
                match bans.len() {
                    0 => {
                        tracing::debug!(player = %player, "No ban to delete");
                        return Ok(());
                    }
                    1 => (banlist_id, bans.remove(0).id),
                    matches => {
                        return Err(SdkError::AmbiguousDeleteBanRequest {
                            identifier: player.raw(),
                            matches,
                        })
                    }
                }
            }
        };

        let url = self.url(&banlist_id);
        self.client
            .executor
            .execute_empty(HttpRequest::delete(
                &url,
                RequestOptions::default().query("ban_id", ban_id),
            ))
            .await?;
        self.client.invalidate(&url).await;
        Ok(())
    }

    async fn fetch_bans(
        &self,
        banlist_id: &BanlistId,
        player: &GenericId,
        cacheable: bool,
    ) -> Result<Vec<Ban>, SdkError> {
        let (_, identifier) = self.identify(player).await?;
        let mut options = RequestOptions::default().query("filter", identifier);
        if cacheable {
            options = options.cacheable();
        }

        let response: BansResponse = self
            .client
            .executor
            .execute_json(HttpRequest::get(self.url(banlist_id), options))
            .await?;
        Ok(response.entries.into_iter().map(Ban::from).collect())
    }

    fn url(&self, banlist_id: &BanlistId) -> String {
        format!("{}/v1/banlist/{}/bans", self.client.base_url, banlist_id)
    }

    /// Wire format and identifier of a ban target. IP addresses are used
    /// as-is, every other identifier is resolved to a CFTools id.
    async fn identify(&self, player: &GenericId) -> Result<(BanFormat, String), SdkError> {
        match player {
            GenericId::Ip(ip) => Ok((BanFormat::from(ip.version()), ip.to_string())),
            other => {
                let cftools_id = self.client.resolver.resolve(other).await?;
                Ok((BanFormat::CFToolsId, cftools_id.to_string()))
            }
        }
    }
}
