//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain types and request types
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — Wire → domain conversions
//! - `client.rs` — Sub-client with HTTP methods

pub mod ban;
pub mod game_server;
pub mod game_session;
pub mod leaderboard;
pub mod player;
pub mod server_list;

use serde::{Deserialize, Serialize};

use crate::shared::{
    BattlEyeGuid, BohemiaInteractiveId, CFToolsId, GenericId, IpAddress, ServerApiId, SteamId64,
};

/// A player-scoped request against one server.
///
/// Converts from any player identifier, so operations accept a bare id as
/// well as a request naming the server explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRequest {
    pub player: GenericId,
    /// Falls back to the client's default server when `None`.
    pub server_api_id: Option<ServerApiId>,
}

impl PlayerRequest {
    pub fn new(player: impl Into<GenericId>) -> Self {
        Self {
            player: player.into(),
            server_api_id: None,
        }
    }

    pub fn on_server(mut self, server_api_id: impl Into<ServerApiId>) -> Self {
        self.server_api_id = Some(server_api_id.into());
        self
    }
}

macro_rules! player_request_from {
    ($($id:ty),*) => {
        $(
            impl From<$id> for PlayerRequest {
                fn from(id: $id) -> Self {
                    Self::new(id)
                }
            }
        )*
    };
}

player_request_from!(GenericId, CFToolsId, SteamId64, BattlEyeGuid, BohemiaInteractiveId, IpAddress);

/// `{"cftools_id": ...}` reference embedded in several responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub cftools_id: CFToolsId,
}
