//! Game-session domain — players currently connected to a server.

pub mod client;
pub mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::shared::{CFToolsId, SteamId64};

/// A live player session on a server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: String,
    pub cftools_id: CFToolsId,
    pub player_name: String,
    pub steam_id: Option<SteamId64>,
    pub connected_at: DateTime<Utc>,
    /// Whether the player finished loading into the world.
    pub loaded: bool,
    pub ping: Option<Duration>,
    /// Last known world position `[x, y, z]`.
    pub position: Option<[f64; 3]>,
}

impl GameSession {
    /// How long the player has been connected as of `now`.
    pub fn duration_at(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.connected_at
    }
}
