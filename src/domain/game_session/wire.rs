//! Wire types for game-session responses (REST).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{CFToolsId, SteamId64};

/// Response of `GET /v1/server/{id}/GSM/list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSessionsResponse {
    #[serde(default)]
    pub sessions: Vec<GameSessionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSessionResponse {
    pub id: String,
    pub cftools_id: CFToolsId,
    pub created_at: DateTime<Utc>,
    pub gamedata: GameDataResponse,
    #[serde(default)]
    pub live: Option<LiveResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDataResponse {
    #[serde(default)]
    pub player_name: String,
    #[serde(default)]
    pub steam64: Option<SteamId64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LiveResponse {
    #[serde(default)]
    pub loaded: bool,
    #[serde(default)]
    pub ping: Option<PingResponse>,
    #[serde(default)]
    pub position: Option<PositionResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PingResponse {
    /// Milliseconds.
    pub actual: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionResponse {
    pub latest: Option<[f64; 3]>,
}
