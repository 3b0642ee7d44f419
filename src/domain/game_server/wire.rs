//! Wire types for game-server responses (REST).

use serde::{Deserialize, Serialize};

/// One entry of `GET /v1/gameserver/{id}`, keyed by game-server id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameServerResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub map: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub rank: Option<u32>,
    pub host: HostResponse,
    #[serde(default)]
    pub status: StatusResponse,
    #[serde(default)]
    pub security: SecurityResponse,
    #[serde(default)]
    pub mods: Vec<ModResponse>,
    #[serde(default)]
    pub geolocation: Option<GeolocationResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostResponse {
    pub address: String,
    pub game_port: u16,
    #[serde(default)]
    pub query_port: u16,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub players: u32,
    #[serde(default)]
    pub slots: u32,
    #[serde(default)]
    pub queue: QueueResponse,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueueResponse {
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub size: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecurityResponse {
    #[serde(default)]
    pub battleye: bool,
    #[serde(default)]
    pub vac: bool,
    #[serde(default)]
    pub password: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModResponse {
    pub file_id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeolocationResponse {
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub country: Option<CountryResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryResponse {
    pub code: Option<String>,
}
