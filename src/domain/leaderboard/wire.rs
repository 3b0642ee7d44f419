//! Wire types for leaderboard responses (REST).

use serde::{Deserialize, Serialize};

use crate::shared::CFToolsId;

/// Response of `GET /v1/server/{id}/leaderboard`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardResponse {
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntryResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaderboardEntryResponse {
    pub cftools_id: CFToolsId,
    #[serde(default)]
    pub latest_name: String,
    pub rank: u32,
    #[serde(default)]
    pub kills: u64,
    #[serde(default)]
    pub deaths: u64,
    #[serde(default)]
    pub suicides: u64,
    /// Seconds.
    #[serde(default)]
    pub playtime: u64,
    #[serde(default)]
    pub kdratio: f64,
    #[serde(default)]
    pub longest_kill: f64,
    #[serde(default)]
    pub longest_shot: f64,
}
