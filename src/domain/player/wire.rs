//! Wire types for player responses (REST).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Per-player entry of `GET /v1/server/{id}/player`, keyed by CFTools id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerEntryResponse {
    pub omega: OmegaResponse,
}

/// Account-level (omega) data of a player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmegaResponse {
    #[serde(default)]
    pub aliases: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub name_history: Vec<String>,
    /// Seconds.
    #[serde(default)]
    pub playtime: u64,
    #[serde(default)]
    pub sessions: u64,
}
