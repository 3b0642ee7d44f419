//! Leaderboard domain — per-server player rankings.

pub mod client;
pub mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::shared::{CFToolsId, ServerApiId};

/// Largest page the leaderboard endpoint serves.
pub const MAX_LEADERBOARD_LIMIT: u32 = 100;

/// Statistic a leaderboard is ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    Kills,
    Deaths,
    Suicides,
    Playtime,
    LongestKill,
    LongestShot,
    #[serde(rename = "kdratio")]
    KillDeathRatio,
}

impl Statistic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kills => "kills",
            Self::Deaths => "deaths",
            Self::Suicides => "suicides",
            Self::Playtime => "playtime",
            Self::LongestKill => "longest_kill",
            Self::LongestShot => "longest_shot",
            Self::KillDeathRatio => "kdratio",
        }
    }
}

/// Sort direction of a leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn as_query(&self) -> &'static str {
        match self {
            Self::Ascending => "1",
            Self::Descending => "-1",
        }
    }
}

/// One ranked player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub cftools_id: CFToolsId,
    pub name: String,
    pub kills: u64,
    pub deaths: u64,
    pub suicides: u64,
    pub playtime: Duration,
    pub kill_death_ratio: f64,
    /// Meters.
    pub longest_kill: f64,
    /// Meters.
    pub longest_shot: f64,
}

/// Leaderboard query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetLeaderboardRequest {
    pub server_api_id: Option<ServerApiId>,
    pub statistic: Statistic,
    pub order: SortOrder,
    pub limit: u32,
}

impl GetLeaderboardRequest {
    pub fn new(statistic: Statistic) -> Self {
        Self {
            server_api_id: None,
            statistic,
            order: SortOrder::default(),
            limit: 10,
        }
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn on_server(mut self, server_api_id: impl Into<ServerApiId>) -> Self {
        self.server_api_id = Some(server_api_id.into());
        self
    }
}

impl From<Statistic> for GetLeaderboardRequest {
    fn from(statistic: Statistic) -> Self {
        Self::new(statistic)
    }
}
