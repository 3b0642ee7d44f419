//! Player domain — account details of a player on a server.

pub mod client;
pub mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::shared::CFToolsId;

/// Account details of a player as seen by one server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub cftools_id: CFToolsId,
    /// Names the player used, most recent first.
    pub names: Vec<String>,
    pub aliases: Vec<String>,
    pub playtime: Duration,
    pub sessions: u64,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// The most recently used name.
    pub fn latest_name(&self) -> Option<&str> {
        self.names.first().map(String::as_str)
    }
}
