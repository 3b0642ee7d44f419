//! Server list domain — priority queue and whitelist entries.
//!
//! Both lists share one wire format and differ only in their path, which is
//! also the name of the bucket a server must have configured.

pub mod client;
pub mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{CFToolsId, GenericId, ServerApiId};

/// Player lists kept per server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServerList {
    PriorityQueue,
    Whitelist,
}

impl ServerList {
    /// Path segment and bucket name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriorityQueue => "queuepriority",
            Self::Whitelist => "whitelist",
        }
    }
}

impl std::fmt::Display for ServerList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An entry of a priority queue or whitelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub cftools_id: CFToolsId,
    pub comment: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    /// `None` for permanent entries.
    pub expires_at: Option<DateTime<Utc>>,
}

impl ListEntry {
    pub fn is_permanent(&self) -> bool {
        self.expires_at.is_none()
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expiry| expiry <= now)
    }
}

/// Request to add a player to a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutListEntryRequest {
    pub player: GenericId,
    pub server_api_id: Option<ServerApiId>,
    pub comment: String,
    /// `None` adds a permanent entry.
    pub expires_at: Option<DateTime<Utc>>,
}

impl PutListEntryRequest {
    pub fn new(player: impl Into<GenericId>, comment: impl Into<String>) -> Self {
        Self {
            player: player.into(),
            server_api_id: None,
            comment: comment.into(),
            expires_at: None,
        }
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    pub fn on_server(mut self, server_api_id: impl Into<ServerApiId>) -> Self {
        self.server_api_id = Some(server_api_id.into());
        self
    }
}
