//! Ban domain — ban list entries for players and IP addresses.

pub mod client;
pub mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{BanlistId, CFToolsId, GenericId, IpAddress, IpVersion};

/// Identifier format of a ban entry on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BanFormat {
    #[serde(rename = "cftools_id")]
    CFToolsId,
    #[serde(rename = "ipv4")]
    Ipv4,
    #[serde(rename = "ipv6")]
    Ipv6,
}

impl From<IpVersion> for BanFormat {
    fn from(version: IpVersion) -> Self {
        match version {
            IpVersion::V4 => Self::Ipv4,
            IpVersion::V6 => Self::Ipv6,
        }
    }
}

/// Who a ban applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BanTarget {
    Player(CFToolsId),
    Ip(IpAddress),
    /// Identifier in a format this SDK does not know.
    Other(String),
}

/// A ban list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ban {
    pub id: String,
    pub target: BanTarget,
    pub reason: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    /// `None` for permanent bans.
    pub expires_at: Option<DateTime<Utc>>,
}

impl Ban {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }

    pub fn is_permanent(&self) -> bool {
        self.expires_at.is_none()
    }
}

/// List the bans of a player or IP address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBansRequest {
    pub banlist_id: BanlistId,
    pub player: GenericId,
}

impl ListBansRequest {
    pub fn new(banlist_id: impl Into<BanlistId>, player: impl Into<GenericId>) -> Self {
        Self {
            banlist_id: banlist_id.into(),
            player: player.into(),
        }
    }
}

/// Ban a player or IP address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PutBanRequest {
    pub banlist_id: BanlistId,
    pub player: GenericId,
    pub reason: String,
    /// `None` bans permanently.
    pub expires_at: Option<DateTime<Utc>>,
}

impl PutBanRequest {
    pub fn new(
        banlist_id: impl Into<BanlistId>,
        player: impl Into<GenericId>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            banlist_id: banlist_id.into(),
            player: player.into(),
            reason: reason.into(),
            expires_at: None,
        }
    }

    pub fn expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

/// Remove a ban, either by its id or by the banned player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteBanRequest {
    ById {
        banlist_id: BanlistId,
        ban_id: String,
    },
    /// Fails with `AmbiguousDeleteBanRequest` if the player has several bans.
    ByPlayer {
        banlist_id: BanlistId,
        player: GenericId,
    },
}

impl DeleteBanRequest {
    pub fn by_id(banlist_id: impl Into<BanlistId>, ban_id: impl Into<String>) -> Self {
        Self::ById {
            banlist_id: banlist_id.into(),
            ban_id: ban_id.into(),
        }
    }

    pub fn by_player(banlist_id: impl Into<BanlistId>, player: impl Into<GenericId>) -> Self {
        Self::ByPlayer {
            banlist_id: banlist_id.into(),
            player: player.into(),
        }
    }
}
