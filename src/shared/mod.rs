//! Shared identifier newtypes used across all domain modules.
//!
//! The string newtypes are serialization-transparent: they serialize exactly
//! like the raw strings the API sends, so wire types can hold them directly.

use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::fmt;
use std::net::IpAddr;
use std::str::FromStr;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }
    };
}

string_id!(
    /// Canonical CFTools account id. Every server-side player operation keys on it.
    CFToolsId
);
string_id!(
    /// Steam64 id (e.g. `"76561198012345678"`).
    SteamId64
);
string_id!(
    /// BattlEye GUID (32 hex characters).
    BattlEyeGuid
);
string_id!(
    /// Bohemia Interactive account id.
    BohemiaInteractiveId
);
string_id!(
    /// Server API id from the CFTools developer settings of a server.
    ServerApiId
);
string_id!(
    /// Ban list id.
    BanlistId
);
string_id!(
    /// Game-server id as used by the public server listing.
    GameServerId
);

impl GameServerId {
    /// Derive the listing id of a game server from its game, IP and game port.
    ///
    /// The id is the hex SHA-1 of `"{game_code}{ip}{port}"`.
    pub fn derive(game: Game, ip: IpAddr, port: u16) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(format!("{}{}{}", game.code(), ip, port).as_bytes());
        Self(hex::encode(hasher.finalize()))
    }
}

// ─── Game ────────────────────────────────────────────────────────────────────

/// Games known to the CFTools server listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Game {
    DayZ,
}

impl Game {
    pub fn code(&self) -> u32 {
        match self {
            Game::DayZ => 1,
        }
    }
}

// ─── IpAddress ───────────────────────────────────────────────────────────────

/// IP protocol version, used as the `format` tag of IP-based ban entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V4 => "ipv4",
            Self::V6 => "ipv6",
        }
    }
}

/// A validated IP address identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IpAddress(IpAddr);

impl IpAddress {
    pub fn new(address: IpAddr) -> Self {
        Self(address)
    }

    pub fn address(&self) -> IpAddr {
        self.0
    }

    pub fn version(&self) -> IpVersion {
        match self.0 {
            IpAddr::V4(_) => IpVersion::V4,
            IpAddr::V6(_) => IpVersion::V6,
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for IpAddress {
    type Err = std::net::AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<IpAddr> for IpAddress {
    fn from(address: IpAddr) -> Self {
        Self(address)
    }
}

// ─── GenericId ───────────────────────────────────────────────────────────────

/// Any identifier a player can be referred to by.
///
/// Only [`GenericId::CFTools`] is canonical; every other kind except
/// [`GenericId::Ip`] is resolved to a [`CFToolsId`] through the lookup endpoint
/// before it is used.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GenericId {
    CFTools(CFToolsId),
    Steam64(SteamId64),
    BattlEye(BattlEyeGuid),
    BohemiaInteractive(BohemiaInteractiveId),
    Ip(IpAddress),
}

impl GenericId {
    /// The raw identifier as sent on the wire.
    pub fn raw(&self) -> String {
        match self {
            Self::CFTools(id) => id.to_string(),
            Self::Steam64(id) => id.to_string(),
            Self::BattlEye(id) => id.to_string(),
            Self::BohemiaInteractive(id) => id.to_string(),
            Self::Ip(ip) => ip.to_string(),
        }
    }

    pub fn is_canonical(&self) -> bool {
        matches!(self, Self::CFTools(_))
    }
}

impl fmt::Display for GenericId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw())
    }
}

impl From<CFToolsId> for GenericId {
    fn from(id: CFToolsId) -> Self {
        Self::CFTools(id)
    }
}

impl From<SteamId64> for GenericId {
    fn from(id: SteamId64) -> Self {
        Self::Steam64(id)
    }
}

impl From<BattlEyeGuid> for GenericId {
    fn from(id: BattlEyeGuid) -> Self {
        Self::BattlEye(id)
    }
}

impl From<BohemiaInteractiveId> for GenericId {
    fn from(id: BohemiaInteractiveId) -> Self {
        Self::BohemiaInteractive(id)
    }
}

impl From<IpAddress> for GenericId {
    fn from(ip: IpAddress) -> Self {
        Self::Ip(ip)
    }
}
