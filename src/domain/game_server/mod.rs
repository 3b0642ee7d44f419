//! Game-server domain — public server listing metadata.

pub mod client;
pub mod convert;
pub mod wire;

use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use crate::shared::{Game, GameServerId};

/// A listed game server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameServer {
    pub id: GameServerId,
    pub name: String,
    pub map: String,
    pub version: String,
    pub online: bool,
    pub host: GameServerHost,
    pub status: GameServerStatus,
    pub security: GameServerSecurity,
    pub mods: Vec<GameServerMod>,
    pub rank: Option<u32>,
    pub country_code: Option<String>,
}

impl GameServer {
    /// Whether every slot is taken.
    pub fn is_full(&self) -> bool {
        self.status.players >= self.status.slots
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameServerHost {
    pub address: String,
    pub game_port: u16,
    pub query_port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameServerStatus {
    pub players: u32,
    pub slots: u32,
    /// Players waiting in the join queue.
    pub queue: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameServerSecurity {
    pub battleye: bool,
    pub vac: bool,
    pub password: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameServerMod {
    pub file_id: u64,
    pub name: String,
}

/// Which server to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetGameServerRequest {
    ById(GameServerId),
    /// Derives the listing id from the game, address and game port.
    ByAddress { game: Game, ip: IpAddr, port: u16 },
}

impl GetGameServerRequest {
    pub fn by_address(game: Game, ip: IpAddr, port: u16) -> Self {
        Self::ByAddress { game, ip, port }
    }

    pub fn id(&self) -> GameServerId {
        match self {
            Self::ById(id) => id.clone(),
            Self::ByAddress { game, ip, port } => GameServerId::derive(*game, *ip, *port),
        }
    }
}

impl From<GameServerId> for GetGameServerRequest {
    fn from(id: GameServerId) -> Self {
        Self::ById(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_by_address_derives_id() {
        let ip: IpAddr = "127.0.0.1".parse().unwrap();
        let request = GetGameServerRequest::by_address(Game::DayZ, ip, 2302);

        assert_eq!(request.id(), GameServerId::derive(Game::DayZ, ip, 2302));
    }

    #[test]
    fn test_request_by_id_is_unchanged() {
        let request = GetGameServerRequest::from(GameServerId::from("abc"));
        assert_eq!(request.id().as_str(), "abc");
    }
}
