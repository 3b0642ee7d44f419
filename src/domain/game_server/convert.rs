//! Conversions from wire types to domain types for game servers.

use super::wire::GameServerResponse;
use super::{GameServer, GameServerHost, GameServerMod, GameServerSecurity, GameServerStatus};
use crate::shared::GameServerId;

impl GameServer {
    pub(crate) fn from_wire(id: GameServerId, s: GameServerResponse) -> Self {
        let country_code = s
            .geolocation
            .filter(|g| g.available)
            .and_then(|g| g.country)
            .and_then(|c| c.code);

        Self {
            id,
            name: s.name,
            map: s.map,
            version: s.version,
            online: s.online,
            host: GameServerHost {
                address: s.host.address,
                game_port: s.host.game_port,
                query_port: s.host.query_port,
            },
            status: GameServerStatus {
                players: s.status.players,
                slots: s.status.slots,
                queue: if s.status.queue.active {
                    s.status.queue.size
                } else {
                    0
                },
            },
            security: GameServerSecurity {
                battleye: s.security.battleye,
                vac: s.security.vac,
                password: s.security.password,
            },
            mods: s
                .mods
                .into_iter()
                .map(|m| GameServerMod {
                    file_id: m.file_id,
                    name: m.name,
                })
                .collect(),
            rank: s.rank,
            country_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire() {
        let wire: GameServerResponse = serde_json::from_str(
            r#"{
                "name": "Test Server",
                "map": "chernarusplus",
                "version": "1.24",
                "online": true,
                "rank": 12,
                "host": {"address": "1.2.3.4", "game_port": 2302, "query_port": 27016},
                "status": {"players": 60, "slots": 60, "queue": {"active": true, "size": 4}},
                "security": {"battleye": true, "vac": true, "password": false},
                "mods": [{"file_id": 1559212036, "name": "CF"}],
                "geolocation": {"available": true, "country": {"code": "DE"}}
            }"#,
        )
        .unwrap();

        let server = GameServer::from_wire(GameServerId::from("gs"), wire);

        assert_eq!(server.name, "Test Server");
        assert_eq!(server.host.game_port, 2302);
        assert_eq!(server.status.queue, 4);
        assert!(server.is_full());
        assert!(server.security.battleye);
        assert_eq!(server.mods[0].name, "CF");
        assert_eq!(server.country_code.as_deref(), Some("DE"));
    }

    #[test]
    fn test_inactive_queue_reads_as_empty() {
        let wire: GameServerResponse = serde_json::from_str(
            r#"{
                "host": {"address": "1.2.3.4", "game_port": 2302},
                "status": {"players": 1, "slots": 60, "queue": {"active": false, "size": 7}}
            }"#,
        )
        .unwrap();

        let server = GameServer::from_wire(GameServerId::from("gs"), wire);

        assert_eq!(server.status.queue, 0);
        assert!(!server.is_full());
        assert!(server.country_code.is_none());
    }
}
