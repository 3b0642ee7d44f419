//! Conversions from wire types to domain types for game sessions.

use std::time::Duration;

use super::wire::GameSessionResponse;
use super::GameSession;

impl From<GameSessionResponse> for GameSession {
    fn from(s: GameSessionResponse) -> Self {
        let (loaded, ping, position) = match s.live {
            Some(live) => (
                live.loaded,
                live.ping.and_then(|p| p.actual).map(Duration::from_millis),
                live.position.and_then(|p| p.latest),
            ),
            None => (false, None, None),
        };

        Self {
            id: s.id,
            cftools_id: s.cftools_id,
            player_name: s.gamedata.player_name,
            steam_id: s.gamedata.steam64,
            connected_at: s.created_at,
            loaded,
            ping,
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_from_wire() {
        let wire: GameSessionResponse = serde_json::from_str(
            r#"{
                "id": "s1",
                "cftools_id": "abc",
                "created_at": "2024-05-01T12:00:00Z",
                "gamedata": {"player_name": "Bob", "steam64": "76561198012345678"},
                "live": {"loaded": true, "ping": {"actual": 42}, "position": {"latest": [1.0, 2.5, 3.0]}}
            }"#,
        )
        .unwrap();

        let session = GameSession::from(wire);

        assert_eq!(session.player_name, "Bob");
        assert_eq!(session.steam_id.unwrap().as_str(), "76561198012345678");
        assert!(session.loaded);
        assert_eq!(session.ping, Some(Duration::from_millis(42)));
        assert_eq!(session.position, Some([1.0, 2.5, 3.0]));
    }

    #[test]
    fn test_session_without_live_data() {
        let wire: GameSessionResponse = serde_json::from_str(
            r#"{"id": "s1", "cftools_id": "abc", "created_at": "2024-05-01T12:00:00Z", "gamedata": {"player_name": "Bob"}}"#,
        )
        .unwrap();

        let session = GameSession::from(wire);

        assert!(!session.loaded);
        assert!(session.ping.is_none());
        assert!(session.position.is_none());
    }
}
