//! Conversions from wire types to domain types for leaderboards.

use std::time::Duration;

use super::wire::LeaderboardEntryResponse;
use super::LeaderboardEntry;

impl From<LeaderboardEntryResponse> for LeaderboardEntry {
    fn from(e: LeaderboardEntryResponse) -> Self {
        Self {
            rank: e.rank,
            cftools_id: e.cftools_id,
            name: e.latest_name,
            kills: e.kills,
            deaths: e.deaths,
            suicides: e.suicides,
            playtime: Duration::from_secs(e.playtime),
            kill_death_ratio: e.kdratio,
            longest_kill: e.longest_kill,
            longest_shot: e.longest_shot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_wire_with_partial_stats() {
        let wire: LeaderboardEntryResponse = serde_json::from_str(
            r#"{"cftools_id": "abc", "latest_name": "Bob", "rank": 1, "kills": 42, "kdratio": 2.5}"#,
        )
        .unwrap();

        let entry = LeaderboardEntry::from(wire);

        assert_eq!(entry.rank, 1);
        assert_eq!(entry.name, "Bob");
        assert_eq!(entry.kills, 42);
        assert_eq!(entry.deaths, 0);
        assert_eq!(entry.kill_death_ratio, 2.5);
        assert_eq!(entry.playtime, Duration::ZERO);
    }
}
