//! Conversions from wire types to domain types for players.

use std::time::Duration;

use super::wire::PlayerEntryResponse;
use super::Player;
use crate::shared::CFToolsId;

impl Player {
    pub(crate) fn from_wire(cftools_id: CFToolsId, entry: PlayerEntryResponse) -> Self {
        Self {
            cftools_id,
            names: entry.omega.name_history,
            aliases: entry.omega.aliases,
            playtime: Duration::from_secs(entry.omega.playtime),
            sessions: entry.omega.sessions,
            created_at: entry.omega.created_at,
        }
    }
}
