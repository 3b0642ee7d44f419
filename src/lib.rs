//! # CFTools SDK
//!
//! An async Rust SDK for the CFTools Data API: player accounts, priority
//! queue and whitelist entries, ban lists, leaderboards, live game sessions
//! and game-server listings.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Identifier newtypes, domain models, error types
//! 2. **Auth** — Bearer credential lifecycle behind `AuthorizationProvider`
//! 3. **HTTP API** — `Transport` seam, error classification and the resilient executor
//! 4. **Identity** — Any player identifier to a canonical CFTools id
//! 5. **High-Level Client** — `CFToolsClient` with nested sub-clients and caching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cftools_sdk::prelude::*;
//!
//! let client = CFToolsClient::builder()
//!     .credentials(LoginCredentials::new("application-id", "secret"))
//!     .server_api_id("server-api-id")
//!     .build()?;
//!
//! let player = client.players().get(SteamId64::from("76561198012345678")).await?;
//! let top = client.leaderboard().get(Statistic::Kills).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared identifier newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// API origins and environment variable names.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authorization credentials, login and refresh.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// TTL response cache.
pub mod cache;

/// Transport abstraction, error classification and the retrying executor.
pub mod http;

// ── Layer 4: Identity ────────────────────────────────────────────────────────

pub mod identity;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `CFToolsClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{
        BanlistId, BattlEyeGuid, BohemiaInteractiveId, CFToolsId, Game, GameServerId, GenericId,
        IpAddress, IpVersion, ServerApiId, SteamId64,
    };

    // Domain types
    pub use crate::domain::ban::{
        Ban, BanFormat, BanTarget, DeleteBanRequest, ListBansRequest, PutBanRequest,
    };
    pub use crate::domain::game_server::{GameServer, GetGameServerRequest};
    pub use crate::domain::game_session::GameSession;
    pub use crate::domain::leaderboard::{
        GetLeaderboardRequest, LeaderboardEntry, SortOrder, Statistic,
    };
    pub use crate::domain::player::Player;
    pub use crate::domain::server_list::{ListEntry, PutListEntryRequest, ServerList};
    pub use crate::domain::PlayerRequest;

    // Auth
    pub use crate::auth::{Authorization, AuthorizationProvider, LoginCredentials};

    // Errors
    pub use crate::error::{ApiError, AuthError, HttpError, SdkError};

    // Client
    pub use crate::client::{CFToolsClient, CFToolsClientBuilder};
}
