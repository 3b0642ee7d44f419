//! High-level client — `CFToolsClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared executor and resolver, and the
//! accessor methods.

use crate::auth::{
    AnonymousAuthorizationProvider, AuthorizationProvider, LoginAuthorizationProvider,
    LoginCredentials,
};
use crate::cache::ResponseCache;
use crate::domain::ban::client::Bans;
use crate::domain::game_server::client::GameServers;
use crate::domain::game_session::client::GameSessions;
use crate::domain::leaderboard::client::Leaderboards;
use crate::domain::player::client::Players;
use crate::domain::server_list::client::ServerLists;
use crate::domain::server_list::ServerList;
use crate::error::SdkError;
use crate::http::{ResilientExecutor, Transport};
use crate::identity::IdentifierResolver;
use crate::shared::{CFToolsId, GenericId, ServerApiId};

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::ban::client::Bans as BansClient;
pub use crate::domain::game_server::client::GameServers as GameServersClient;
pub use crate::domain::game_session::client::GameSessions as GameSessionsClient;
pub use crate::domain::leaderboard::client::Leaderboards as LeaderboardsClient;
pub use crate::domain::player::client::Players as PlayersClient;
pub use crate::domain::server_list::client::ServerLists as ServerListsClient;

/// The primary entry point for the CFTools SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.players()`, `client.bans()`, etc.
#[derive(Clone)]
pub struct CFToolsClient {
    pub(crate) executor: ResilientExecutor,
    pub(crate) resolver: IdentifierResolver,
    pub(crate) base_url: String,
    pub(crate) default_server: Option<ServerApiId>,
    authenticated: bool,
}

impl CFToolsClient {
    pub fn builder() -> CFToolsClientBuilder {
        CFToolsClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn players(&self) -> Players<'_> {
        Players { client: self }
    }

    pub fn priority_queue(&self) -> ServerLists<'_> {
        ServerLists {
            client: self,
            list: ServerList::PriorityQueue,
        }
    }

    pub fn whitelist(&self) -> ServerLists<'_> {
        ServerLists {
            client: self,
            list: ServerList::Whitelist,
        }
    }

    pub fn bans(&self) -> Bans<'_> {
        Bans { client: self }
    }

    pub fn leaderboard(&self) -> Leaderboards<'_> {
        Leaderboards { client: self }
    }

    pub fn game_servers(&self) -> GameServers<'_> {
        GameServers { client: self }
    }

    pub fn game_sessions(&self) -> GameSessions<'_> {
        GameSessions { client: self }
    }

    // ── Identity ─────────────────────────────────────────────────────────

    /// Resolve any player identifier to its CFTools id.
    pub async fn resolve(&self, id: impl Into<GenericId>) -> Result<CFToolsId, SdkError> {
        self.resolver.resolve(&id.into()).await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_server(&self) -> Option<&ServerApiId> {
        self.default_server.as_ref()
    }

    /// Whether the client was built with login credentials.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Clear the response cache, if one is configured.
    pub async fn clear_cache(&self) {
        if let Some(cache) = self.executor.cache() {
            cache.clear().await;
        }
    }

    // ── Internal helpers ─────────────────────────────────────────────────

    /// The server an operation targets: the requested one, else the default.
    pub(crate) fn server_api_id(
        &self,
        requested: Option<ServerApiId>,
    ) -> Result<ServerApiId, SdkError> {
        requested
            .or_else(|| self.default_server.clone())
            .ok_or(SdkError::ServerApiIdRequired)
    }

    pub(crate) fn server_url(&self, server: &ServerApiId, path: &str) -> String {
        format!("{}/v1/server/{}/{}", self.base_url, server, path)
    }

    /// Drop cached responses under `url` after a mutation.
    pub(crate) async fn invalidate(&self, url: &str) {
        if let Some(cache) = self.executor.cache() {
            cache.invalidate_prefix(url).await;
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct CFToolsClientBuilder {
    base_url: Option<String>,
    credentials: Option<LoginCredentials>,
    enterprise_token: Option<String>,
    token: Option<String>,
    default_server: Option<ServerApiId>,
    cache_ttl: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
    create_missing_accounts: bool,
}

impl CFToolsClientBuilder {
    /// Override the API origin (defaults to the public or enterprise origin).
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    /// Application id and secret used to log in.
    pub fn credentials(mut self, credentials: LoginCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Enterprise access token; switches to the enterprise origin.
    pub fn enterprise(mut self, access_token: impl Into<String>) -> Self {
        self.enterprise_token = Some(access_token.into());
        self
    }

    /// Pre-seed a static API token, skipping the first login.
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Pre-seed the token from `CFTOOLS_API_TOKEN` when it is set.
    pub fn token_from_env(mut self) -> Self {
        if let Ok(token) = std::env::var(crate::network::API_TOKEN_ENV) {
            self.token = Some(token);
        }
        self
    }

    /// Server used by server-scoped operations that name none.
    pub fn server_api_id(mut self, id: impl Into<ServerApiId>) -> Self {
        self.default_server = Some(id.into());
        self
    }

    /// Cache GET responses for `ttl`.
    pub fn cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = Some(ttl);
        self
    }

    /// Use a custom transport instead of the default `reqwest` one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Create accounts for unknown Steam64 ids during resolution.
    ///
    /// Requires enterprise access.
    pub fn create_missing_accounts(mut self, enabled: bool) -> Self {
        self.create_missing_accounts = enabled;
        self
    }

    pub fn build(self) -> Result<CFToolsClient, SdkError> {
        if self.create_missing_accounts && self.enterprise_token.is_none() {
            return Err(SdkError::Validation(
                "creating missing accounts requires enterprise access".to_string(),
            ));
        }
        if self.credentials.is_none() && (self.enterprise_token.is_some() || self.token.is_some()) {
            return Err(SdkError::Validation(
                "enterprise access and static tokens require login credentials".to_string(),
            ));
        }

        let default_origin = if self.enterprise_token.is_some() {
            crate::network::ENTERPRISE_API_URL
        } else {
            crate::network::DEFAULT_API_URL
        };
        let base_url = self
            .base_url
            .as_deref()
            .unwrap_or(default_origin)
            .trim_end_matches('/')
            .to_string();

        let authenticated = self.credentials.is_some();
        let provider: Arc<dyn AuthorizationProvider> = match self.credentials {
            Some(credentials) => {
                let mut provider = match self.enterprise_token {
                    Some(token) => LoginAuthorizationProvider::enterprise(&base_url, credentials, token),
                    None => LoginAuthorizationProvider::new(&base_url, credentials),
                };
                if let Some(token) = self.token {
                    provider = provider.with_token(token);
                }
                Arc::new(provider)
            }
            None => Arc::new(AnonymousAuthorizationProvider),
        };

        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport()?,
        };

        let mut executor = ResilientExecutor::new(transport, provider);
        if let Some(ttl) = self.cache_ttl {
            executor = executor.with_cache(Arc::new(ResponseCache::new(ttl)));
        }
        let resolver = IdentifierResolver::new(executor.clone(), &base_url)
            .create_missing_accounts(self.create_missing_accounts);

        Ok(CFToolsClient {
            executor,
            resolver,
            base_url,
            default_server: self.default_server,
            authenticated,
        })
    }
}

#[cfg(feature = "http")]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Ok(Arc::new(crate::http::ReqwestTransport::new()?))
}

#[cfg(not(feature = "http"))]
fn default_transport() -> Result<Arc<dyn Transport>, SdkError> {
    Err(SdkError::Validation(
        "no transport configured and the `http` feature is disabled".to_string(),
    ))
}
