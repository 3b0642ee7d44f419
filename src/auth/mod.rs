//! Authorization — login credentials, bearer credentials and their providers.
//!
//! ## Lifecycle
//!
//! - A provider exchanges [`LoginCredentials`] for a bearer token at
//!   `POST /v1/auth/register` and caches the resulting [`Authorization`].
//! - The cached credential is returned until it expires or the executor
//!   reports it expired; the next `provide()` then logs in again.
//! - Credentials live in process memory only. Secrets and tokens are never
//!   logged and are redacted from `Debug` output, application ids included.

pub mod provider;

pub use provider::{AnonymousAuthorizationProvider, AuthorizationProvider, LoginAuthorizationProvider};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::SdkError;

/// Lifetime of a freshly issued token.
pub const TOKEN_LIFETIME_HOURS: i64 = 23;

/// Header carrying the enterprise access token on login.
pub const ENTERPRISE_TOKEN_HEADER: &str = "X-Enterprise-Access-Token";

// ============================================================================
// Authorization
// ============================================================================

/// Authorization scheme of a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    Bearer,
}

impl AuthScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bearer => "Bearer",
        }
    }
}

/// A bearer credential. Immutable; refreshed credentials replace it wholesale.
#[derive(Clone, PartialEq, Eq)]
pub struct Authorization {
    scheme: AuthScheme,
    token: String,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Authorization {
    pub fn new(
        scheme: AuthScheme,
        token: impl Into<String>,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<Self, SdkError> {
        if expires_at < created_at {
            return Err(SdkError::Validation(format!(
                "authorization expires ({}) before it was created ({})",
                expires_at, created_at
            )));
        }
        Ok(Self {
            scheme,
            token: token.into(),
            created_at,
            expires_at,
        })
    }

    /// A bearer credential issued at `created_at` with the standard lifetime.
    pub fn bearer(token: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            scheme: AuthScheme::Bearer,
            token: token.into(),
            created_at,
            expires_at: created_at + Duration::hours(TOKEN_LIFETIME_HOURS),
        }
    }

    pub fn scheme(&self) -> AuthScheme {
        self.scheme
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Valid while `now` is strictly before the expiry instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid_at(Utc::now())
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("{} {}", self.scheme.as_str(), self.token)
    }
}

impl fmt::Debug for Authorization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Authorization")
            .field("scheme", &self.scheme)
            .field("token", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

// ============================================================================
// LoginCredentials
// ============================================================================

/// Application id and secret from the CFTools developer portal.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    application_id: String,
    secret: String,
}

impl LoginCredentials {
    pub fn new(application_id: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            application_id: application_id.into(),
            secret: secret.into(),
        }
    }

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub(crate) fn to_request(&self) -> LoginRequest {
        LoginRequest {
            application_id: self.application_id.clone(),
            secret: self.secret.clone(),
        }
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("application_id", &"<redacted>")
            .field("secret", &"<redacted>")
            .finish()
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Body of `POST /v1/auth/register`.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub application_id: String,
    pub secret: String,
}

/// Response of `POST /v1/auth/register`.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
