//! Unified SDK error types.

use thiserror::Error;

use crate::auth::Authorization;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("No server API id given and the client has no default server configured")]
    ServerApiIdRequired,

    #[error("Deleting bans of {identifier} is ambiguous: {matches} bans match")]
    AmbiguousDeleteBanRequest { identifier: String, matches: usize },

    #[error("Account creation for {identifier} failed: unexpected notice {notice:?}")]
    AccountCreationFailed { identifier: String, notice: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl SdkError {
    /// Whether this is the API's expired-token signal.
    pub fn is_token_expired(&self) -> bool {
        matches!(self, SdkError::Api(ApiError::TokenExpired { .. }))
    }

    /// Whether the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SdkError::Api(ApiError::ResourceNotFound { .. }))
    }
}

/// Raw transport failures, passed through untouched when they cannot be classified.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server responded {status} for {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },
}

impl HttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::Status { status, .. } => Some(*status),
            #[cfg(feature = "http")]
            HttpError::Reqwest(e) => e.status().map(|s| s.as_u16()),
        }
    }
}

/// Errors the API signals with a recognized `(status, error tag)` pair.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {url}")]
    ResourceNotFound { url: String },

    #[error("Resource not configured: {url}")]
    ResourceNotConfigured {
        url: String,
        /// Bucket the request targeted, when it named one.
        bucket: Option<String>,
    },

    #[error("Request limit exceeded: {url}")]
    RequestLimitExceeded { url: String },

    #[error("Resource already exists: {url}")]
    DuplicateResourceCreation { url: String },

    #[error("Missing grant for {url}")]
    GrantRequired { url: String },

    #[error("Token expired while requesting {url}")]
    TokenExpired {
        url: String,
        authorization: Option<Authorization>,
    },

    #[error("Unknown error for {url} (request id {request_id:?})")]
    UnknownError {
        url: String,
        request_id: Option<String>,
    },

    #[error("Timeout: {url}")]
    Timeout { url: String },

    #[error("Service unavailable: {url}")]
    ServiceUnavailable { url: String },
}

impl ApiError {
    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            ApiError::ResourceNotFound { url }
            | ApiError::ResourceNotConfigured { url, .. }
            | ApiError::RequestLimitExceeded { url }
            | ApiError::DuplicateResourceCreation { url }
            | ApiError::GrantRequired { url }
            | ApiError::TokenExpired { url, .. }
            | ApiError::UnknownError { url, .. }
            | ApiError::Timeout { url }
            | ApiError::ServiceUnavailable { url } => url,
        }
    }
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login rejected by {url}: invalid application id or secret")]
    InvalidCredentials { url: String },

    #[error("This operation requires an authenticated client")]
    AuthenticationRequired,
}
