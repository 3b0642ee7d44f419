//! Wire types for ban list requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ban::BanFormat;
use crate::domain::UserRef;

/// Response of `GET /v1/banlist/{id}/bans`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BansResponse {
    #[serde(default)]
    pub entries: Vec<BanResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BanResponse {
    pub id: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
    #[serde(default)]
    pub user: Option<UserRef>,
}

/// Body of `POST /v1/banlist/{id}/bans`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PutBanBody {
    pub format: BanFormat,
    pub identifier: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}
