//! Credential store collaborator: stored OAuth grants consulted by
//! per-user tool availability checks.
//!
//! The registry only asks one question of a store: does this user have a
//! usable installation for this provider. Production deployments back the
//! trait with their OAuth tables; `MemoryCredentialStore` covers tests and
//! the CLI.

mod memory;

pub use memory::MemoryCredentialStore;

use crate::types::{Error, InstallationId, Result, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// OAuth integrations a tool can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OAuthProvider {
    /// SID: personal data search across Notion, email and Google Drive.
    Sid,
}

impl OAuthProvider {
    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Sid => "sid",
        }
    }
}

impl fmt::Display for OAuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for OAuthProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sid" => Ok(OAuthProvider::Sid),
            other => Err(Error::validation(format!("unknown oauth provider: {}", other))),
        }
    }
}

/// A stored OAuth grant linking a user to a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Installation {
    pub id: InstallationId,
    pub user_id: UserId,
    pub provider: OAuthProvider,
    pub created_at: DateTime<Utc>,
}

impl Installation {
    pub fn new(user_id: UserId, provider: OAuthProvider) -> Self {
        Self {
            id: InstallationId::new(),
            user_id,
            provider,
            created_at: Utc::now(),
        }
    }
}

/// Lookup of stored OAuth grants.
///
/// Implementations answer true/false for a missing grant and reserve `Err`
/// for store failures; availability filtering propagates those unchanged.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Human-readable name of this store, used in logs.
    fn name(&self) -> &str {
        "credential-store"
    }

    /// Whether `user_id` holds an installation for `provider`.
    async fn has_installation(&self, user_id: &UserId, provider: OAuthProvider) -> Result<bool>;
}
