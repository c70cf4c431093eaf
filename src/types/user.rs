//! User identity passed to availability checks.

use super::UserId;
use serde::{Deserialize, Serialize};

/// The caller on whose behalf tools are listed.
///
/// Only the identity matters to the registry; the session layer owns the
/// rest of the user model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_id: Option<String>,
}

impl User {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            name: None,
            email: None,
            organization_id: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_organization(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }
}
