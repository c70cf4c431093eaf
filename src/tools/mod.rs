//! Tool infrastructure: descriptors, catalog, availability filtering.
//!
//! The registry owns tool *metadata* and availability predicates, not the
//! tools' execution logic. Descriptors are immutable and shared as
//! [`ToolRef`] handles.

pub mod availability;
pub mod builtin;
pub mod catalog;

pub use availability::filter_available;
pub use catalog::{
    render_overview, ToolCatalog, ToolCatalogBuilder, ToolCategory, ToolSummary,
};

use crate::credentials::CredentialStore;
use crate::types::{Result, User};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a tool descriptor.
pub type ToolRef = Arc<dyn Tool>;

/// A capability an agent may invoke.
///
/// Implementors describe themselves and decide, per user, whether they may
/// be offered. The registry never branches on the concrete type.
#[async_trait]
pub trait Tool: Send + Sync + fmt::Debug {
    /// Identifying name as declared, e.g. `"MarketResearch"`.
    fn display_name(&self) -> &str;

    /// Description for the planner prompt.
    fn description(&self) -> &str;

    /// Description for end users choosing tools.
    fn public_description(&self) -> &str {
        self.description()
    }

    /// What the planner should pass as the tool argument.
    fn arg_description(&self) -> &str {
        "The argument to the tool."
    }

    fn image_url(&self) -> Option<&str> {
        None
    }

    /// Lookup key: the lowercased display name.
    fn name(&self) -> String {
        format_tool_name(self.display_name())
    }

    /// Whether `user` may use this tool. Errors are store failures, not a
    /// "no".
    async fn dynamic_available(&self, _user: &User, _store: &dyn CredentialStore) -> Result<bool> {
        Ok(true)
    }
}

/// Normalise a tool name for lookup.
pub fn format_tool_name(tool_name: &str) -> String {
    tool_name.to_lowercase()
}
