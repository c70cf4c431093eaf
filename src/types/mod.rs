//! Core types for the tool registry.
//!
//! This module provides foundational types used throughout the crate:
//! - **IDs**: Strongly-typed identifiers (UserId, InstallationId)
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: Configuration structures for logging and availability checks
//! - **User**: The identity availability checks are evaluated for

mod config;
mod errors;
mod ids;
mod user;

pub use config::{
    AvailabilityConfig, Config, ObservabilityConfig, ENV_LOG_FORMAT, ENV_LOG_LEVEL,
    ENV_MAX_CONCURRENT_CHECKS,
};
pub use errors::{Error, Result};
pub use ids::{InstallationId, UserId};
pub use user::User;
