//! # Tool Registry - Agent Tool Catalog
//!
//! Static catalog of the tools an agent may invoke:
//! - Case-insensitive name resolution with a default-tool fallback
//! - Category listings (external, default, marketing, affiliate)
//! - Per-user availability filtering backed by stored OAuth grants
//! - Prompt overviews of `'name': description` lines
//!
//! ## Architecture
//!
//! ```text
//!   caller ──→ ToolCatalog ──→ Arc<dyn Tool> ──→ CredentialStore
//!              (immutable)     (descriptor,      (OAuth grants)
//!                               availability)
//! ```
//!
//! The catalog is built once (`ToolCatalog::builtin()`) and shared by
//! reference; it holds no mutable state.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod credentials;
pub mod tools;
pub mod types;

// Internal utilities
pub mod observability;

pub use credentials::{CredentialStore, MemoryCredentialStore, OAuthProvider};
pub use tools::{render_overview, Tool, ToolCatalog, ToolCategory, ToolRef};
pub use types::{Config, Error, Result, User, UserId};
