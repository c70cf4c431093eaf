//! Application error types.
//!
//! All errors use `thiserror`. Catalog lookups never fail; errors come from
//! catalog assembly, configuration, and the credential-store collaborator.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the tool registry.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid catalog or input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Strict lookup miss.
    #[error("not found: {0}")]
    NotFound(String),

    /// Credential store failure, surfaced unchanged from availability checks.
    #[error("credential store error: {0}")]
    Credential(String),

    /// Invalid configuration value.
    #[error("config error: {0}")]
    Config(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O errors.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn credential(msg: impl Into<String>) -> Self {
        Self::Credential(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            Error::credential("db down").to_string(),
            "credential store error: db down"
        );
        assert_eq!(Error::not_found("tool x").to_string(), "not found: tool x");
    }

    #[test]
    fn test_from_serde_json() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, Error::Serialization(_)));
    }
}
