//! Error types for Astro Tutor
//!
//! This module defines the error types used throughout the crate,
//! using `thiserror` for ergonomic error handling.
//!
//! Note that an unrecognized planet name is never an error at this level:
//! lookups convert it into a [`LookupResult::Error`](crate::tools::LookupResult)
//! that is handed back to the host runtime.

use thiserror::Error;

/// Main error type for Astro Tutor operations
#[derive(Error, Debug)]
pub enum AstroError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Tool invocation errors (malformed arguments and similar)
    #[error("Tool execution error: {0}")]
    Tool(String),

    /// A tool name that is not registered with the agent
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for Astro Tutor operations
///
/// Uses `anyhow::Error` so callers can attach context while still being able
/// to downcast to [`AstroError`].
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = AstroError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_tool_error_display() {
        let error = AstroError::Tool("missing field `planet`".to_string());
        assert_eq!(
            error.to_string(),
            "Tool execution error: missing field `planet`"
        );
    }

    #[test]
    fn test_unknown_tool_error_display() {
        let error = AstroError::UnknownTool("moon_phase".to_string());
        assert_eq!(error.to_string(), "Unknown tool: moon_phase");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: AstroError = io_error.into();
        assert!(matches!(error, AstroError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: AstroError = json_error.into();
        assert!(matches!(error, AstroError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: AstroError = yaml_error.into();
        assert!(matches!(error, AstroError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AstroError>();
    }
}
