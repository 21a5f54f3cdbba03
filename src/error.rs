//! Error types for paging-mock
//!
//! Loading a page never fails: out-of-range positions are clamped and a
//! panicking caller function unwinds straight through the source. The errors
//! defined here belong to the outer layers (fixture loading, validation and
//! the command line).

use thiserror::Error;

/// The main error type for paging-mock
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required fixture field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid fixture value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Check if this error came from malformed fixture content rather than I/O
    pub fn is_fixture_error(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::MissingConfigField { .. }
                | Error::InvalidConfigValue { .. }
                | Error::YamlParse(_)
                | Error::JsonParse(_)
        )
    }
}

/// Result type alias for paging-mock
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("source");
        assert_eq!(err.to_string(), "Missing required fixture field: source");

        let err = Error::invalid_value("initial_key", "out of range");
        assert_eq!(
            err.to_string(),
            "Invalid fixture value for 'initial_key': out of range"
        );

        let err = Error::file_not_found("fixtures/missing.yaml");
        assert_eq!(err.to_string(), "File not found: fixtures/missing.yaml");
    }

    #[test]
    fn test_is_fixture_error() {
        assert!(Error::config("bad").is_fixture_error());
        assert!(Error::missing_field("name").is_fixture_error());
        assert!(Error::invalid_value("pages", "empty").is_fixture_error());

        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        assert!(Error::from(yaml_err).is_fixture_error());

        assert!(!Error::file_not_found("x.yaml").is_fixture_error());
        assert!(!Error::Other("boom".to_string()).is_fixture_error());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }

    #[test]
    fn test_result_with_context_from_io() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result
            .with_context(|| "reading fixture".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "reading fixture: IO error: denied");
    }
}
