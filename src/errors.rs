use thiserror::Error;

/// Error types for the connection layer.
///
/// Capability operations are total and never fail; the only failure the
/// library can produce is an invalid configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// Configuration errors
    #[error("Configuration error: {parameter} - {message}")]
    Configuration { parameter: String, message: String },
}

impl ConnectionError {
    /// Create a configuration error
    pub fn configuration(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            parameter: parameter.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for connection operations
pub type Result<T> = std::result::Result<T, ConnectionError>;
