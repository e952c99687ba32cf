use thiserror::Error;

/// Unified error type for tagcheck operations
#[derive(Error, Debug)]
pub enum TagCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Required input unavailable: {0}")]
    Input(String),

    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tagcheck
pub type Result<T> = std::result::Result<T, TagCheckError>;

impl TagCheckError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagCheckError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        TagCheckError::Version(msg.into())
    }

    /// Create an unavailable-input error with context
    pub fn input(msg: impl Into<String>) -> Self {
        TagCheckError::Input(msg.into())
    }

    /// Create an API error with context
    pub fn api(msg: impl Into<String>) -> Self {
        TagCheckError::Api(msg.into())
    }
}
