//! API error types

use chunkscope_engine::EngineError;
use std::string::FromUtf8Error;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error (invalid configuration, unknown strategy)
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 conversion error
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] FromUtf8Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Short machine-readable category
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Engine(EngineError::InvalidConfiguration { .. }) => "invalid_configuration",
            ApiError::Engine(EngineError::UnsupportedStrategy { .. }) => "unsupported_strategy",
            ApiError::Engine(EngineError::InvalidChunkBoundary { .. }) => "internal",
            ApiError::Io(_) => "io",
            ApiError::Utf8(_) => "utf8",
            ApiError::Config(_) => "config",
            #[cfg(feature = "serde")]
            ApiError::Serde(_) => "serde",
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
