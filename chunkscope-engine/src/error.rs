//! Engine error types
//!
//! Every error is raised before any chunk is handed back to the caller;
//! the engine never returns a partial result.

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The size/overlap relationship (or a strategy option) is invalid
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of the violated constraint
        reason: String,
    },

    /// A strategy identifier coming from external input is not known
    #[error("unsupported chunking strategy '{name}'")]
    UnsupportedStrategy {
        /// The identifier that failed to parse
        name: String,
    },

    /// A strategy produced spans that break the chunk sequence invariants
    #[error("invalid chunk boundary at position {position}")]
    InvalidChunkBoundary {
        /// The character position where the invalid boundary was detected
        position: usize,
    },
}

impl EngineError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        EngineError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::invalid_config("chunk_size must be greater than 0");
        assert_eq!(
            err.to_string(),
            "invalid configuration: chunk_size must be greater than 0"
        );

        let err = EngineError::UnsupportedStrategy {
            name: "magic".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported chunking strategy 'magic'");

        let err = EngineError::InvalidChunkBoundary { position: 42 };
        assert_eq!(err.to_string(), "invalid chunk boundary at position 42");
    }
}
