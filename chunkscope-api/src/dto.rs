//! Data Transfer Objects for API

use crate::error::{ApiError, Result};
use chunkscope_engine::{
    ChunkingConfig, ChunkingResult, ChunkingStrategy, EngineError, DEFAULT_CHUNK_OVERLAP,
    DEFAULT_CHUNK_SIZE,
};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for processing
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(ApiError::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(ApiError::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(ApiError::Io)?;
                Ok(buffer)
            }
        }
    }
}

#[cfg(feature = "serde")]
fn default_strategy() -> String {
    ChunkingStrategy::default().id().to_string()
}

#[cfg(feature = "serde")]
fn default_chunk_size() -> i64 {
    DEFAULT_CHUNK_SIZE as i64
}

#[cfg(feature = "serde")]
fn default_chunk_overlap() -> i64 {
    DEFAULT_CHUNK_OVERLAP as i64
}

/// Chunking request as received from external callers
///
/// Sizes are signed so that negative values reach validation instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkRequest {
    /// Text to chunk
    pub text: String,
    /// Strategy identifier (`fixed`, `recursive`, `document`, `semantic`)
    #[cfg_attr(feature = "serde", serde(default = "default_strategy"))]
    pub strategy: String,
    /// Target chunk size in characters
    #[cfg_attr(feature = "serde", serde(default = "default_chunk_size"))]
    pub chunk_size: i64,
    /// Overlap in characters
    #[cfg_attr(feature = "serde", serde(default = "default_chunk_overlap"))]
    pub chunk_overlap: i64,
}

impl ChunkRequest {
    /// Create a request with the default strategy and sizes
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            strategy: ChunkingStrategy::default().id().to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE as i64,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP as i64,
        }
    }

    /// Set the strategy identifier
    pub fn with_strategy(mut self, strategy: impl Into<String>) -> Self {
        self.strategy = strategy.into();
        self
    }

    /// Set size and overlap
    pub fn with_sizes(mut self, chunk_size: i64, chunk_overlap: i64) -> Self {
        self.chunk_size = chunk_size;
        self.chunk_overlap = chunk_overlap;
        self
    }

    /// Convert into a validated engine configuration
    pub fn to_config(&self) -> Result<ChunkingConfig> {
        let strategy: ChunkingStrategy = self.strategy.parse()?;
        let chunk_size = non_negative("chunk_size", self.chunk_size)?;
        let chunk_overlap = non_negative("chunk_overlap", self.chunk_overlap)?;

        let config = ChunkingConfig::new(strategy, chunk_size, chunk_overlap);
        config.validate()?;
        Ok(config)
    }
}

fn non_negative(field: &str, value: i64) -> Result<usize> {
    if value < 0 {
        return Err(EngineError::InvalidConfiguration {
            reason: format!("{field} must not be negative (got {value})"),
        }
        .into());
    }
    usize::try_from(value)
        .map_err(|_| ApiError::Config(format!("{field} ({value}) does not fit in memory")))
}

/// Response shape of a chunking request
pub type ChunkResponse = ChunkingResult;

/// Error envelope returned by [`crate::process_request_json`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorResponse {
    /// Human-readable message
    pub detail: String,
    /// Machine-readable category (see [`ApiError::kind`])
    pub kind: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(error: &ApiError) -> Self {
        Self {
            detail: error.to_string(),
            kind: error.kind().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_to_config() {
        let config = ChunkRequest::new("text")
            .with_strategy("Fixed")
            .with_sizes(10, 2)
            .to_config()
            .unwrap();
        assert_eq!(config, ChunkingConfig::new(ChunkingStrategy::Fixed, 10, 2));
    }

    #[test]
    fn test_negative_sizes_rejected() {
        let err = ChunkRequest::new("text")
            .with_sizes(-5, 0)
            .to_config()
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_configuration");
        assert_eq!(
            err.to_string(),
            "invalid configuration: chunk_size must not be negative (got -5)"
        );

        let err = ChunkRequest::new("text")
            .with_sizes(10, -1)
            .to_config()
            .unwrap_err();
        assert_eq!(err.kind(), "invalid_configuration");
    }

    #[test]
    fn test_unknown_strategy() {
        let err = ChunkRequest::new("text")
            .with_strategy("sliding")
            .to_config()
            .unwrap_err();
        assert_eq!(err.kind(), "unsupported_strategy");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_request_defaults_when_deserializing() {
        let request: ChunkRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(request, ChunkRequest::new("hello"));
        assert_eq!(request.strategy, "recursive");
        assert_eq!(request.chunk_size, 1000);
        assert_eq!(request.chunk_overlap, 200);
    }
}
