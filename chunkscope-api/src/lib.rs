//! Public API for chunkscope text chunking
//!
//! This crate provides a stable interface over the chunking engine: request
//! and response shapes for external callers, input sources, a validated
//! high-level configuration and the [`Chunker`] entry point.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::collections::BTreeMap;

// Re-export key types
pub use chunkscope_engine::{
    Chunk, ChunkMetadata, ChunkStats, ChunkingResult, ChunkingStrategy, DocumentBoundary,
    EngineError, SemanticOptions, SemanticSplit, SeparatorKind, StrategyDetail, StrategyInfo,
};
pub use config::{Config, ConfigBuilder};
pub use dto::{ChunkRequest, ChunkResponse, ErrorResponse, Input};
pub use error::{ApiError, Result};

/// Main entry point for chunking
///
/// A chunker holds a validated configuration and can be reused for any
/// number of inputs.
#[derive(Debug, Clone)]
pub struct Chunker {
    inner: chunkscope_engine::ChunkingEngine,
    config: Config,
}

impl Chunker {
    /// Create a chunker with the default configuration (recursive, 1000/200)
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    /// Create a chunker for a strategy identifier with default sizes
    pub fn with_strategy(name: &str) -> Result<Self> {
        let config = Config::builder().strategy(name)?.build()?;
        Self::with_config(config)
    }

    /// Create a chunker with a custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let inner = chunkscope_engine::ChunkingEngine::new(*config.engine_config())?;
        Ok(Self { inner, config })
    }

    /// Chunk the text of an input source
    pub fn process(&self, input: Input) -> Result<ChunkingResult> {
        let text = input.read_text()?;
        self.process_text(&text)
    }

    /// Chunk a text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<ChunkingResult> {
        Ok(self.inner.chunk(text)?)
    }

    /// Chunk an external request, using the request's own parameters
    pub fn process_request(request: &ChunkRequest) -> Result<ChunkResponse> {
        let config = request.to_config()?;
        tracing::debug!(
            strategy = %config.strategy,
            chunk_size = config.chunk_size,
            chunk_overlap = config.chunk_overlap,
            "processing chunk request"
        );
        Ok(chunkscope_engine::chunk(&request.text, &config)?)
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Chunk text with a strategy identifier and sizes
pub fn chunk_text(
    text: &str,
    strategy: &str,
    chunk_size: usize,
    chunk_overlap: usize,
) -> Result<ChunkingResult> {
    let config = Config::builder()
        .strategy(strategy)?
        .chunk_size(chunk_size)
        .chunk_overlap(chunk_overlap)
        .build()?;
    Chunker::with_config(config)?.process_text(text)
}

/// Chunk a file with the default configuration
pub fn chunk_file<P: AsRef<std::path::Path>>(path: P) -> Result<ChunkingResult> {
    Chunker::new()?.process(Input::from_file(path.as_ref().to_path_buf()))
}

/// Handle a JSON request and return a JSON response
///
/// Successful runs serialize the [`ChunkResponse`]; failures serialize an
/// [`ErrorResponse`] (`{"detail": ..., "kind": ...}`).
#[cfg(feature = "serde")]
pub fn process_request_json(request: &str) -> String {
    let outcome = serde_json::from_str::<ChunkRequest>(request)
        .map_err(ApiError::from)
        .and_then(|request| Chunker::process_request(&request))
        .and_then(|response| serde_json::to_string(&response).map_err(ApiError::from));

    match outcome {
        Ok(json) => json,
        Err(error) => {
            tracing::debug!(kind = error.kind(), "chunk request rejected: {error}");
            let envelope = ErrorResponse::from(&error);
            serde_json::to_string(&envelope).unwrap_or_else(|_| {
                format!(r#"{{"detail":"internal error","kind":"{}"}}"#, envelope.kind)
            })
        }
    }
}

/// Strategy catalog keyed by strategy identifier
pub fn strategy_catalog() -> BTreeMap<String, StrategyInfo> {
    chunkscope_engine::strategy_catalog()
        .into_iter()
        .map(|(strategy, info)| (strategy.id().to_string(), *info))
        .collect()
}

/// Catalog entry of a strategy identifier
pub fn describe_strategy(name: &str) -> Result<StrategyInfo> {
    let strategy: ChunkingStrategy = name.parse()?;
    Ok(*chunkscope_engine::describe_strategy(strategy))
}
