//! Chunking engine for retrieval-augmented generation pipelines
//!
//! This crate partitions text into ordered, possibly overlapping chunks
//! using one of four strategies (fixed, recursive, document, semantic),
//! annotates every chunk with strategy metadata and explains how the run
//! behaved. All offsets and sizes are counted in characters.
//!
//! ```
//! use chunkscope_engine::{chunk, ChunkingConfig, ChunkingStrategy};
//!
//! let config = ChunkingConfig::new(ChunkingStrategy::Fixed, 10, 2);
//! let result = chunk("abcdefghijklmnopqrstuvwxyz", &config).unwrap();
//! assert_eq!(result.total_chunks, 3);
//! assert_eq!(result.reconstruct(), "abcdefghijklmnopqrstuvwxyz");
//! ```

#![warn(missing_docs)]

pub mod assembler;
pub mod catalog;
pub mod chunk;
pub mod config;
pub mod error;
pub mod processor;
pub mod segment;
pub mod strategy;
pub mod text;

// Re-export key types
pub use assembler::ChunkAssembler;
pub use catalog::{describe_strategy, strategy_catalog, StrategyInfo};
pub use chunk::{
    Chunk, ChunkMetadata, ChunkStats, ChunkingResult, DocumentBoundary, SemanticSplit,
    SeparatorKind, StrategyDetail,
};
pub use config::{
    ChunkingConfig, ChunkingStrategy, SemanticOptions, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE,
};
pub use error::{EngineError, Result};
pub use processor::{ChunkingEngine, ChunkingEngineBuilder};
pub use strategy::{BoundaryStrategy, Span};

/// Chunk a text with the given configuration
///
/// The configuration is validated before the text is looked at; empty
/// text yields a result with zero chunks.
pub fn chunk(text: &str, config: &ChunkingConfig) -> Result<ChunkingResult> {
    ChunkingEngine::new(*config)?.chunk(text)
}
