//! Chunking engine and builder
//!
//! [`ChunkingEngine`] validates a configuration once and can then be used
//! to chunk any number of texts.

use crate::{
    assembler::ChunkAssembler,
    chunk::ChunkingResult,
    config::{ChunkingConfig, ChunkingStrategy, SemanticOptions},
    error::Result,
    strategy::{self, size_summary},
    text::TextView,
};

/// Validated, reusable chunking engine
///
/// The engine holds no mutable state, so a single instance can be shared
/// across threads.
#[derive(Debug, Clone, Copy)]
pub struct ChunkingEngine {
    config: ChunkingConfig,
}

impl ChunkingEngine {
    /// Create an engine, failing fast on an invalid configuration
    pub fn new(config: ChunkingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a builder
    pub fn builder() -> ChunkingEngineBuilder {
        ChunkingEngineBuilder::new()
    }

    /// Configuration in use
    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Chunk a text
    pub fn chunk(&self, text: &str) -> Result<ChunkingResult> {
        let config = &self.config;
        let view = TextView::new(text);

        if view.is_empty() {
            tracing::debug!(strategy = %config.strategy, "empty input, no chunks produced");
            return Ok(ChunkingResult {
                strategy: config.strategy,
                chunks: Vec::new(),
                total_chunks: 0,
                strategy_explanation: size_summary(&[], 0),
            });
        }

        let implementation = strategy::for_kind(config.strategy);
        let spans = implementation.spans(&view, config);
        tracing::trace!(spans = spans.len(), "boundaries computed");

        let chunks = ChunkAssembler::new(config.chunk_size).assemble(&view, spans)?;
        let strategy_explanation = implementation.explain(&chunks, view.len(), config);

        tracing::debug!(
            strategy = %config.strategy,
            chars = view.len(),
            chunks = chunks.len(),
            "chunking finished"
        );

        Ok(ChunkingResult {
            strategy: config.strategy,
            total_chunks: chunks.len(),
            chunks,
            strategy_explanation,
        })
    }
}

/// Builder for [`ChunkingEngine`]
///
/// Provides a fluent interface for configuring the engine.
#[derive(Debug, Default, Clone)]
pub struct ChunkingEngineBuilder {
    config: ChunkingConfig,
}

impl ChunkingEngineBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the strategy
    pub fn strategy(mut self, strategy: ChunkingStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Set the target chunk size in characters
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Set the overlap in characters
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.config.chunk_overlap = overlap;
        self
    }

    /// Set the semantic strategy options
    pub fn semantic(mut self, options: SemanticOptions) -> Self {
        self.config.semantic = options;
        self
    }

    /// Build the engine
    pub fn build(self) -> Result<ChunkingEngine> {
        ChunkingEngine::new(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;

    #[test]
    fn test_builder_defaults() {
        let engine = ChunkingEngine::builder().build().unwrap();
        assert_eq!(engine.config().chunk_size, 1000);
        assert_eq!(engine.config().chunk_overlap, 200);
        assert_eq!(engine.config().strategy, ChunkingStrategy::Recursive);
    }

    #[test]
    fn test_invalid_config_fails_before_text() {
        let result = ChunkingEngine::builder()
            .chunk_size(10)
            .chunk_overlap(10)
            .build();
        assert!(matches!(
            result,
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_empty_text() {
        let engine = ChunkingEngine::builder()
            .strategy(ChunkingStrategy::Semantic)
            .build()
            .unwrap();
        let result = engine.chunk("").unwrap();
        assert!(result.is_empty());
        assert_eq!(result.total_chunks, 0);
        assert_eq!(result.strategy, ChunkingStrategy::Semantic);
    }

    #[test]
    fn test_fixed_alphabet() {
        let engine = ChunkingEngine::builder()
            .strategy(ChunkingStrategy::Fixed)
            .chunk_size(10)
            .chunk_overlap(2)
            .build()
            .unwrap();
        let result = engine.chunk("abcdefghijklmnopqrstuvwxyz").unwrap();

        let contents: Vec<_> = result.chunks.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["abcdefghij", "ijklmnopqr", "qrstuvwxyz"]);
        let overlaps: Vec<_> = result
            .chunks
            .iter()
            .map(|c| c.overlap_with_previous)
            .collect();
        assert_eq!(overlaps, vec![0, 2, 2]);
        assert_eq!(result.total_chunks, 3);
        assert!(result.strategy_explanation.starts_with("Fixed chunking"));
    }

    #[test]
    fn test_every_strategy_reconstructs() {
        let text = "# Title\nFirst sentence here. Second one follows!\n\nAnother paragraph, with words.";
        for strategy in ChunkingStrategy::ALL {
            let engine = ChunkingEngine::builder()
                .strategy(strategy)
                .chunk_size(20)
                .chunk_overlap(5)
                .build()
                .unwrap();
            let result = engine.chunk(text).unwrap();
            assert_eq!(result.reconstruct(), text, "{strategy}");
            assert_eq!(result.total_chunks, result.chunks.len());
        }
    }
}
