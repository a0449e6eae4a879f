//! Configuration types for the engine

use crate::error::{EngineError, Result};
use std::fmt;
use std::str::FromStr;

/// Default target chunk size in characters
pub const DEFAULT_CHUNK_SIZE: usize = 1000;
/// Default overlap between consecutive chunks in characters
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Boundary-finding algorithm applied to the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChunkingStrategy {
    /// Sliding window of `chunk_size` characters
    Fixed,
    /// Separator hierarchy: paragraphs, lines, sentences, words, characters
    #[default]
    Recursive,
    /// Sections and paragraphs inferred from the document structure
    Document,
    /// Sentence grouping driven by lexical similarity
    Semantic,
}

impl ChunkingStrategy {
    /// Every strategy, in catalog order
    pub const ALL: [ChunkingStrategy; 4] = [
        ChunkingStrategy::Fixed,
        ChunkingStrategy::Recursive,
        ChunkingStrategy::Document,
        ChunkingStrategy::Semantic,
    ];

    /// Stable identifier used on the wire and on the command line
    pub fn id(&self) -> &'static str {
        match self {
            ChunkingStrategy::Fixed => "fixed",
            ChunkingStrategy::Recursive => "recursive",
            ChunkingStrategy::Document => "document",
            ChunkingStrategy::Semantic => "semantic",
        }
    }
}

impl fmt::Display for ChunkingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ChunkingStrategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ChunkingStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnsupportedStrategy {
                name: s.to_string(),
            })
    }
}

/// Tuning knobs of the semantic strategy
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SemanticOptions {
    /// Percentile of adjacent-sentence similarities below which a topic
    /// shift is declared (0..=100)
    pub breakpoint_percentile: f64,
    /// Fraction by which a sentence group may exceed `chunk_size` (0..=1)
    pub size_tolerance: f64,
}

impl Default for SemanticOptions {
    fn default() -> Self {
        Self {
            breakpoint_percentile: 30.0,
            size_tolerance: 0.1,
        }
    }
}

impl SemanticOptions {
    /// Validates the options
    pub fn validate(&self) -> Result<()> {
        if !self.breakpoint_percentile.is_finite()
            || !(0.0..=100.0).contains(&self.breakpoint_percentile)
        {
            return Err(EngineError::invalid_config(format!(
                "breakpoint_percentile must be within 0..=100, got {}",
                self.breakpoint_percentile
            )));
        }

        if !self.size_tolerance.is_finite() || !(0.0..=1.0).contains(&self.size_tolerance) {
            return Err(EngineError::invalid_config(format!(
                "size_tolerance must be within 0..=1, got {}",
                self.size_tolerance
            )));
        }

        Ok(())
    }
}

/// Chunking configuration
///
/// Sizes are counted in characters. `chunk_overlap` must stay strictly
/// below `chunk_size` so that every window advances.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkingConfig {
    /// Target (maximum for most strategies) chunk size
    pub chunk_size: usize,
    /// Characters shared between consecutive windows
    pub chunk_overlap: usize,
    /// Strategy to apply
    pub strategy: ChunkingStrategy,
    /// Semantic strategy options (ignored by the other strategies)
    #[cfg_attr(feature = "serde", serde(default))]
    pub semantic: SemanticOptions,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            strategy: ChunkingStrategy::default(),
            semantic: SemanticOptions::default(),
        }
    }
}

impl ChunkingConfig {
    /// Create a configuration with default semantic options
    pub fn new(strategy: ChunkingStrategy, chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            strategy,
            semantic: SemanticOptions::default(),
        }
    }

    /// Replace the semantic options
    pub fn with_semantic(mut self, semantic: SemanticOptions) -> Self {
        self.semantic = semantic;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(EngineError::invalid_config(
                "chunk_size must be greater than 0",
            ));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(EngineError::invalid_config(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }

        self.semantic.validate()
    }

    /// Distance between the starts of two consecutive sliding windows
    pub fn step(&self) -> usize {
        self.chunk_size - self.chunk_overlap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            "fixed".parse::<ChunkingStrategy>().unwrap(),
            ChunkingStrategy::Fixed
        );
        assert_eq!(
            " Semantic ".parse::<ChunkingStrategy>().unwrap(),
            ChunkingStrategy::Semantic
        );
        assert_eq!(
            "DOCUMENT".parse::<ChunkingStrategy>().unwrap(),
            ChunkingStrategy::Document
        );

        match "sentence".parse::<ChunkingStrategy>() {
            Err(EngineError::UnsupportedStrategy { name }) => assert_eq!(name, "sentence"),
            other => panic!("expected UnsupportedStrategy, got {other:?}"),
        }
    }

    #[test]
    fn test_strategy_display_roundtrip() {
        for strategy in ChunkingStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<ChunkingStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = ChunkingConfig::default();
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.chunk_overlap, 200);
        assert_eq!(config.strategy, ChunkingStrategy::Recursive);
        assert!(config.validate().is_ok());
        assert_eq!(config.step(), 800);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let config = ChunkingConfig::new(ChunkingStrategy::Fixed, 0, 0);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_overlap_must_be_smaller_than_size() {
        let config = ChunkingConfig::new(ChunkingStrategy::Fixed, 10, 10);
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: chunk_overlap (10) must be smaller than chunk_size (10)"
        );

        let config = ChunkingConfig::new(ChunkingStrategy::Fixed, 10, 9);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_semantic_options_validation() {
        let mut options = SemanticOptions::default();
        assert!(options.validate().is_ok());

        options.breakpoint_percentile = 120.0;
        assert!(options.validate().is_err());

        options.breakpoint_percentile = f64::NAN;
        assert!(options.validate().is_err());

        options = SemanticOptions {
            size_tolerance: -0.5,
            ..Default::default()
        };
        assert!(options.validate().is_err());
    }
}
