//! High-level configuration API

use crate::error::Result;
use chunkscope_engine::{ChunkingConfig, ChunkingEngine, ChunkingStrategy, SemanticOptions};

/// High-level configuration for chunking
///
/// A `Config` is always valid: it can only be obtained from a preset or
/// from [`ConfigBuilder::build`], which validates it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    inner: ChunkingConfig,
}

impl Config {
    /// Small chunks for precise retrieval (256 characters, 32 overlap)
    pub fn fine() -> Self {
        Self {
            inner: ChunkingConfig::new(ChunkingStrategy::Recursive, 256, 32),
        }
    }

    /// Default sizes (1000 characters, 200 overlap)
    pub fn balanced() -> Self {
        Self::default()
    }

    /// Large chunks for broad context (2000 characters, 400 overlap)
    pub fn coarse() -> Self {
        Self {
            inner: ChunkingConfig::new(ChunkingStrategy::Recursive, 2000, 400),
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Selected strategy
    pub fn strategy(&self) -> ChunkingStrategy {
        self.inner.strategy
    }

    /// Target chunk size in characters
    pub fn chunk_size(&self) -> usize {
        self.inner.chunk_size
    }

    /// Overlap in characters
    pub fn chunk_overlap(&self) -> usize {
        self.inner.chunk_overlap
    }

    /// Semantic strategy options
    pub fn semantic(&self) -> &SemanticOptions {
        &self.inner.semantic
    }

    /// The underlying engine configuration
    pub fn engine_config(&self) -> &ChunkingConfig {
        &self.inner
    }
}

impl TryFrom<ChunkingConfig> for Config {
    type Error = crate::error::ApiError;

    fn try_from(inner: ChunkingConfig) -> Result<Self> {
        inner.validate()?;
        Ok(Self { inner })
    }
}

/// Configuration builder
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the strategy by identifier
    pub fn strategy(mut self, name: &str) -> Result<Self> {
        self.config.inner.strategy = name.parse()?;
        Ok(self)
    }

    /// Set the strategy
    pub fn strategy_kind(mut self, strategy: ChunkingStrategy) -> Self {
        self.config.inner.strategy = strategy;
        self
    }

    /// Set the target chunk size in characters
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.inner.chunk_size = size;
        self
    }

    /// Set the overlap in characters
    pub fn chunk_overlap(mut self, overlap: usize) -> Self {
        self.config.inner.chunk_overlap = overlap;
        self
    }

    /// Set the percentile of adjacent similarities used as breakpoint
    pub fn breakpoint_percentile(mut self, percentile: f64) -> Self {
        self.config.inner.semantic.breakpoint_percentile = percentile;
        self
    }

    /// Set how far a semantic chunk may exceed `chunk_size` (fraction)
    pub fn size_tolerance(mut self, tolerance: f64) -> Self {
        self.config.inner.semantic.size_tolerance = tolerance;
        self
    }

    /// Use the fine preset sizes, keeping the strategy
    pub fn fine(self) -> Self {
        self.preset(Config::fine())
    }

    /// Use the balanced preset sizes, keeping the strategy
    pub fn balanced(self) -> Self {
        self.preset(Config::balanced())
    }

    /// Use the coarse preset sizes, keeping the strategy
    pub fn coarse(self) -> Self {
        self.preset(Config::coarse())
    }

    fn preset(mut self, preset: Config) -> Self {
        self.config.inner.chunk_size = preset.chunk_size();
        self.config.inner.chunk_overlap = preset.chunk_overlap();
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.inner.validate()?;
        Ok(self.config)
    }

    /// Build an engine directly
    pub fn build_engine(self) -> Result<ChunkingEngine> {
        let config = self.build()?;
        Ok(ChunkingEngine::new(config.inner)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[test]
    fn test_presets_are_valid() {
        for preset in [Config::fine(), Config::balanced(), Config::coarse()] {
            assert!(preset.engine_config().validate().is_ok());
            assert_eq!(preset.strategy(), ChunkingStrategy::Recursive);
        }
        assert_eq!(Config::balanced().chunk_size(), 1000);
        assert_eq!(Config::balanced().chunk_overlap(), 200);
    }

    #[test]
    fn test_builder_keeps_strategy_across_presets() {
        let config = Config::builder()
            .strategy("semantic")
            .unwrap()
            .coarse()
            .breakpoint_percentile(50.0)
            .build()
            .unwrap();
        assert_eq!(config.strategy(), ChunkingStrategy::Semantic);
        assert_eq!(config.chunk_size(), 2000);
        assert_eq!(config.semantic().breakpoint_percentile, 50.0);
    }

    #[test]
    fn test_builder_validates() {
        let err = Config::builder()
            .chunk_size(100)
            .chunk_overlap(100)
            .build()
            .unwrap_err();
        assert!(matches!(err, ApiError::Engine(_)));

        let err = Config::builder().size_tolerance(2.0).build().unwrap_err();
        assert_eq!(err.kind(), "invalid_configuration");

        assert!(Config::builder().strategy("nope").is_err());
    }

    #[test]
    fn test_try_from_engine_config() {
        let valid = ChunkingConfig::new(ChunkingStrategy::Fixed, 10, 2);
        assert_eq!(Config::try_from(valid).unwrap().chunk_size(), 10);

        let invalid = ChunkingConfig::new(ChunkingStrategy::Fixed, 10, 20);
        assert!(Config::try_from(invalid).is_err());
    }
}
