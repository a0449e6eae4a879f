//! Configuration module
//!
//! The TOML configuration file has three sections, all optional:
//! `[chunking]`, `[semantic]` and `[output]`. Missing keys fall back to the
//! built-in defaults; command-line flags override both.

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use chunkscope_api::{ChunkingStrategy, Config, ConfigBuilder, SemanticOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Chunking configuration
    #[serde(default)]
    pub chunking: ChunkingSection,

    /// Semantic strategy configuration
    #[serde(default)]
    pub semantic: SemanticSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputSection,
}

/// Chunking-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChunkingSection {
    /// Strategy identifier
    pub strategy: String,

    /// Target chunk size in characters
    pub chunk_size: usize,

    /// Overlap in characters
    pub chunk_overlap: usize,
}

impl Default for ChunkingSection {
    fn default() -> Self {
        let defaults = Config::default();
        Self {
            strategy: defaults.strategy().id().to_string(),
            chunk_size: defaults.chunk_size(),
            chunk_overlap: defaults.chunk_overlap(),
        }
    }
}

/// Semantic strategy configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SemanticSection {
    /// Percentile of adjacent similarities used as breakpoint (0-100)
    pub breakpoint_percentile: f64,

    /// Fraction by which a chunk may exceed `chunk_size` (0-1)
    pub size_tolerance: f64,
}

impl Default for SemanticSection {
    fn default() -> Self {
        let defaults = SemanticOptions::default();
        Self {
            breakpoint_percentile: defaults.breakpoint_percentile,
            size_tolerance: defaults.size_tolerance,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputSection {
    /// Default output format
    pub format: String,

    /// Print size/overlap statistics
    pub show_stats: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            show_stats: false,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::ConfigError(e.to_string().trim_end().to_string()).into())
    }

    /// Builder pre-filled with the file's chunking settings
    pub fn builder(&self) -> Result<ConfigBuilder> {
        let strategy: ChunkingStrategy = self.chunking.strategy.parse().map_err(|e| {
            CliError::ConfigError(format!("[chunking] strategy: {e}"))
        })?;

        Ok(Config::builder()
            .strategy_kind(strategy)
            .chunk_size(self.chunking.chunk_size)
            .chunk_overlap(self.chunking.chunk_overlap)
            .breakpoint_percentile(self.semantic.breakpoint_percentile)
            .size_tolerance(self.semantic.size_tolerance))
    }

    /// Default output format
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.format.parse::<OutputFormat>().map_err(|e| {
            CliError::ConfigError(format!("[output] format: {e}")).into()
        })
    }

    /// Check every value, returning the chunking configuration it describes
    pub fn validate(&self) -> Result<Config> {
        self.output_format()?;
        self.builder()?
            .build()
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Commented configuration template with the default values
    pub fn template() -> String {
        let chunking = ChunkingSection::default();
        let semantic = SemanticSection::default();
        let output = OutputSection::default();
        let strategies: Vec<_> = ChunkingStrategy::ALL.iter().map(|s| s.id()).collect();

        format!(
            r#"# chunkscope configuration
#
# Command-line flags override the values in this file; values missing
# from this file fall back to the built-in defaults.

[chunking]
# One of: {strategies}
strategy = "{strategy}"

# Target chunk size in characters
chunk_size = {chunk_size}

# Characters shared between consecutive chunks (must be below chunk_size)
chunk_overlap = {chunk_overlap}

[semantic]
# Adjacent sentences whose similarity falls below this percentile of all
# adjacent similarities start a new chunk (0-100)
breakpoint_percentile = {percentile:?}

# A semantic chunk may exceed chunk_size by this fraction (0-1)
size_tolerance = {tolerance:?}

[output]
# One of: text, json, markdown
format = "{format}"

# Print size and overlap statistics
show_stats = {show_stats}

# Indent JSON output
pretty_json = {pretty_json}
"#,
            strategies = strategies.join(", "),
            strategy = chunking.strategy,
            chunk_size = chunking.chunk_size,
            chunk_overlap = chunking.chunk_overlap,
            percentile = semantic.breakpoint_percentile,
            tolerance = semantic.size_tolerance,
            format = output.format,
            show_stats = output.show_stats,
            pretty_json = output.pretty_json,
        )
    }
}
