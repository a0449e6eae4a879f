//! Boundary-finding strategies
//!
//! Each strategy turns a text and a validated configuration into an
//! ordered list of [`Span`]s. The assembler then turns spans into chunks,
//! so strategies never compute overlap or ids themselves.

mod document;
mod fixed;
mod recursive;
mod semantic;

pub use document::DocumentStrategy;
pub use fixed::FixedStrategy;
pub use recursive::RecursiveStrategy;
pub use semantic::SemanticStrategy;

use crate::chunk::{Chunk, ChunkStats, StrategyDetail};
use crate::config::{ChunkingConfig, ChunkingStrategy};
use crate::text::TextView;
use std::collections::BTreeMap;
use std::ops::Range;

/// A boundary decision: a character range plus its annotation
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    /// Character range in the source text
    pub range: Range<usize>,
    /// Strategy annotation carried into the chunk metadata
    pub detail: StrategyDetail,
    /// Free-form annotations
    pub extras: BTreeMap<String, String>,
}

impl Span {
    /// Create a span without extras
    pub fn new(range: Range<usize>, detail: StrategyDetail) -> Self {
        Self {
            range,
            detail,
            extras: BTreeMap::new(),
        }
    }

    /// Attach an extra annotation
    pub fn with_extra(mut self, key: &str, value: impl Into<String>) -> Self {
        self.extras.insert(key.to_string(), value.into());
        self
    }
}

/// Capability shared by every strategy
pub trait BoundaryStrategy: Send + Sync {
    /// Strategy identifier
    fn kind(&self) -> ChunkingStrategy;

    /// Ordered spans covering the whole (non-empty) text
    fn spans(&self, text: &TextView<'_>, config: &ChunkingConfig) -> Vec<Span>;

    /// Describe how a run behaved
    fn explain(&self, chunks: &[Chunk], text_chars: usize, config: &ChunkingConfig) -> String;
}

static FIXED: FixedStrategy = FixedStrategy;
static RECURSIVE: RecursiveStrategy = RecursiveStrategy;
static DOCUMENT: DocumentStrategy = DocumentStrategy;
static SEMANTIC: SemanticStrategy = SemanticStrategy;

/// Select the implementation of a strategy
pub fn for_kind(kind: ChunkingStrategy) -> &'static dyn BoundaryStrategy {
    match kind {
        ChunkingStrategy::Fixed => &FIXED,
        ChunkingStrategy::Recursive => &RECURSIVE,
        ChunkingStrategy::Document => &DOCUMENT,
        ChunkingStrategy::Semantic => &SEMANTIC,
    }
}

/// "3 chunks of 4-10 characters (average 8.7)" style summary
pub(crate) fn size_summary(chunks: &[Chunk], text_chars: usize) -> String {
    let stats = ChunkStats::from_chunks(chunks);
    match stats.total_chunks {
        0 => "The input was empty, so no chunks were produced.".to_string(),
        1 => format!(
            "This run produced a single chunk covering all {text_chars} characters."
        ),
        n => format!(
            "This run produced {n} chunks of {}-{} characters (average {:.1}) from {text_chars} characters, sharing {} characters of overlap in total.",
            stats.min_size, stats.max_size, stats.average_size, stats.total_overlap
        ),
    }
}
