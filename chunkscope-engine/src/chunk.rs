//! Chunk records and chunking results

use crate::config::ChunkingStrategy;
use std::collections::BTreeMap;
use std::ops::Range;

/// Separator tier used by the recursive strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SeparatorKind {
    /// Blank line (`"\n\n"`)
    Paragraph,
    /// Single line break
    Line,
    /// Sentence boundary
    Sentence,
    /// Space between words
    Word,
    /// Hard cut between characters
    Character,
}

impl SeparatorKind {
    /// Human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            SeparatorKind::Paragraph => "paragraph",
            SeparatorKind::Line => "line",
            SeparatorKind::Sentence => "sentence",
            SeparatorKind::Word => "word",
            SeparatorKind::Character => "character",
        }
    }
}

/// Kind of boundary at which a document chunk ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DocumentBoundary {
    /// The next paragraph did not fit
    Paragraph,
    /// The structural section ends here
    Section,
    /// A single paragraph was larger than the budget and got cut
    SizeLimit,
}

/// Reason a semantic chunk was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SemanticSplit {
    /// Similarity with the next sentence fell below the threshold
    TopicShift,
    /// The next sentence would have overflowed the size budget
    SizeLimit,
    /// A single sentence exceeded the budget and was cut into windows
    SizeOverflow,
    /// Last group of the text
    EndOfText,
}

/// Strategy-specific annotations of a chunk
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "method", rename_all = "snake_case"))]
pub enum StrategyDetail {
    /// Sliding window
    Fixed {
        /// Distance between consecutive window starts
        step: usize,
    },
    /// Separator hierarchy
    Recursive {
        /// Finest separator tier needed inside this chunk (`None` if the
        /// text never had to be split)
        separator: Option<SeparatorKind>,
        /// Number of merged pieces
        piece_count: usize,
    },
    /// Structural sections
    Document {
        /// Index of the section the chunk belongs to
        section_index: usize,
        /// Heading that opened the section, if any
        heading: Option<String>,
        /// Heading depth (1 = top level)
        heading_level: Option<u8>,
        /// Boundary at which the chunk ends
        boundary: DocumentBoundary,
    },
    /// Similarity-driven sentence groups
    Semantic {
        /// Sentences covered by the chunk
        sentence_count: usize,
        /// Breakpoint threshold of this run (`None` with fewer than two sentences)
        similarity_threshold: Option<f64>,
        /// Similarity between the chunk's last sentence and the next one
        boundary_similarity: Option<f64>,
        /// Why the chunk was closed
        split_reason: SemanticSplit,
    },
}

impl StrategyDetail {
    /// Strategy that produced the annotation
    pub fn strategy(&self) -> ChunkingStrategy {
        match self {
            StrategyDetail::Fixed { .. } => ChunkingStrategy::Fixed,
            StrategyDetail::Recursive { .. } => ChunkingStrategy::Recursive,
            StrategyDetail::Document { .. } => ChunkingStrategy::Document,
            StrategyDetail::Semantic { .. } => ChunkingStrategy::Semantic,
        }
    }
}

/// Chunk metadata: common fields, the typed strategy detail and a
/// free-form bucket for extras
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkMetadata {
    /// `chunk_size` of the run
    pub target_size: usize,
    /// Strategy-specific annotation, flattened under a `method` tag
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub detail: StrategyDetail,
    /// Additional string annotations
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "BTreeMap::is_empty")
    )]
    pub extras: BTreeMap<String, String>,
}

/// A contiguous piece of the source text
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    /// Sequential id starting at 0
    pub id: usize,
    /// The chunk text
    pub content: String,
    /// Start character offset (inclusive)
    pub start_index: usize,
    /// End character offset (exclusive)
    pub end_index: usize,
    /// `end_index - start_index`
    pub size: usize,
    /// Characters shared with the preceding chunk
    pub overlap_with_previous: usize,
    /// Strategy annotations
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Character range in the source text
    pub fn range(&self) -> Range<usize> {
        self.start_index..self.end_index
    }

    /// Content that is not shared with the preceding chunk
    pub fn fresh_content(&self) -> &str {
        match self.content.char_indices().nth(self.overlap_with_previous) {
            Some((byte, _)) => &self.content[byte..],
            None => "",
        }
    }
}

/// Output of one engine invocation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkingResult {
    /// Strategy that was applied
    pub strategy: ChunkingStrategy,
    /// Chunks ordered by `start_index`
    pub chunks: Vec<Chunk>,
    /// `chunks.len()`
    pub total_chunks: usize,
    /// How this run behaved
    pub strategy_explanation: String,
}

impl ChunkingResult {
    /// Returns true if no chunk was produced
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Rebuild the source text by dropping each chunk's leading overlap
    pub fn reconstruct(&self) -> String {
        self.chunks.iter().map(Chunk::fresh_content).collect()
    }

    /// Size and overlap statistics
    pub fn stats(&self) -> ChunkStats {
        ChunkStats::from_chunks(&self.chunks)
    }
}

/// Size and overlap statistics of a chunk sequence
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkStats {
    /// Number of chunks
    pub total_chunks: usize,
    /// Smallest chunk size
    pub min_size: usize,
    /// Largest chunk size
    pub max_size: usize,
    /// Mean chunk size
    pub average_size: f64,
    /// Sum of `overlap_with_previous`
    pub total_overlap: usize,
    /// Characters of the source covered (sizes minus overlaps)
    pub covered_chars: usize,
}

impl ChunkStats {
    /// Compute statistics for a chunk sequence
    pub fn from_chunks(chunks: &[Chunk]) -> Self {
        if chunks.is_empty() {
            return Self::default();
        }

        let total_size: usize = chunks.iter().map(|c| c.size).sum();
        let total_overlap: usize = chunks.iter().map(|c| c.overlap_with_previous).sum();

        Self {
            total_chunks: chunks.len(),
            min_size: chunks.iter().map(|c| c.size).min().unwrap_or(0),
            max_size: chunks.iter().map(|c| c.size).max().unwrap_or(0),
            average_size: total_size as f64 / chunks.len() as f64,
            total_overlap,
            covered_chars: total_size - total_overlap,
        }
    }
}
