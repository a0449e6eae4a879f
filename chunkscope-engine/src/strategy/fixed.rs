//! Fixed-size sliding window

use super::{size_summary, BoundaryStrategy, Span};
use crate::chunk::{Chunk, StrategyDetail};
use crate::config::{ChunkingConfig, ChunkingStrategy};
use crate::segment::sliding_windows;
use crate::text::TextView;

/// Windows of `chunk_size` characters stepping by `chunk_size - chunk_overlap`
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedStrategy;

impl BoundaryStrategy for FixedStrategy {
    fn kind(&self) -> ChunkingStrategy {
        ChunkingStrategy::Fixed
    }

    fn spans(&self, text: &TextView<'_>, config: &ChunkingConfig) -> Vec<Span> {
        let step = config.step();
        sliding_windows(text.full_range(), config.chunk_size, config.chunk_overlap)
            .into_iter()
            .map(|range| Span::new(range, StrategyDetail::Fixed { step }))
            .collect()
    }

    fn explain(&self, chunks: &[Chunk], text_chars: usize, config: &ChunkingConfig) -> String {
        format!(
            "Fixed chunking splits text into equal-sized chunks with specified overlap. \
             Simple and predictable, but may break sentences or paragraphs. \
             Windows of {} characters advance by {} characters, so consecutive chunks share {} characters and only the last chunk may be shorter. {}",
            config.chunk_size,
            config.step(),
            config.chunk_overlap,
            size_summary(chunks, text_chars)
        )
    }
}
