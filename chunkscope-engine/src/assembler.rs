//! Chunk assembly module
//!
//! Turns the spans produced by a strategy into numbered [`Chunk`] records,
//! computing overlap and verifying that the sequence covers the text
//! without gaps.

use crate::chunk::{Chunk, ChunkMetadata};
use crate::error::{EngineError, Result};
use crate::strategy::Span;
use crate::text::TextView;

/// Assembler for packaging spans into chunks
#[derive(Debug, Default, Clone, Copy)]
pub struct ChunkAssembler {
    target_size: usize,
}

impl ChunkAssembler {
    /// Create an assembler for a run with the given `chunk_size`
    pub fn new(target_size: usize) -> Self {
        Self { target_size }
    }

    /// Assemble spans into chunks
    ///
    /// Fails with [`EngineError::InvalidChunkBoundary`] when the first span
    /// does not start at 0, a span is empty or outside the text, a gap
    /// separates two spans, a span does not advance past its predecessor,
    /// or the last span does not end at the text length.
    pub fn assemble(&self, text: &TextView<'_>, spans: Vec<Span>) -> Result<Vec<Chunk>> {
        let len = text.len();
        let mut chunks: Vec<Chunk> = Vec::with_capacity(spans.len());

        for (id, span) in spans.into_iter().enumerate() {
            let start = span.range.start;
            let end = span.range.end;

            if start >= end || end > len {
                return Err(EngineError::InvalidChunkBoundary { position: start });
            }

            let overlap = match chunks.last() {
                None if start != 0 => {
                    return Err(EngineError::InvalidChunkBoundary { position: start })
                }
                None => 0,
                Some(prev) => {
                    if start > prev.end_index {
                        return Err(EngineError::InvalidChunkBoundary {
                            position: prev.end_index,
                        });
                    }
                    if start <= prev.start_index || end <= prev.end_index {
                        return Err(EngineError::InvalidChunkBoundary { position: start });
                    }
                    prev.end_index.saturating_sub(start)
                }
            };

            chunks.push(Chunk {
                id,
                content: text.slice(start..end).to_string(),
                start_index: start,
                end_index: end,
                size: end - start,
                overlap_with_previous: overlap,
                metadata: ChunkMetadata {
                    target_size: self.target_size,
                    detail: span.detail,
                    extras: span.extras,
                },
            });
        }

        match chunks.last() {
            Some(last) if last.end_index != len => Err(EngineError::InvalidChunkBoundary {
                position: last.end_index,
            }),
            None if len > 0 => Err(EngineError::InvalidChunkBoundary { position: 0 }),
            _ => Ok(chunks),
        }
    }
}
