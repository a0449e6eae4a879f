//! Recursive separator hierarchy with greedy merging

use super::{size_summary, BoundaryStrategy, Span};
use crate::chunk::{Chunk, SeparatorKind, StrategyDetail};
use crate::config::{ChunkingConfig, ChunkingStrategy};
use crate::segment::{sentences, split_keep_separator};
use crate::text::TextView;
use std::collections::VecDeque;
use std::ops::Range;

/// Separator tiers, coarsest first
const TIERS: [SeparatorKind; 5] = [
    SeparatorKind::Paragraph,
    SeparatorKind::Line,
    SeparatorKind::Sentence,
    SeparatorKind::Word,
    SeparatorKind::Character,
];

/// Splits on paragraphs, then lines, sentences, words and characters,
/// then merges the pieces back up to `chunk_size`
#[derive(Debug, Default, Clone, Copy)]
pub struct RecursiveStrategy;

#[derive(Debug, Clone)]
struct Piece {
    range: Range<usize>,
    tier: Option<SeparatorKind>,
}

impl RecursiveStrategy {
    fn split(
        text: &TextView<'_>,
        range: Range<usize>,
        first_tier: usize,
        produced_by: Option<SeparatorKind>,
        size: usize,
        out: &mut Vec<Piece>,
    ) {
        if range.len() <= size {
            out.push(Piece {
                range,
                tier: produced_by,
            });
            return;
        }

        for (index, tier) in TIERS.iter().enumerate().skip(first_tier) {
            let parts = match tier {
                SeparatorKind::Paragraph => split_keep_separator(text, range.clone(), "\n\n"),
                SeparatorKind::Line => split_keep_separator(text, range.clone(), "\n"),
                SeparatorKind::Sentence => sentences(text, range.clone()),
                SeparatorKind::Word => split_keep_separator(text, range.clone(), " "),
                // Single characters, so the merge can carry `chunk_overlap` of them
                SeparatorKind::Character => {
                    out.extend(range.map(|at| Piece {
                        range: at..at + 1,
                        tier: Some(SeparatorKind::Character),
                    }));
                    return;
                }
            };

            // Tier absent from this segment
            if parts.len() <= 1 {
                continue;
            }

            for part in parts {
                Self::split(text, part, index + 1, Some(*tier), size, out);
            }
            return;
        }
    }

    fn merge(pieces: Vec<Piece>, size: usize, overlap: usize) -> Vec<Span> {
        let mut spans = Vec::new();
        let mut window: VecDeque<Piece> = VecDeque::new();
        let mut total = 0;

        for piece in pieces {
            let len = piece.range.len();

            if total + len > size && !window.is_empty() {
                spans.push(Self::span_of(&window));

                // Keep trailing pieces as overlap while the next piece still fits
                while total > overlap || (total + len > size && total > 0) {
                    match window.pop_front() {
                        Some(front) => total -= front.range.len(),
                        None => break,
                    }
                }
            }

            total += len;
            window.push_back(piece);
        }

        if !window.is_empty() {
            spans.push(Self::span_of(&window));
        }

        spans
    }

    fn span_of(window: &VecDeque<Piece>) -> Span {
        let start = window.front().map_or(0, |p| p.range.start);
        let end = window.back().map_or(start, |p| p.range.end);
        let separator = window.iter().filter_map(|p| p.tier).max();

        Span::new(
            start..end,
            StrategyDetail::Recursive {
                separator,
                piece_count: window.len(),
            },
        )
    }
}

impl BoundaryStrategy for RecursiveStrategy {
    fn kind(&self) -> ChunkingStrategy {
        ChunkingStrategy::Recursive
    }

    fn spans(&self, text: &TextView<'_>, config: &ChunkingConfig) -> Vec<Span> {
        let mut pieces = Vec::new();
        Self::split(text, text.full_range(), 0, None, config.chunk_size, &mut pieces);
        tracing::trace!(pieces = pieces.len(), "recursive split finished");

        Self::merge(pieces, config.chunk_size, config.chunk_overlap)
    }

    fn explain(&self, chunks: &[Chunk], text_chars: usize, config: &ChunkingConfig) -> String {
        let finest = chunks
            .iter()
            .filter_map(|chunk| match chunk.metadata.detail {
                StrategyDetail::Recursive { separator, .. } => separator,
                _ => None,
            })
            .max();

        let separators = match finest {
            Some(kind) => format!("the finest separator this run needed was the {} break", kind.label()),
            None => "the text fit without splitting".to_string(),
        };

        format!(
            "Recursive chunking tries to split text at natural boundaries (paragraphs, sentences, words) while respecting size limits. \
             More context-aware than fixed chunking. \
             Separators are tried in the order paragraph, line, sentence, word, character; {separators}. \
             Pieces are merged into chunks of at most {} characters and up to {} characters of whole trailing pieces are repeated at the start of the next chunk. {}",
            config.chunk_size,
            config.chunk_overlap,
            size_summary(chunks, text_chars)
        )
    }
}
