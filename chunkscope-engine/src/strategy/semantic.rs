//! Sentence grouping driven by lexical similarity

use super::{size_summary, BoundaryStrategy, Span};
use crate::chunk::{Chunk, SemanticSplit, StrategyDetail};
use crate::config::{ChunkingConfig, ChunkingStrategy};
use crate::segment::{content_words, sentences, sliding_windows};
use crate::text::TextView;
use std::collections::HashSet;
use std::ops::Range;

/// Groups adjacent sentences until their similarity drops below the
/// run's breakpoint threshold or the size budget is exhausted
#[derive(Debug, Default, Clone, Copy)]
pub struct SemanticStrategy;

/// Jaccard similarity of two word sets; two empty sets score 0
pub(crate) fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Linear-interpolated percentile (`p` in 0..=100)
pub(crate) fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let weight = rank - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * weight)
}

struct Group {
    range: Range<usize>,
    sentences: usize,
}

impl SemanticStrategy {
    /// Largest group size in characters
    fn limit(config: &ChunkingConfig) -> usize {
        let stretched = (config.chunk_size as f64 * (1.0 + config.semantic.size_tolerance)).floor();
        config.chunk_size.max(stretched as usize)
    }

    fn close(
        group: Group,
        threshold: Option<f64>,
        boundary_similarity: Option<f64>,
        split_reason: SemanticSplit,
    ) -> Span {
        Span::new(
            group.range,
            StrategyDetail::Semantic {
                sentence_count: group.sentences,
                similarity_threshold: threshold,
                boundary_similarity,
                split_reason,
            },
        )
    }
}

impl BoundaryStrategy for SemanticStrategy {
    fn kind(&self) -> ChunkingStrategy {
        ChunkingStrategy::Semantic
    }

    fn spans(&self, text: &TextView<'_>, config: &ChunkingConfig) -> Vec<Span> {
        let sentences = sentences(text, text.full_range());
        let words: Vec<HashSet<String>> = sentences
            .iter()
            .map(|r| content_words(text.slice(r.clone())).into_iter().collect())
            .collect();
        let similarities: Vec<f64> = words.windows(2).map(|w| jaccard(&w[0], &w[1])).collect();
        let threshold = percentile(&similarities, config.semantic.breakpoint_percentile);
        let limit = Self::limit(config);

        tracing::trace!(
            sentences = sentences.len(),
            threshold = ?threshold,
            limit,
            "semantic breakpoints computed"
        );

        let mut spans = Vec::new();
        let mut group: Option<Group> = None;

        for (i, sentence) in sentences.into_iter().enumerate() {
            let len = sentence.len();
            let before = i.checked_sub(1).map(|prev| similarities[prev]);

            if len > limit {
                if let Some(open) = group.take() {
                    spans.push(Self::close(open, threshold, before, SemanticSplit::SizeLimit));
                }

                let windows = sliding_windows(sentence, config.chunk_size, config.chunk_overlap);
                let count = windows.len();
                for (w, window) in windows.into_iter().enumerate() {
                    let after = if w + 1 == count {
                        similarities.get(i).copied()
                    } else {
                        None
                    };
                    let piece = Group {
                        range: window,
                        sentences: 1,
                    };
                    spans.push(Self::close(piece, threshold, after, SemanticSplit::SizeOverflow));
                }
                continue;
            }

            group = match group {
                None => Some(Group {
                    range: sentence,
                    sentences: 1,
                }),
                Some(open) => {
                    let shift = matches!((before, threshold), (Some(s), Some(t)) if s < t);
                    if shift {
                        spans.push(Self::close(open, threshold, before, SemanticSplit::TopicShift));
                        Some(Group {
                            range: sentence,
                            sentences: 1,
                        })
                    } else if open.range.len() + len > limit {
                        spans.push(Self::close(open, threshold, before, SemanticSplit::SizeLimit));
                        Some(Group {
                            range: sentence,
                            sentences: 1,
                        })
                    } else {
                        Some(Group {
                            range: open.range.start..sentence.end,
                            sentences: open.sentences + 1,
                        })
                    }
                }
            };
        }

        if let Some(open) = group {
            spans.push(Self::close(open, threshold, None, SemanticSplit::EndOfText));
        }

        spans
    }

    fn explain(&self, chunks: &[Chunk], text_chars: usize, config: &ChunkingConfig) -> String {
        let mut sentences = 0;
        let mut shifts = 0;
        let mut limits = 0;
        let mut overflows = 0;
        let mut threshold = None;

        for chunk in chunks {
            if let StrategyDetail::Semantic {
                sentence_count,
                similarity_threshold,
                split_reason,
                ..
            } = &chunk.metadata.detail
            {
                threshold = *similarity_threshold;
                match split_reason {
                    SemanticSplit::TopicShift => shifts += 1,
                    SemanticSplit::SizeLimit => limits += 1,
                    SemanticSplit::SizeOverflow => overflows += 1,
                    SemanticSplit::EndOfText => {}
                }
                if *split_reason != SemanticSplit::SizeOverflow {
                    sentences += sentence_count;
                }
            }
        }

        let threshold = match threshold {
            Some(t) => format!(
                "The breakpoint threshold was {t:.3} (the {}th percentile of adjacent similarities).",
                config.semantic.breakpoint_percentile
            ),
            None => "Fewer than two sentences were found, so no breakpoint threshold applied.".to_string(),
        };

        format!(
            "Semantic chunking groups sentences by topic so that each chunk stays coherent. \
             Adjacent sentences are compared by the overlap of their content words and a new chunk starts where similarity drops. \
             {threshold} {sentences} sentence(s) were grouped with {shifts} topic shift(s) and {limits} size-limit split(s) under a budget of {} characters; {overflows} window(s) came from sentences longer than that budget. {}",
            Self::limit(config),
            size_summary(chunks, text_chars)
        )
    }
}
