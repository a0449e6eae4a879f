//! Structure-aware chunking over headings and paragraphs

use super::{size_summary, BoundaryStrategy, Span};
use crate::chunk::{Chunk, DocumentBoundary, StrategyDetail};
use crate::config::{ChunkingConfig, ChunkingStrategy};
use crate::segment::{paragraphs, sliding_windows};
use crate::text::TextView;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Longest line still considered a numbered or uppercase heading
const MAX_HEADING_CHARS: usize = 80;

/// Share of letters among the visible characters of an uppercase heading
const MIN_TITLE_LETTER_PERCENT: usize = 80;

static MARKDOWN_HEADING: OnceLock<Regex> = OnceLock::new();
static NUMBERED_HEADING: OnceLock<Regex> = OnceLock::new();
static KEYWORD_HEADING: OnceLock<Regex> = OnceLock::new();

fn markdown_heading() -> &'static Regex {
    MARKDOWN_HEADING.get_or_init(|| {
        Regex::new(r"^ {0,3}(#{1,6})\s+(.*?)[\s#]*$").expect("markdown heading pattern is valid")
    })
}

fn numbered_heading() -> &'static Regex {
    NUMBERED_HEADING.get_or_init(|| {
        Regex::new(r"^(\d+(?:\.\d+)*)\.?\s+\p{Lu}").expect("numbered heading pattern is valid")
    })
}

fn keyword_heading() -> &'static Regex {
    KEYWORD_HEADING.get_or_init(|| {
        Regex::new(r"(?i)^(chapter|section|part)\s+(\d+|[ivxlc]+)\b")
            .expect("keyword heading pattern is valid")
    })
}

/// How a heading line was recognised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadingStyle {
    Markdown,
    Numbered,
    Keyword,
    Uppercase,
}

impl HeadingStyle {
    fn as_str(self) -> &'static str {
        match self {
            HeadingStyle::Markdown => "markdown",
            HeadingStyle::Numbered => "numbered",
            HeadingStyle::Keyword => "keyword",
            HeadingStyle::Uppercase => "uppercase",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Heading {
    title: String,
    level: u8,
    style: HeadingStyle,
}

#[derive(Debug, Clone)]
struct Section {
    range: Range<usize>,
    heading: Option<Heading>,
}

/// Packs paragraphs inside sections delimited by heading lines
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStrategy;

impl DocumentStrategy {
    fn classify(line: &str) -> Option<Heading> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Some(caps) = markdown_heading().captures(line.trim_end()) {
            let title = caps.get(2).map_or("", |m| m.as_str()).trim();
            if !title.is_empty() {
                return Some(Heading {
                    title: title.to_string(),
                    level: caps[1].len() as u8,
                    style: HeadingStyle::Markdown,
                });
            }
        }

        let short = trimmed.chars().count() <= MAX_HEADING_CHARS;
        let terminal = trimmed.ends_with(['.', '!', '?', ';', ',']);

        if short && !terminal {
            if let Some(caps) = numbered_heading().captures(trimmed) {
                let depth = caps[1].split('.').count().min(6) as u8;
                return Some(Heading {
                    title: trimmed.to_string(),
                    level: depth,
                    style: HeadingStyle::Numbered,
                });
            }
        }

        if short && !terminal && keyword_heading().is_match(trimmed) {
            return Some(Heading {
                title: trimmed.to_string(),
                level: 1,
                style: HeadingStyle::Keyword,
            });
        }

        if short && !terminal && Self::is_uppercase_title(trimmed) {
            return Some(Heading {
                title: trimmed.to_string(),
                level: 1,
                style: HeadingStyle::Uppercase,
            });
        }

        None
    }

    /// All letters uppercase, at least three of them, one word of two or
    /// more letters, and letters make up most of the visible characters
    fn is_uppercase_title(line: &str) -> bool {
        let visible = line.chars().filter(|c| !c.is_whitespace()).count();
        let letters = line.chars().filter(|c| c.is_alphabetic()).count();
        let has_word = line
            .split_whitespace()
            .any(|word| word.chars().filter(|c| c.is_alphabetic()).count() >= 2);

        letters >= 3
            && has_word
            && letters * 100 >= visible * MIN_TITLE_LETTER_PERCENT
            && line
                .chars()
                .filter(|c| c.is_alphabetic())
                .all(char::is_uppercase)
    }

    fn sections(text: &TextView<'_>) -> Vec<Section> {
        let mut sections = Vec::new();
        let mut start = 0;
        let mut heading = None;
        let mut line_start = 0;

        while line_start < text.len() {
            let mut line_end = line_start;
            while line_end < text.len() && text.char_at(line_end) != '\n' {
                line_end += 1;
            }

            if let Some(found) = Self::classify(text.slice(line_start..line_end)) {
                if line_start > start {
                    sections.push(Section {
                        range: start..line_start,
                        heading: heading.take(),
                    });
                }
                start = line_start;
                heading = Some(found);
            }

            line_start = line_end + 1;
        }

        if start < text.len() {
            sections.push(Section {
                range: start..text.len(),
                heading,
            });
        }

        sections
    }

    fn span(
        range: Range<usize>,
        index: usize,
        heading: Option<&Heading>,
        boundary: DocumentBoundary,
    ) -> Span {
        let span = Span::new(
            range,
            StrategyDetail::Document {
                section_index: index,
                heading: heading.map(|h| h.title.clone()),
                heading_level: heading.map(|h| h.level),
                boundary,
            },
        );

        match heading {
            Some(h) => span.with_extra("heading_style", h.style.as_str()),
            None => span,
        }
    }
}

impl BoundaryStrategy for DocumentStrategy {
    fn kind(&self) -> ChunkingStrategy {
        ChunkingStrategy::Document
    }

    fn spans(&self, text: &TextView<'_>, config: &ChunkingConfig) -> Vec<Span> {
        let size = config.chunk_size;
        let sections = Self::sections(text);
        tracing::trace!(sections = sections.len(), "document structure detected");

        let mut spans = Vec::new();

        for (index, section) in sections.iter().enumerate() {
            let heading = section.heading.as_ref();
            let paras = paragraphs(text, section.range.clone());
            let last = paras.len().saturating_sub(1);
            let mut current: Option<Range<usize>> = None;

            for (i, para) in paras.into_iter().enumerate() {
                if para.len() > size {
                    if let Some(packed) = current.take() {
                        spans.push(Self::span(packed, index, heading, DocumentBoundary::Paragraph));
                    }

                    let windows = sliding_windows(para, size, config.chunk_overlap);
                    let count = windows.len();
                    for (w, window) in windows.into_iter().enumerate() {
                        let boundary = match (w + 1 == count, i == last) {
                            (false, _) => DocumentBoundary::SizeLimit,
                            (true, true) => DocumentBoundary::Section,
                            (true, false) => DocumentBoundary::Paragraph,
                        };
                        spans.push(Self::span(window, index, heading, boundary));
                    }
                    continue;
                }

                current = match current {
                    Some(packed) if packed.len() + para.len() > size => {
                        spans.push(Self::span(packed, index, heading, DocumentBoundary::Paragraph));
                        Some(para)
                    }
                    Some(packed) => Some(packed.start..para.end),
                    None => Some(para),
                };
            }

            if let Some(packed) = current {
                spans.push(Self::span(packed, index, heading, DocumentBoundary::Section));
            }
        }

        spans
    }

    fn explain(&self, chunks: &[Chunk], text_chars: usize, config: &ChunkingConfig) -> String {
        let mut sections = 0;
        let mut headed = 0;
        let mut oversized = 0;

        for chunk in chunks {
            if let StrategyDetail::Document {
                section_index,
                heading,
                boundary,
                ..
            } = &chunk.metadata.detail
            {
                if *section_index + 1 > sections {
                    sections = section_index + 1;
                    if heading.is_some() {
                        headed += 1;
                    }
                }
                if *boundary == DocumentBoundary::SizeLimit {
                    oversized += 1;
                }
            }
        }

        let cuts = if oversized == 0 {
            "No paragraph had to be cut.".to_string()
        } else {
            format!(
                "{oversized} cut(s) were made inside paragraphs longer than {} characters, using windows that share {} characters.",
                config.chunk_size, config.chunk_overlap
            )
        };

        format!(
            "Document-aware chunking respects document structure like paragraphs and sections. \
             Preserves semantic coherence but may create variable-sized chunks. \
             Found {sections} section(s), {headed} opened by a heading; paragraphs are packed into chunks of at most {} characters without crossing a section. {cuts} {}",
            config.chunk_size,
            size_summary(chunks, text_chars)
        )
    }
}
