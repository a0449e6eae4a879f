//! Output formatting module

use anyhow::Result;
use chunkscope_api::{
    ChunkStats, ChunkingResult, DocumentBoundary, SemanticSplit, StrategyDetail,
};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Chunks with positions, one block per chunk
    Text,
    /// The chunking response as JSON
    Json,
    /// Markdown report
    Markdown,
}

impl OutputFormat {
    /// All formats with a one-line description
    pub const ALL: [(OutputFormat, &'static str); 3] = [
        (OutputFormat::Text, "Chunks with positions, one block per chunk"),
        (OutputFormat::Json, "The chunking response as JSON (array for several inputs)"),
        (OutputFormat::Markdown, "Markdown report with one section per chunk"),
    ];

    /// Identifier used on the command line and in config files
    pub fn id(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

/// Settings shared by all formatters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Print size/overlap statistics
    pub show_stats: bool,
    /// Indent JSON output
    pub pretty_json: bool,
    /// Number of documents that will be formatted
    pub document_count: usize,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format the result of one document
    fn format_document(&mut self, source: &str, result: &ChunkingResult) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON)
    fn finish(&mut self) -> Result<()>;
}

/// Create the formatter for a format
pub fn create_formatter<W: Write + Send + Sync + 'static>(
    format: OutputFormat,
    writer: W,
    options: OutputOptions,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, options)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, options)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, options)),
    }
}

/// One-line summary of a chunk's strategy annotation
pub fn describe_detail(detail: &StrategyDetail) -> String {
    match detail {
        StrategyDetail::Fixed { step } => format!("step {step}"),
        StrategyDetail::Recursive {
            separator,
            piece_count,
        } => match separator {
            Some(kind) => format!("split on {} breaks, {piece_count} piece(s)", kind.label()),
            None => "unsplit".to_string(),
        },
        StrategyDetail::Document {
            section_index,
            heading,
            boundary,
            ..
        } => {
            let boundary = match boundary {
                DocumentBoundary::Paragraph => "paragraph",
                DocumentBoundary::Section => "section end",
                DocumentBoundary::SizeLimit => "size limit",
            };
            match heading {
                Some(title) => format!("section {section_index} \"{title}\", ends at {boundary}"),
                None => format!("section {section_index}, ends at {boundary}"),
            }
        }
        StrategyDetail::Semantic {
            sentence_count,
            boundary_similarity,
            split_reason,
            ..
        } => {
            let reason = match split_reason {
                SemanticSplit::TopicShift => "topic shift",
                SemanticSplit::SizeLimit => "size limit",
                SemanticSplit::SizeOverflow => "oversized sentence",
                SemanticSplit::EndOfText => "end of text",
            };
            match boundary_similarity {
                Some(similarity) => format!(
                    "{sentence_count} sentence(s), {reason} (similarity {similarity:.3})"
                ),
                None => format!("{sentence_count} sentence(s), {reason}"),
            }
        }
    }
}

/// One-line statistics summary
pub fn describe_stats(stats: &ChunkStats) -> String {
    format!(
        "{} chunks, size {}-{} (average {:.1}), total overlap {}, {} characters covered",
        stats.total_chunks,
        stats.min_size,
        stats.max_size,
        stats.average_size,
        stats.total_overlap,
        stats.covered_chars
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chunkscope_api::SeparatorKind;

    #[test]
    fn test_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" MD ".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert!("xml".parse::<OutputFormat>().is_err());

        for (format, _) in OutputFormat::ALL {
            assert_eq!(format.id().parse::<OutputFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_describe_detail() {
        assert_eq!(describe_detail(&StrategyDetail::Fixed { step: 8 }), "step 8");
        assert_eq!(
            describe_detail(&StrategyDetail::Recursive {
                separator: Some(SeparatorKind::Sentence),
                piece_count: 3
            }),
            "split on sentence breaks, 3 piece(s)"
        );
        assert_eq!(
            describe_detail(&StrategyDetail::Document {
                section_index: 1,
                heading: Some("Intro".to_string()),
                heading_level: Some(1),
                boundary: DocumentBoundary::Section,
            }),
            "section 1 \"Intro\", ends at section end"
        );
        assert_eq!(
            describe_detail(&StrategyDetail::Semantic {
                sentence_count: 2,
                similarity_threshold: Some(0.3),
                boundary_similarity: Some(0.125),
                split_reason: SemanticSplit::TopicShift,
            }),
            "2 sentence(s), topic shift (similarity 0.125)"
        );
    }
}
