//! Markdown output formatter

use super::{describe_detail, OutputFormatter, OutputOptions};
use anyhow::Result;
use chunkscope_api::ChunkingResult;
use std::io::Write;

/// Markdown formatter - one heading and fenced block per chunk
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    options: OutputOptions,
    chunk_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, options: OutputOptions) -> Self {
        Self {
            writer,
            options,
            chunk_count: 0,
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Fence longer than any backtick run in the content
fn fence_for(content: &str) -> String {
    let mut longest = 0;
    let mut run = 0;
    for c in content.chars() {
        if c == '`' {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    "`".repeat((longest + 1).max(3))
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, result: &ChunkingResult) -> Result<()> {
        let level = if self.options.document_count > 1 {
            writeln!(self.writer, "## {source}")?;
            writeln!(self.writer)?;
            "###"
        } else {
            "##"
        };

        for chunk in &result.chunks {
            self.chunk_count += 1;
            writeln!(
                self.writer,
                "{level} Chunk {} (characters {}-{})",
                chunk.id, chunk.start_index, chunk.end_index
            )?;
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "*Size {}, overlap {}, {}*",
                chunk.size,
                chunk.overlap_with_previous,
                describe_detail(&chunk.metadata.detail)
            )?;
            writeln!(self.writer)?;

            let fence = fence_for(&chunk.content);
            writeln!(self.writer, "{fence}text")?;
            writeln!(self.writer, "{}", chunk.content)?;
            writeln!(self.writer, "{fence}")?;
            writeln!(self.writer)?;
        }

        writeln!(self.writer, "> **{}**: {}", result.strategy, result.strategy_explanation)?;
        writeln!(self.writer)?;

        if self.options.show_stats {
            let stats = result.stats();
            writeln!(self.writer, "| Metric | Value |")?;
            writeln!(self.writer, "|---|---|")?;
            writeln!(self.writer, "| Chunks | {} |", stats.total_chunks)?;
            writeln!(self.writer, "| Smallest | {} |", stats.min_size)?;
            writeln!(self.writer, "| Largest | {} |", stats.max_size)?;
            writeln!(self.writer, "| Average | {:.1} |", stats.average_size)?;
            writeln!(self.writer, "| Total overlap | {} |", stats.total_overlap)?;
            writeln!(self.writer, "| Covered | {} |", stats.covered_chars)?;
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total chunks: {}*", self.chunk_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
