//! Plain text output formatter

use super::{describe_detail, describe_stats, OutputFormatter, OutputOptions};
use anyhow::Result;
use chunkscope_api::ChunkingResult;
use std::io::Write;

/// Plain text formatter - one block per chunk followed by the explanation
pub struct TextFormatter<W: Write> {
    writer: W,
    options: OutputOptions,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, options: OutputOptions) -> Self {
        Self {
            writer,
            options,
            documents: 0,
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, result: &ChunkingResult) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        self.documents += 1;

        if self.options.document_count > 1 {
            writeln!(self.writer, "==> {source} <==")?;
        }

        for chunk in &result.chunks {
            writeln!(
                self.writer,
                "--- chunk {} [{}..{}) size {} overlap {} | {} ---",
                chunk.id,
                chunk.start_index,
                chunk.end_index,
                chunk.size,
                chunk.overlap_with_previous,
                describe_detail(&chunk.metadata.detail)
            )?;
            writeln!(self.writer, "{}", chunk.content)?;
        }

        writeln!(
            self.writer,
            "=== {}: {} chunk(s) ===",
            result.strategy, result.total_chunks
        )?;
        writeln!(self.writer, "{}", result.strategy_explanation)?;

        if self.options.show_stats {
            writeln!(self.writer, "Stats: {}", describe_stats(&result.stats()))?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chunkscope_api::chunk_text;

    fn options(document_count: usize, show_stats: bool) -> OutputOptions {
        OutputOptions {
            show_stats,
            pretty_json: true,
            document_count,
        }
    }

    #[test]
    fn test_single_document() {
        let result = chunk_text("abcdefghij", "fixed", 4, 1).unwrap();
        let mut formatter = TextFormatter::new(Vec::new(), options(1, false));
        formatter.format_document("a.txt", &result).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(output.starts_with("--- chunk 0 [0..4) size 4 overlap 0 | step 3 ---\nabcd\n"));
        assert!(output.contains("--- chunk 1 [3..7) size 4 overlap 1"));
        assert!(output.contains("=== fixed: 3 chunk(s) ==="));
        assert!(!output.contains("==> a.txt <=="));
        assert!(!output.contains("Stats:"));
    }

    #[test]
    fn test_multiple_documents_with_stats() {
        let result = chunk_text("abcdefghij", "fixed", 4, 1).unwrap();
        let mut formatter = TextFormatter::new(Vec::new(), options(2, true));
        formatter.format_document("a.txt", &result).unwrap();
        formatter.format_document("b.txt", &result).unwrap();

        let output = String::from_utf8(formatter.into_inner()).unwrap();
        assert!(output.contains("==> a.txt <=="));
        assert!(output.contains("\n\n==> b.txt <=="));
        assert!(output.contains("Stats: 3 chunks, size 4-4"));
    }
}
