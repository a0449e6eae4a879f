//! JSON output formatter

use super::{OutputFormatter, OutputOptions};
use anyhow::Result;
use chunkscope_api::{ChunkStats, ChunkingResult};
use serde::Serialize;
use std::io::Write;

/// JSON formatter
///
/// A single document without statistics is written as the bare chunking
/// response. Otherwise the output is an array of [`DocumentEntry`] values in
/// input order.
pub struct JsonFormatter<W: Write> {
    writer: W,
    options: OutputOptions,
    documents: Vec<DocumentEntry>,
}

/// One document in the JSON array output
#[derive(Debug, Serialize)]
pub struct DocumentEntry {
    /// Path of the input, or `<stdin>`
    pub source: String,
    /// The chunking response
    pub result: ChunkingResult,
    /// Statistics, present with `--stats`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<ChunkStats>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, options: OutputOptions) -> Self {
        Self {
            writer,
            options,
            documents: Vec::new(),
        }
    }

    /// Consume the formatter, returning the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> Result<()> {
        if self.options.pretty_json {
            serde_json::to_writer_pretty(&mut self.writer, value)?;
        } else {
            serde_json::to_writer(&mut self.writer, value)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, result: &ChunkingResult) -> Result<()> {
        self.documents.push(DocumentEntry {
            source: source.to_string(),
            result: result.clone(),
            stats: self.options.show_stats.then(|| result.stats()),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let documents = std::mem::take(&mut self.documents);

        match documents.as_slice() {
            [single] if self.options.document_count <= 1 && !self.options.show_stats => {
                self.write_value(&single.result)?;
            }
            _ => self.write_value(&documents)?,
        }

        self.writer.flush()?;
        Ok(())
    }
}
