//! Chunk command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, OutputFormatter, OutputOptions};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use chunkscope_api::{ChunkRequest, Chunker, ChunkingResult, Config};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

/// Arguments for the chunk command
#[derive(Debug, Args)]
pub struct ChunkArgs {
    /// Input files or patterns (supports glob, `-` reads stdin)
    #[arg(
        short,
        long,
        value_name = "FILE/PATTERN",
        required_unless_present = "request"
    )]
    pub input: Vec<String>,

    /// JSON request file with text, strategy and sizes (`-` reads stdin)
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with_all = ["input", "strategy", "chunk_size", "chunk_overlap"]
    )]
    pub request: Option<String>,

    /// Chunking strategy (fixed, recursive, document, semantic)
    #[arg(short, long, value_name = "NAME")]
    pub strategy: Option<String>,

    /// Target chunk size in characters
    #[arg(long, value_name = "CHARS")]
    pub chunk_size: Option<usize>,

    /// Characters shared between consecutive chunks
    #[arg(long, value_name = "CHARS")]
    pub chunk_overlap: Option<usize>,

    /// Similarity percentile used as topic breakpoint (semantic)
    #[arg(long, value_name = "PERCENT")]
    pub breakpoint_percentile: Option<f64>,

    /// Fraction a chunk may exceed the size by (semantic)
    #[arg(long, value_name = "FRACTION")]
    pub size_tolerance: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print size and overlap statistics
    #[arg(long)]
    pub stats: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ChunkArgs {
    /// Execute the chunk command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting chunking");
        log::debug!("Arguments: {self:?}");

        let file_config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };
        let format = match self.format {
            Some(format) => format,
            None => file_config.output_format()?,
        };

        let documents = match &self.request {
            Some(request) => vec![self.run_request(request)?],
            None => self.run_inputs(&file_config)?,
        };

        let options = OutputOptions {
            show_stats: self.stats || file_config.output.show_stats,
            pretty_json: file_config.output.pretty_json,
            document_count: documents.len(),
        };

        let mut formatter = self.create_formatter(format, options)?;
        for (source, result) in &documents {
            formatter.format_document(source, result)?;
        }
        formatter.finish()?;

        log::info!("Chunked {} document(s)", documents.len());
        Ok(())
    }

    /// Chunking configuration: flags over the config file over defaults
    pub fn chunking_config(&self, file_config: &CliConfig) -> Result<Config> {
        let mut builder = file_config.builder()?;

        if let Some(strategy) = &self.strategy {
            builder = builder.strategy(strategy)?;
        }
        if let Some(size) = self.chunk_size {
            builder = builder.chunk_size(size);
        }
        if let Some(overlap) = self.chunk_overlap {
            builder = builder.chunk_overlap(overlap);
        }
        if let Some(percentile) = self.breakpoint_percentile {
            builder = builder.breakpoint_percentile(percentile);
        }
        if let Some(tolerance) = self.size_tolerance {
            builder = builder.size_tolerance(tolerance);
        }

        Ok(builder.build()?)
    }

    /// Chunk every input file independently
    fn run_inputs(&self, file_config: &CliConfig) -> Result<Vec<(String, ChunkingResult)>> {
        let config = self.chunking_config(file_config)?;
        let chunker = Chunker::with_config(config)?;
        let sources = resolve_patterns(&self.input)?;

        log::info!(
            "Chunking {} document(s) with {} ({}/{})",
            sources.len(),
            config.strategy(),
            config.chunk_size(),
            config.chunk_overlap()
        );

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(sources.len() as u64);

        let documents = sources
            .par_iter()
            .map(|source| -> Result<(String, ChunkingResult)> {
                let name = source.name();
                let text = source.read()?;
                let result = chunker.process_text(&text).map_err(|e| {
                    CliError::ProcessingError {
                        source: name.clone(),
                        message: e.to_string(),
                    }
                })?;
                log::debug!("{name}: {} chunk(s)", result.total_chunks);
                progress.file_completed(&name);
                Ok((name, result))
            })
            .collect::<Result<Vec<_>>>();

        progress.finish();
        documents
    }

    /// Run a JSON chunk request
    fn run_request(&self, request: &str) -> Result<(String, ChunkingResult)> {
        let (name, content) = if request == "-" {
            (crate::input::STDIN_NAME.to_string(), FileReader::read_stdin()?)
        } else {
            let path = PathBuf::from(request);
            (request.to_string(), FileReader::read_text(&path)?)
        };

        let request: ChunkRequest = serde_json::from_str(&content)
            .with_context(|| format!("Invalid chunk request in {name}"))?;
        let result = Chunker::process_request(&request).map_err(|e| {
            CliError::ProcessingError {
                source: name.clone(),
                message: e.to_string(),
            }
        })?;

        Ok((name, result))
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        options: OutputOptions,
    ) -> Result<Box<dyn OutputFormatter>> {
        Ok(match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                create_formatter(format, BufWriter::new(file), options)
            }
            None => create_formatter(format, io::stdout(), options),
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running inside tests
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .try_init();
    }
}
