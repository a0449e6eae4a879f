//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let outcome = CliConfig::from_file(&self.config).and_then(|file_config| {
            let format = file_config.output_format()?;
            let config = file_config.validate()?;
            Ok((file_config, format, config))
        });

        match outcome {
            Ok((file_config, format, config)) => {
                println!("✓ Configuration is valid!");
                println!("  Strategy: {}", config.strategy());
                println!("  Chunk size: {}", config.chunk_size());
                println!("  Chunk overlap: {}", config.chunk_overlap());
                println!(
                    "  Breakpoint percentile: {}",
                    config.semantic().breakpoint_percentile
                );
                println!("  Size tolerance: {}", config.semantic().size_tolerance);
                println!("  Output format: {format}");
                println!("  Show stats: {}", file_config.output.show_stats);
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}
