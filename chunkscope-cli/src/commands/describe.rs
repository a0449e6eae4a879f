//! Describe command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

/// Arguments for the describe command
#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Strategy identifier (fixed, recursive, document, semantic)
    #[arg(value_name = "STRATEGY")]
    pub strategy: String,

    /// Print the catalog entry as JSON
    #[arg(long)]
    pub json: bool,
}

impl DescribeArgs {
    /// Execute the describe command
    pub fn execute(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        self.write_to(&mut stdout)
    }

    /// Write the catalog entry of the strategy
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        let info = chunkscope_api::describe_strategy(&self.strategy)?;

        if self.json {
            serde_json::to_writer_pretty(&mut *writer, &info)?;
            writeln!(writer)?;
            return Ok(());
        }

        writeln!(writer, "{} ({})", info.name, self.strategy.trim().to_lowercase())?;
        writeln!(writer, "{}", info.description)?;

        for (title, items) in [
            ("Advantages", info.advantages),
            ("Disadvantages", info.disadvantages),
            ("Use cases", info.use_cases),
        ] {
            writeln!(writer)?;
            writeln!(writer, "{title}:")?;
            for item in items {
                writeln!(writer, "  - {item}")?;
            }
        }
        Ok(())
    }
}
