//! List command implementation

use crate::output::OutputFormat;
use anyhow::Result;
use chunkscope_api::ChunkingStrategy;
use std::io::Write;

/// Write the available strategies, in declaration order
pub fn write_strategies<W: Write>(writer: &mut W, json: bool) -> Result<()> {
    if json {
        let catalog = chunkscope_api::strategy_catalog();
        serde_json::to_writer_pretty(&mut *writer, &catalog)?;
        writeln!(writer)?;
        return Ok(());
    }

    writeln!(writer, "Available strategies:")?;
    for strategy in ChunkingStrategy::ALL {
        let info = chunkscope_api::describe_strategy(strategy.id())?;
        writeln!(writer, "  {:<10} - {}", strategy.id(), info.description)?;
    }
    Ok(())
}

/// Write the available output formats
pub fn write_formats<W: Write>(writer: &mut W) -> Result<()> {
    writeln!(writer, "Available output formats:")?;
    for (format, description) in OutputFormat::ALL {
        writeln!(writer, "  {:<10} - {}", format.id(), description)?;
    }
    Ok(())
}
