//! Basic usage example for the chunkscope API

use chunkscope_api::{chunk_text, strategy_catalog, Chunker, Config, ConfigBuilder, Input};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "# Chunking\n\
                Chunking splits documents into retrievable pieces. Good chunks keep context.\n\n\
                ## Overlap\n\
                Overlap repeats a little text across boundaries. It helps retrieval at the edges.";

    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let result = chunk_text(text, "fixed", 60, 10)?;
    for chunk in &result.chunks {
        println!(
            "  Chunk {}: [{}..{}) overlap {}",
            chunk.id, chunk.start_index, chunk.end_index, chunk.overlap_with_previous
        );
    }
    println!("{}\n", result.strategy_explanation);

    // Method 2: Using configuration presets
    println!("=== Method 2: Configuration Presets ===");
    let chunker = Chunker::with_config(Config::fine())?;
    let result = chunker.process(Input::from_text(text))?;
    println!("Fine preset produced {} chunks\n", result.total_chunks);

    // Method 3: Custom configuration
    println!("=== Method 3: Custom Configuration ===");
    let chunker = Chunker::with_config(
        ConfigBuilder::default()
            .strategy("document")?
            .chunk_size(120)
            .chunk_overlap(0)
            .build()?,
    )?;
    let result = chunker.process_text(text)?;
    for chunk in &result.chunks {
        println!("  {:?}", chunk.metadata.detail);
    }

    // Method 4: Strategy catalog
    println!("\n=== Method 4: Strategy Catalog ===");
    for (id, info) in strategy_catalog() {
        println!("  {id}: {}", info.description);
    }

    Ok(())
}
