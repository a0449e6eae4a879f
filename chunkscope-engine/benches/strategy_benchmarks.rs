//! Performance benchmarks for the chunking strategies
//!
//! Run with: cargo bench --bench strategy_benchmarks

use chunkscope_engine::{ChunkingConfig, ChunkingEngine, ChunkingStrategy};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Generate prose of roughly the requested size in characters
fn generate_text(size: usize) -> String {
    let paragraph = "## Section heading\n\
        Chunking splits long documents into retrievable pieces. \
        Each piece should keep related sentences together. \
        Overlap preserves context across boundaries!\n\n";
    let repeat_count = size / paragraph.len() + 1;

    let mut text = paragraph.repeat(repeat_count);
    text.truncate(size);
    text
}

/// Benchmark every strategy over growing inputs
fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("strategies");

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);
        group.throughput(Throughput::Bytes(size as u64));

        for strategy in ChunkingStrategy::ALL {
            let engine = ChunkingEngine::new(ChunkingConfig::new(strategy, 1000, 200))
                .expect("benchmark configuration is valid");

            group.bench_with_input(BenchmarkId::new(strategy.id(), size), &text, |b, text| {
                b.iter(|| engine.chunk(black_box(text)).unwrap());
            });
        }
    }

    group.finish();
}

/// Benchmark the effect of chunk size on the recursive strategy
fn bench_chunk_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("recursive_chunk_sizes");
    let text = generate_text(100_000);
    group.throughput(Throughput::Bytes(text.len() as u64));

    for chunk_size in [256, 1000, 4000] {
        let engine = ChunkingEngine::new(ChunkingConfig::new(
            ChunkingStrategy::Recursive,
            chunk_size,
            chunk_size / 5,
        ))
        .expect("benchmark configuration is valid");

        group.bench_with_input(
            BenchmarkId::new("chunk_size", chunk_size),
            &text,
            |b, text| {
                b.iter(|| engine.chunk(black_box(text)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_chunk_sizes);
criterion_main!(benches);
