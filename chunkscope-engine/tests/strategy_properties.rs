//! Property tests for the chunk sequence invariants

use chunkscope_engine::*;
use proptest::prelude::*;

fn any_strategy() -> impl Strategy<Value = ChunkingStrategy> {
    prop::sample::select(ChunkingStrategy::ALL.to_vec())
}

// Prose-like input with headings, blank lines, punctuation and multibyte characters
fn text_content() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 .,!?#\n\"éü日本。]{0,400}"
}

fn sizes() -> impl Strategy<Value = (usize, usize)> {
    (1usize..200).prop_flat_map(|size| (Just(size), 0..size))
}

fn upper_bound(config: &ChunkingConfig) -> usize {
    match config.strategy {
        ChunkingStrategy::Semantic => {
            let tolerance = config.semantic.size_tolerance;
            config
                .chunk_size
                .max((config.chunk_size as f64 * (1.0 + tolerance)).floor() as usize)
        }
        _ => config.chunk_size,
    }
}

proptest! {
    /// Property: dropping each chunk's leading overlap gives back the input
    #[test]
    fn prop_lossless_reconstruction(
        text in text_content(),
        strategy in any_strategy(),
        (size, overlap) in sizes(),
    ) {
        let config = ChunkingConfig::new(strategy, size, overlap);
        let result = chunk(&text, &config).unwrap();
        prop_assert_eq!(result.reconstruct(), text);
    }

    /// Property: chunks are ordered, gap-free, sized in characters and
    /// overlap exactly where they share text
    #[test]
    fn prop_sequence_invariants(
        text in text_content(),
        strategy in any_strategy(),
        (size, overlap) in sizes(),
    ) {
        let config = ChunkingConfig::new(strategy, size, overlap);
        let result = chunk(&text, &config).unwrap();
        let len = text.chars().count();

        prop_assert_eq!(result.total_chunks, result.chunks.len());
        prop_assert_eq!(result.strategy, strategy);

        if len == 0 {
            prop_assert!(result.chunks.is_empty());
        } else {
            prop_assert_eq!(result.chunks[0].start_index, 0);
            prop_assert_eq!(result.chunks.last().unwrap().end_index, len);
        }

        for (i, c) in result.chunks.iter().enumerate() {
            prop_assert_eq!(c.id, i);
            prop_assert!(c.start_index < c.end_index);
            prop_assert_eq!(c.size, c.end_index - c.start_index);
            prop_assert_eq!(c.size, c.content.chars().count());
            prop_assert!(c.size <= upper_bound(&config));
            prop_assert_eq!(c.metadata.target_size, size);
            prop_assert_eq!(c.metadata.detail.strategy(), strategy);

            if i == 0 {
                prop_assert_eq!(c.overlap_with_previous, 0);
            } else {
                let prev = &result.chunks[i - 1];
                prop_assert!(c.start_index > prev.start_index);
                prop_assert!(c.start_index <= prev.end_index);
                prop_assert!(c.end_index > prev.end_index);
                prop_assert_eq!(c.overlap_with_previous, prev.end_index - c.start_index);
            }
        }
    }

    /// Property: the same input always yields the same output
    #[test]
    fn prop_idempotent(
        text in text_content(),
        strategy in any_strategy(),
        (size, overlap) in sizes(),
    ) {
        let config = ChunkingConfig::new(strategy, size, overlap);
        prop_assert_eq!(chunk(&text, &config).unwrap(), chunk(&text, &config).unwrap());
    }

    /// Property: an overlap that does not leave room to advance is rejected
    #[test]
    fn prop_overlap_not_below_size_fails(
        text in text_content(),
        strategy in any_strategy(),
        size in 0usize..200,
        extra in 0usize..50,
    ) {
        let config = ChunkingConfig::new(strategy, size, size + extra);
        let is_invalid_configuration = matches!(
            chunk(&text, &config),
            Err(EngineError::InvalidConfiguration { .. })
        );
        prop_assert!(is_invalid_configuration);
    }

    /// Property: fixed windows advance by exactly `chunk_size - chunk_overlap`
    #[test]
    fn prop_fixed_stride(
        text in text_content(),
        (size, overlap) in sizes(),
    ) {
        let config = ChunkingConfig::new(ChunkingStrategy::Fixed, size, overlap);
        let result = chunk(&text, &config).unwrap();

        for pair in result.chunks.windows(2) {
            prop_assert_eq!(pair[1].start_index - pair[0].start_index, size - overlap);
            prop_assert_eq!(pair[0].size, size);
        }
    }

    /// Property: text without any separator falls back to character cuts
    /// that share `chunk_overlap` characters like the fixed windows
    #[test]
    fn prop_recursive_character_tier_matches_fixed(
        text in "[a-z日本éü]{0,300}",
        (size, overlap) in sizes(),
    ) {
        let spans = |strategy| {
            chunk(&text, &ChunkingConfig::new(strategy, size, overlap))
                .unwrap()
                .chunks
                .iter()
                .map(|c| (c.start_index, c.end_index, c.overlap_with_previous))
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(spans(ChunkingStrategy::Recursive), spans(ChunkingStrategy::Fixed));
    }
}
