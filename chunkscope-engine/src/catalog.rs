//! Static strategy catalog consumed by configuration UIs

use crate::config::ChunkingStrategy;

/// Descriptive entry for one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StrategyInfo {
    /// Display name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Strengths
    pub advantages: &'static [&'static str],
    /// Weaknesses
    pub disadvantages: &'static [&'static str],
    /// Typical applications
    pub use_cases: &'static [&'static str],
}

static FIXED: StrategyInfo = StrategyInfo {
    name: "Fixed Size Chunking",
    description: "Splits text into equal-sized chunks with specified overlap",
    advantages: &[
        "Simple and predictable",
        "Consistent chunk sizes",
        "Fast processing",
    ],
    disadvantages: &[
        "May break sentences/paragraphs",
        "Ignores document structure",
        "Can split important context",
    ],
    use_cases: &[
        "Large documents",
        "When consistent chunk sizes are important",
        "Simple RAG systems",
    ],
};

static RECURSIVE: StrategyInfo = StrategyInfo {
    name: "Recursive Character Splitting",
    description: "Intelligently splits text at natural boundaries while respecting size limits",
    advantages: &[
        "Respects natural boundaries",
        "Good balance of size and context",
        "Handles various text types",
    ],
    disadvantages: &[
        "More complex than fixed",
        "Variable chunk sizes",
        "May still break context",
    ],
    use_cases: &[
        "General-purpose text processing",
        "Mixed content types",
        "When structure matters",
    ],
};

static DOCUMENT: StrategyInfo = StrategyInfo {
    name: "Document-Aware Chunking",
    description: "Preserves document structure like paragraphs and sections",
    advantages: &[
        "Preserves semantic coherence",
        "Respects document structure",
        "Natural reading flow",
    ],
    disadvantages: &[
        "Highly variable chunk sizes",
        "May create very small chunks at section ends",
        "Document-dependent",
    ],
    use_cases: &[
        "Structured documents",
        "Academic papers",
        "When document structure is important",
    ],
};

static SEMANTIC: StrategyInfo = StrategyInfo {
    name: "Semantic Chunking",
    description: "Groups adjacent sentences while they stay lexically similar",
    advantages: &[
        "Highest topical coherence",
        "Context-aware splitting",
        "Never cuts inside a sentence unless it is oversized",
    ],
    disadvantages: &[
        "Heuristic similarity measure",
        "Variable chunk sizes",
        "Sensitive to the breakpoint percentile",
    ],
    use_cases: &[
        "High-quality RAG systems",
        "When semantic coherence is critical",
        "Research applications",
    ],
};

/// Catalog entry of a strategy
pub fn describe_strategy(strategy: ChunkingStrategy) -> &'static StrategyInfo {
    match strategy {
        ChunkingStrategy::Fixed => &FIXED,
        ChunkingStrategy::Recursive => &RECURSIVE,
        ChunkingStrategy::Document => &DOCUMENT,
        ChunkingStrategy::Semantic => &SEMANTIC,
    }
}

/// Every strategy with its catalog entry, in declaration order
pub fn strategy_catalog() -> Vec<(ChunkingStrategy, &'static StrategyInfo)> {
    ChunkingStrategy::ALL
        .into_iter()
        .map(|strategy| (strategy, describe_strategy(strategy)))
        .collect()
}
