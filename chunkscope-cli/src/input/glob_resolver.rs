//! File pattern resolution using glob

use super::InputSource;
use crate::error::CliError;
use anyhow::Result;
use glob::glob;

/// Resolve command-line inputs to sources
///
/// `-` stands for standard input. Every other argument is a glob pattern
/// (a plain path is a pattern that matches itself) and must match at least
/// one file. Files are deduplicated and sorted per pattern; the order of
/// the patterns is kept.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<InputSource>> {
    let mut sources = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            if !sources.contains(&InputSource::Stdin) {
                sources.push(InputSource::Stdin);
            }
            continue;
        }

        let paths = glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path = path_result
                .map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;
            if path.is_file() {
                matched.push(path);
            }
        }

        if matched.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        matched.sort();
        for path in matched {
            let source = InputSource::File(path);
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
    }

    log::debug!("resolved {} input source(s)", sources.len());
    Ok(sources)
}
