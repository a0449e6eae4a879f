//! Boundary primitives shared by the strategies
//!
//! Every function here partitions a character range into contiguous,
//! non-empty sub-ranges (or overlapping windows for [`sliding_windows`]).
//! Separators stay attached to the end of the piece they terminate, so
//! concatenating the pieces always gives back the input range.

use crate::text::TextView;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

static BLANK_LINE: OnceLock<Regex> = OnceLock::new();

fn blank_line() -> &'static Regex {
    BLANK_LINE.get_or_init(|| Regex::new(r"\n\s*\n").expect("blank line pattern is valid"))
}

/// Abbreviations whose trailing period does not end a sentence
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "vs", "etc", "e.g", "i.e", "inc", "ltd",
    "corp", "co", "fig", "no", "vol", "approx", "dept", "est", "u.s", "ph.d", "cf", "al", "a.m",
    "p.m",
];

/// Fixed-size windows over a range
///
/// Windows hold `size` characters and start `size - overlap` characters
/// apart; the last window is truncated to the end of the range.
pub fn sliding_windows(range: Range<usize>, size: usize, overlap: usize) -> Vec<Range<usize>> {
    debug_assert!(overlap < size);

    let mut windows = Vec::new();
    let mut start = range.start;

    while start < range.end {
        let end = (start + size).min(range.end);
        windows.push(start..end);

        if end == range.end {
            break;
        }
        start = end - overlap;
    }

    windows
}

/// Split a range after every occurrence of `separator`
pub fn split_keep_separator(
    text: &TextView<'_>,
    range: Range<usize>,
    separator: &str,
) -> Vec<Range<usize>> {
    if range.is_empty() {
        return Vec::new();
    }

    let base = text.byte_offset(range.start);
    let mut cuts: Vec<usize> = text
        .slice(range.clone())
        .match_indices(separator)
        .map(|(byte, sep)| text.char_offset(base + byte + sep.len()))
        .collect();
    cuts.push(range.end);

    cut_at(range, cuts)
}

/// Split a range into blank-line-delimited paragraphs
pub fn paragraphs(text: &TextView<'_>, range: Range<usize>) -> Vec<Range<usize>> {
    if range.is_empty() {
        return Vec::new();
    }

    let base = text.byte_offset(range.start);
    let mut cuts: Vec<usize> = blank_line()
        .find_iter(text.slice(range.clone()))
        .map(|m| text.char_offset(base + m.end()))
        .collect();
    cuts.push(range.end);

    cut_at(range, cuts)
}

/// Split a range into sentences
///
/// A sentence ends after a run of terminators (`. ! ? 。 ！ ？ …`),
/// optional closing quotes or brackets and the whitespace that follows.
/// ASCII terminators need that whitespace (or the end of the range);
/// full-width ones do not. A period after a known abbreviation or a
/// single capital initial does not end a sentence. A blank line always
/// ends one.
pub fn sentences(text: &TextView<'_>, range: Range<usize>) -> Vec<Range<usize>> {
    let end = range.end;
    let mut cuts = Vec::new();
    let mut i = range.start;

    while i < end {
        let ch = text.char_at(i);

        if ch == '\n' && is_blank_line_at(text, i, end) {
            let mut j = i;
            while j < end && text.char_at(j).is_whitespace() {
                j += 1;
            }
            cuts.push(j);
            i = j;
            continue;
        }

        if !is_terminator(ch) {
            i += 1;
            continue;
        }

        let mut j = i + 1;
        while j < end && is_terminator(text.char_at(j)) {
            j += 1;
        }
        let run_len = j - i;
        while j < end && is_closer(text.char_at(j)) {
            j += 1;
        }

        let wide = is_wide_terminator(text.char_at(j - 1)) || is_wide_terminator(ch);
        let followed_by_space = j < end && text.char_at(j).is_whitespace();

        if j < end && !followed_by_space && !wide {
            i = j;
            continue;
        }

        if ch == '.' && run_len == 1 && is_abbreviation(text, range.start, i) {
            i = j;
            continue;
        }

        while j < end && text.char_at(j).is_whitespace() {
            j += 1;
        }
        cuts.push(j);
        i = j;
    }

    if cuts.last() != Some(&end) {
        cuts.push(end);
    }

    cut_at(range, cuts)
}

/// Lowercased content words used for lexical similarity
pub fn content_words(fragment: &str) -> Vec<String> {
    const STOP_WORDS: &[&str] = &[
        "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "was", "has", "had",
        "this", "that", "with", "from", "they", "have", "were", "which", "their", "there",
        "been", "into", "its", "our", "who", "will", "would", "what", "when", "than", "then",
        "them", "these", "those", "also", "such", "may",
    ];

    fragment
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| word.chars().count() >= 3)
        .map(str::to_lowercase)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

fn cut_at(range: Range<usize>, cuts: Vec<usize>) -> Vec<Range<usize>> {
    let mut pieces = Vec::with_capacity(cuts.len());
    let mut start = range.start;

    for cut in cuts {
        if cut > start && cut <= range.end {
            pieces.push(start..cut);
            start = cut;
        }
    }
    if start < range.end {
        pieces.push(start..range.end);
    }

    pieces
}

fn is_blank_line_at(text: &TextView<'_>, newline: usize, end: usize) -> bool {
    let mut k = newline + 1;
    while k < end && matches!(text.char_at(k), ' ' | '\t' | '\r') {
        k += 1;
    }
    k < end && text.char_at(k) == '\n'
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?' | '…') || is_wide_terminator(ch)
}

fn is_wide_terminator(ch: char) -> bool {
    matches!(ch, '。' | '！' | '？')
}

fn is_closer(ch: char) -> bool {
    matches!(
        ch,
        '"' | '\'' | ')' | ']' | '}' | '”' | '’' | '」' | '』' | '）'
    )
}

fn is_abbreviation(text: &TextView<'_>, floor: usize, period: usize) -> bool {
    let mut start = period;
    while start > floor {
        let prev = text.char_at(start - 1);
        if prev.is_alphabetic() || prev == '.' {
            start -= 1;
        } else {
            break;
        }
    }

    let word: String = text.chars(start..period).iter().collect();
    let word = word.trim_start_matches('.');
    if word.is_empty() {
        return false;
    }

    let mut letters = word.chars();
    if let (Some(first), None) = (letters.next(), letters.next()) {
        return first.is_uppercase();
    }

    let lowered = word.to_lowercase();
    ABBREVIATIONS.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(view: &TextView<'a>, ranges: &[Range<usize>]) -> Vec<&'a str> {
        ranges.iter().map(|r| view.slice(r.clone())).collect()
    }

    #[test]
    fn test_sliding_windows() {
        assert_eq!(sliding_windows(0..26, 10, 2), vec![0..10, 8..18, 16..26]);
        assert_eq!(sliding_windows(0..5, 100, 0), vec![0..5]);
        assert_eq!(sliding_windows(4..4, 10, 2), Vec::<Range<usize>>::new());
        assert_eq!(sliding_windows(10..30, 10, 0), vec![10..20, 20..30]);
    }

    #[test]
    fn test_split_keep_separator() {
        let view = TextView::new("one two  three");
        let pieces = split_keep_separator(&view, view.full_range(), " ");
        assert_eq!(texts(&view, &pieces), vec!["one ", "two ", " ", "three"]);

        let view = TextView::new("no separators");
        let pieces = split_keep_separator(&view, view.full_range(), "\n\n");
        assert_eq!(pieces, vec![0..13]);
    }

    #[test]
    fn test_split_multibyte() {
        let view = TextView::new("日本\n\n語のテキスト");
        let pieces = split_keep_separator(&view, view.full_range(), "\n\n");
        assert_eq!(texts(&view, &pieces), vec!["日本\n\n", "語のテキスト"]);
    }

    #[test]
    fn test_paragraphs() {
        let view = TextView::new("First para.\n\n  \nSecond para.\nStill second.\n\nThird.");
        let pieces = paragraphs(&view, view.full_range());
        assert_eq!(
            texts(&view, &pieces),
            vec![
                "First para.\n\n  \n",
                "Second para.\nStill second.\n\n",
                "Third."
            ]
        );
    }

    #[test]
    fn test_sentences_basic() {
        let view = TextView::new("Hello world. How are you? I am fine!");
        let pieces = sentences(&view, view.full_range());
        assert_eq!(
            texts(&view, &pieces),
            vec!["Hello world. ", "How are you? ", "I am fine!"]
        );
    }

    #[test]
    fn test_sentences_abbreviations_and_initials() {
        let view = TextView::new("Dr. Smith met J. Doe at 5 p.m. today. They talked.");
        let pieces = sentences(&view, view.full_range());
        assert_eq!(
            texts(&view, &pieces),
            vec!["Dr. Smith met J. Doe at 5 p.m. today. ", "They talked."]
        );
    }

    #[test]
    fn test_sentences_quotes_and_numbers() {
        let view = TextView::new("He said \"stop.\" Then left. Pi is 3.14 exactly.");
        let pieces = sentences(&view, view.full_range());
        assert_eq!(
            texts(&view, &pieces),
            vec!["He said \"stop.\" ", "Then left. ", "Pi is 3.14 exactly."]
        );
    }

    #[test]
    fn test_sentences_wide_terminators() {
        let view = TextView::new("これはテストです。次の文です。");
        let pieces = sentences(&view, view.full_range());
        assert_eq!(texts(&view, &pieces), vec!["これはテストです。", "次の文です。"]);
    }

    #[test]
    fn test_sentences_blank_line_ends_sentence() {
        let view = TextView::new("A heading\n\nBody text here. More");
        let pieces = sentences(&view, view.full_range());
        assert_eq!(
            texts(&view, &pieces),
            vec!["A heading\n\n", "Body text here. ", "More"]
        );
    }

    #[test]
    fn test_pieces_cover_range() {
        let text = "Mixed. Text with\n\nparagraphs, e.g. this one!  And \"quotes.\" End";
        let view = TextView::new(text);
        for pieces in [
            sentences(&view, view.full_range()),
            paragraphs(&view, view.full_range()),
            split_keep_separator(&view, view.full_range(), " "),
        ] {
            let joined: String = texts(&view, &pieces).concat();
            assert_eq!(joined, text);
            assert!(pieces.iter().all(|r| !r.is_empty()));
        }
    }

    #[test]
    fn test_content_words() {
        let words = content_words("The cat and the Catalog, with 42 items!");
        assert_eq!(words, vec!["cat", "catalog", "items"]);
    }
}
