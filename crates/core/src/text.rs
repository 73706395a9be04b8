//! Plain-text helpers shared by the scorer, the importer and the audit.
//!
//! Tag stripping is a single regex pass over internally generated HTML, not a
//! parser: an attribute value containing `>` ends the tag early and leaks the
//! rest of the attribute into the text.

use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid tag pattern"));

static SENTENCE_END_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence pattern"));

/// Removes everything that looks like an HTML tag.
pub fn strip_tags(html: &str) -> String {
    TAG_RE.replace_all(html, "").into_owned()
}

/// Counts whitespace separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Splits text on runs of `.`, `!` and `?`, dropping blank pieces.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_END_RE.split(text).map(str::trim).filter(|s| !s.is_empty()).collect()
}

/// Mean number of words per sentence, or 0.0 when there are no sentences.
pub fn average_sentence_length(text: &str) -> f64 {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return 0.0;
    }
    let words: usize = sentences.iter().map(|s| word_count(s)).sum();
    words as f64 / sentences.len() as f64
}

/// Non-overlapping occurrences of `needle` in `haystack`. An empty needle never occurs.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Case-insensitive substring test. A blank keyword is never contained.
pub fn contains_keyword(haystack: &str, keyword: &str) -> bool {
    let keyword = keyword.trim();
    !keyword.is_empty() && haystack.to_lowercase().contains(&keyword.to_lowercase())
}

/// The first `n` words joined by single spaces.
pub fn leading_words(text: &str, n: usize) -> String {
    text.split_whitespace().take(n).collect::<Vec<_>>().join(" ")
}

/// Number of Unicode scalar values, the unit used for title and meta lengths.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
