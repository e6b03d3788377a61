use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z0-9]+").expect("word pattern is a valid regex"));

/// Splits indexed text into lower-case alphanumeric tokens of at least two characters.
pub fn tokenize_text(text: &str) -> Vec<String> {
    WORD.find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .filter(|word| word.len() > 1)
        .collect()
}

/// Token counts for a piece of text, as used by the vectorized ranker.
pub fn term_frequencies(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokenize_text(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Splits a query for substring matching: whitespace separated, lower-cased, stripped of
/// surrounding punctuation. Short words are kept because course codes are short.
pub fn query_terms(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric() && c != '&')
                .to_string()
        })
        .filter(|word| !word.is_empty())
        .collect()
}
