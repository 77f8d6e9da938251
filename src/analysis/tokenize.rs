// Tokenizer shared by the classifier, rule scoring, and theme tagging.
use once_cell::sync::Lazy;
use regex::Regex;

use super::lexicon::STOPWORDS;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z0-9']+").unwrap());

/// Lowercases the input, treats punctuation as whitespace, and drops tokens
/// that are too short (<= 2 chars) or in the stopword set. Empty or
/// whitespace-only input yields an empty Vec.
pub fn tokenize(text: &str) -> Vec<String> {
    WORD_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .filter(|t| t.chars().count() > 2)
        .filter(|t| !STOPWORDS.contains(t.as_str()))
        .collect()
}
