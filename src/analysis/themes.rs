// Multi-label theme tagging over the shared tokenizer output.
use std::collections::BTreeSet;

use super::lexicon::THEMES;
use super::tokenize::tokenize;

/// Tags a comment with every theme whose keywords match. A keyword matches
/// when it is a *substring* of a token (not equality), so compound tokens can
/// trigger several themes. Zero, one, or many themes per comment; no
/// priority between them.
pub fn tag_themes(text: &str) -> BTreeSet<String> {
    let tokens = tokenize(text);
    let mut themes = BTreeSet::new();
    for (name, keywords) in THEMES {
        let hit = tokens
            .iter()
            .any(|token| keywords.iter().any(|kw| token.contains(kw)));
        if hit {
            themes.insert((*name).to_string());
        }
    }
    themes
}
