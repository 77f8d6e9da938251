// Batch aggregation of classified comments for reporting: word cloud,
// overall sentiment counts, and per-theme sentiment/word tables. A pure fold
// over an already-classified collection; rebuilt fully on every call.
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashMap;

use super::classifier::Sentiment;
use super::decision::ClassificationResult;
use super::lexicon::{NEGATION_WORDS, THEMES};
use super::tokenize::tokenize;

const WORD_CLOUD_LIMIT: usize = 50;
const THEME_WORD_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub text: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SentimentCounts {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ThemeSummary {
    pub name: String,
    pub count: usize,
    /// +1 per positive comment touching the theme, -1 per negative, 0 per
    /// neutral.
    pub signed_sentiment: i64,
    pub top_words: Vec<WordCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AggregateSummary {
    pub word_cloud: Vec<WordCount>,
    pub sentiment: SentimentCounts,
    pub themes: Vec<ThemeSummary>,
}

// Counting table that remembers insertion order so equal counts rank by
// first appearance.
#[derive(Default)]
struct FreqTable {
    counts: HashMap<String, (usize, usize)>,
    next_rank: usize,
}

impl FreqTable {
    fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some((count, _)) => *count += 1,
            None => {
                self.counts.insert(token.to_string(), (1, self.next_rank));
                self.next_rank += 1;
            }
        }
    }

    fn top(self, limit: usize) -> Vec<WordCount> {
        let mut entries: Vec<(String, usize, usize)> = self
            .counts
            .into_iter()
            .map(|(text, (count, rank))| (text, count, rank))
            .collect();
        entries.sort_by_key(|(_, count, rank)| (Reverse(*count), *rank));
        entries
            .into_iter()
            .take(limit)
            .map(|(text, count, _)| WordCount { text, count })
            .collect()
    }
}

// Word-cloud view of a comment: tokenizer output minus negation words, which
// are useful classifier features but noise in a cloud.
fn cloud_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !NEGATION_WORDS.contains(t.as_str()))
        .collect()
}

/// Folds `(text, result)` pairs into an `AggregateSummary`. An empty input
/// yields an empty-but-valid summary. Themes are reported in the fixed
/// lexicon order; themes touched by no comment are omitted.
pub fn summarize<'a, I>(items: I) -> AggregateSummary
where
    I: IntoIterator<Item = (&'a str, &'a ClassificationResult)>,
{
    let mut cloud = FreqTable::default();
    let mut counts = SentimentCounts::default();
    let mut theme_counts: HashMap<&'static str, usize> = HashMap::new();
    let mut theme_signed: HashMap<&'static str, i64> = HashMap::new();
    let mut theme_words: HashMap<&'static str, FreqTable> = HashMap::new();

    for (text, result) in items {
        let tokens = cloud_tokens(text);
        for token in &tokens {
            cloud.add(token);
        }

        counts.total += 1;
        let signed = match result.sentiment {
            Sentiment::Positive => {
                counts.positive += 1;
                1
            }
            Sentiment::Negative => {
                counts.negative += 1;
                -1
            }
            Sentiment::Neutral => {
                counts.neutral += 1;
                0
            }
        };

        for (name, _) in THEMES {
            if !result.themes.contains(*name) {
                continue;
            }
            *theme_counts.entry(*name).or_insert(0) += 1;
            *theme_signed.entry(*name).or_insert(0) += signed;
            let table = theme_words.entry(*name).or_default();
            for token in &tokens {
                table.add(token);
            }
        }
    }

    let themes = THEMES
        .iter()
        .filter_map(|(name, _)| {
            let count = *theme_counts.get(name)?;
            Some(ThemeSummary {
                name: (*name).to_string(),
                count,
                signed_sentiment: *theme_signed.get(name).unwrap_or(&0),
                top_words: theme_words
                    .remove(name)
                    .unwrap_or_default()
                    .top(THEME_WORD_LIMIT),
            })
        })
        .collect();

    AggregateSummary {
        word_cloud: cloud.top(WORD_CLOUD_LIMIT),
        sentiment: counts,
        themes,
    }
}
