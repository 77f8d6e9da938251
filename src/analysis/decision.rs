// Hybrid decision engine: fuses the Naive Bayes prediction with the
// deterministic rule layer (compliance override, lexicon net score,
// phrase overrides).
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::classifier::{predict, ClassifierModel, Sentiment};
use super::lexicon::{
    COMPLIANCE_TOKENS, NEGATION_WORDS, NEGATIVE_PHRASES, NEGATIVE_WORDS, POSITIVE_PHRASES,
    POSITIVE_WORDS,
};
use super::themes::tag_themes;
use super::tokenize::tokenize;

/// Named tie-break rule: when a comment matches both a positive and a
/// negative phrase, the negative phrase wins because its scan runs last.
/// Preserved source behavior, not an accident of control flow.
pub const NEGATIVE_PHRASE_WINS_TIES: bool = true;

/// Classifier margins below this fall back to the lexicon net score.
const LOW_CONFIDENCE_MARGIN: f64 = 0.5;

/// Fixed strong margin reported by the compliance override.
const COMPLIANCE_MARGIN: f64 = 5.0;

/// Final per-comment classification with diagnostics. Carries no reference
/// back to the model; owned entirely by the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub sentiment: Sentiment,
    pub themes: BTreeSet<String>,
    pub confidence_margin: f64,
    pub rule_net_score: i32,
    pub method: String,
}

/// Sums +1 per positive-lexicon token and -1 per negative-lexicon token.
/// No negation inversion at this level.
pub fn rule_net_score(text: &str) -> i32 {
    net_score(&tokenize(text))
}

fn net_score(tokens: &[String]) -> i32 {
    tokens
        .iter()
        .map(|t| {
            if POSITIVE_WORDS.contains(t.as_str()) {
                1
            } else if NEGATIVE_WORDS.contains(t.as_str()) {
                -1
            } else {
                0
            }
        })
        .sum()
}

// Critical compliance check: a negation word together with a membership
// keyword means the member offer was skipped, which is negative regardless of
// the comment's overall tone.
fn compliance_violation(tokens: &[String]) -> bool {
    let negated = tokens.iter().any(|t| NEGATION_WORDS.contains(t.as_str()));
    let mentions_membership = tokens.iter().any(|t| COMPLIANCE_TOKENS.contains(t.as_str()));
    negated && mentions_membership
}

fn label_from_net(net: i32) -> Sentiment {
    match net.cmp(&0) {
        Ordering::Greater => Sentiment::Positive,
        Ordering::Less => Sentiment::Negative,
        Ordering::Equal => Sentiment::Neutral,
    }
}

/// Classifies one comment. Applied in strict order: empty short-circuit,
/// compliance override, Naive Bayes, low-confidence lexicon fallback, then
/// positive phrase scan followed by the negative phrase scan. Never fails on
/// any textual input.
pub fn decide(model: &ClassifierModel, text: &str) -> ClassificationResult {
    if text.trim().is_empty() {
        return ClassificationResult {
            sentiment: Sentiment::Neutral,
            themes: BTreeSet::new(),
            confidence_margin: 0.0,
            rule_net_score: 0,
            method: "empty".to_string(),
        };
    }

    let themes = tag_themes(text);
    let tokens = tokenize(text);

    if compliance_violation(&tokens) {
        return ClassificationResult {
            sentiment: Sentiment::Negative,
            themes,
            confidence_margin: COMPLIANCE_MARGIN,
            rule_net_score: 0,
            method: "compliance".to_string(),
        };
    }

    let prediction = predict(model, text);
    let net = net_score(&tokens);

    let mut sentiment = prediction.label;
    let mut method = "model";
    if prediction.margin < LOW_CONFIDENCE_MARGIN && sentiment != Sentiment::Neutral {
        sentiment = label_from_net(net);
        method = "rule_fallback";
    }

    let lowered = text.to_lowercase();
    let positive_hit = POSITIVE_PHRASES.iter().any(|p| lowered.contains(p));
    let negative_hit = NEGATIVE_PHRASES.iter().any(|p| lowered.contains(p));
    if positive_hit {
        sentiment = Sentiment::Positive;
        method = "phrase_positive";
    }
    if negative_hit && (NEGATIVE_PHRASE_WINS_TIES || !positive_hit) {
        sentiment = Sentiment::Negative;
        method = "phrase_negative";
    }

    ClassificationResult {
        sentiment,
        themes,
        confidence_margin: prediction.margin,
        rule_net_score: net,
        method: method.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::classifier::train;
    use crate::analysis::corpus::bundled_corpus;

    fn model() -> ClassifierModel {
        train(&bundled_corpus().unwrap())
    }

    #[test]
    fn test_empty_input_is_neutral() {
        let model = model();
        for text in ["", "   ", "\t\n"] {
            let result = decide(&model, text);
            assert_eq!(result.sentiment, Sentiment::Neutral);
            assert_eq!(result.confidence_margin, 0.0);
            assert_eq!(result.rule_net_score, 0);
            assert_eq!(result.method, "empty");
        }
    }

    #[test]
    fn test_compliance_override_beats_everything() {
        let model = model();
        // "sangat ramah" is a positive phrase, but the skipped member offer
        // short-circuits to negative before phrases are ever scanned.
        let result = decide(
            &model,
            "Retail Assistant tidak menanyakan member, tapi sangat ramah",
        );
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.method, "compliance");
        assert!(result.confidence_margin >= 5.0);
    }

    #[test]
    fn test_memberikan_does_not_trip_compliance() {
        let model = model();
        let result = decide(&model, "Kasir tidak memberikan senyum sama sekali");
        assert_ne!(result.method, "compliance");
    }

    #[test]
    fn test_verbatim_corpus_sentence_is_positive() {
        let model = model();
        let result = decide(&model, "Pelayanan sangat memuaskan, staf ramah dan membantu.");
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert!(result.themes.contains("Service"));
    }

    #[test]
    fn test_negative_phrase_forces_negative() {
        let model = model();
        let result = decide(&model, "Kasir tidak ramah dan lambat.");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.method, "phrase_negative");
        assert!(result.themes.contains("Service"));
    }

    #[test]
    fn test_hot_store_comment_is_negative() {
        let model = model();
        let text = "AC mati sehingga udara di dalam toko sangat panas.";
        let result = decide(&model, text);
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert!(result.themes.contains("Ambience"));
        // "mati" and "panas" both hit the negative lexicon
        assert!(result.rule_net_score < 0);
    }

    #[test]
    fn test_negative_phrase_wins_tie_against_positive_phrase() {
        let model = model();
        let result = decide(&model, "Pelayanan sangat memuaskan tapi kasir tidak ramah");
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.method, "phrase_negative");
    }

    #[test]
    fn test_decide_is_deterministic() {
        let model = model();
        let text = "Antrian panjang dan kasir lambat";
        let a = decide(&model, text);
        let b = decide(&model, text);
        assert_eq!(a.sentiment, b.sentiment);
        assert_eq!(a.confidence_margin, b.confidence_margin);
        assert_eq!(a.rule_net_score, b.rule_net_score);
        assert_eq!(a.method, b.method);
    }

    #[test]
    fn test_gibberish_still_yields_valid_label() {
        let model = model();
        let result = decide(&model, "zzz qqq xxx yyy");
        assert!(Sentiment::ALL.contains(&result.sentiment));
        assert!(result.confidence_margin.is_finite());
    }

    #[test]
    fn test_rule_net_score_counts_lexicon_hits() {
        // ramah +1, murah +1, mahal -1
        assert_eq!(rule_net_score("ramah murah mahal"), 1);
        assert_eq!(rule_net_score("kotor bau"), -2);
        assert_eq!(rule_net_score(""), 0);
    }

    #[test]
    fn test_label_from_net_sign() {
        assert_eq!(label_from_net(3), Sentiment::Positive);
        assert_eq!(label_from_net(-1), Sentiment::Negative);
        assert_eq!(label_from_net(0), Sentiment::Neutral);
    }
}
