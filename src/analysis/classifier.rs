// Naive Bayes sentiment classifier with Laplace (add-one) smoothing.
// Training is a pure function producing an immutable model value; the model
// is built once at startup and shared read-only across all classification
// calls, which makes batch classification embarrassingly parallel.
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

use super::tokenize::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labeled training comment. The label deserializes into `Sentiment`, so
/// a corpus carrying any unknown label fails to load instead of silently
/// growing the class set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    pub label: Sentiment,
}

/// Frequency tables derived from the training corpus. Immutable after
/// `train`; counts are plain non-negative integers and the vocabulary is the
/// union of every token seen across all classes.
#[derive(Debug, Clone)]
pub struct ClassifierModel {
    class_docs: HashMap<Sentiment, usize>,
    class_word_totals: HashMap<Sentiment, usize>,
    word_counts: HashMap<Sentiment, HashMap<String, usize>>,
    vocabulary: HashSet<String>,
    total_docs: usize,
}

impl ClassifierModel {
    pub fn document_count(&self, label: Sentiment) -> usize {
        self.class_docs.get(&label).copied().unwrap_or(0)
    }

    pub fn word_count(&self, label: Sentiment, token: &str) -> usize {
        self.word_counts
            .get(&label)
            .and_then(|m| m.get(token))
            .copied()
            .unwrap_or(0)
    }

    pub fn total_documents(&self) -> usize {
        self.total_docs
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Builds the frequency tables by simple counting: one document count per
/// example, one word count per token occurrence. Deterministic and
/// order-independent.
pub fn train(corpus: &[TrainingExample]) -> ClassifierModel {
    let mut class_docs: HashMap<Sentiment, usize> = HashMap::new();
    let mut class_word_totals: HashMap<Sentiment, usize> = HashMap::new();
    let mut word_counts: HashMap<Sentiment, HashMap<String, usize>> = HashMap::new();
    let mut vocabulary: HashSet<String> = HashSet::new();

    for example in corpus {
        *class_docs.entry(example.label).or_insert(0) += 1;
        let counts = word_counts.entry(example.label).or_default();
        for token in tokenize(&example.text) {
            vocabulary.insert(token.clone());
            *counts.entry(token).or_insert(0) += 1;
            *class_word_totals.entry(example.label).or_insert(0) += 1;
        }
    }

    ClassifierModel {
        class_docs,
        class_word_totals,
        word_counts,
        vocabulary,
        total_docs: corpus.len(),
    }
}

/// Laplace-smoothed log score per class:
/// `ln((docs_c + 1)/(total + 3))` prior plus
/// `ln((count + 1)/(class_total + |V|))` per input token. The +1 smoothing
/// keeps every score finite even when no input token appears in the
/// vocabulary.
pub fn log_scores(model: &ClassifierModel, text: &str) -> HashMap<Sentiment, f64> {
    let tokens = tokenize(text);
    let mut scores = HashMap::with_capacity(Sentiment::ALL.len());

    for &label in Sentiment::ALL.iter() {
        let docs = model.document_count(label);
        let prior_num = (docs + 1) as f64;
        let prior_den = (model.total_docs + Sentiment::ALL.len()) as f64;
        let mut score = (prior_num / prior_den).ln();

        let class_total = model.class_word_totals.get(&label).copied().unwrap_or(0);
        let denom = ((class_total + model.vocabulary.len()) as f64).max(1.0);
        for token in &tokens {
            let count = model.word_count(label, token);
            score += ((count + 1) as f64 / denom).ln();
        }

        scores.insert(label, score);
    }

    scores
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub label: Sentiment,
    /// Gap between the top two log scores. A relative certainty measure
    /// (log-odds), not a calibrated probability.
    pub margin: f64,
}

/// Argmax over `log_scores` with the top-two gap as the confidence margin.
/// Ties resolve to the earlier label in `Sentiment::ALL` order so results
/// never depend on hash-map iteration order.
pub fn predict(model: &ClassifierModel, text: &str) -> Prediction {
    let scores = log_scores(model, text);

    let mut best = Sentiment::ALL[0];
    let mut best_score = scores[&best];
    let mut second_score = f64::NEG_INFINITY;

    for &label in Sentiment::ALL.iter().skip(1) {
        let score = scores[&label];
        if score > best_score {
            second_score = best_score;
            best = label;
            best_score = score;
        } else if score > second_score {
            second_score = score;
        }
    }

    Prediction {
        label: best,
        margin: best_score - second_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_corpus() -> Vec<TrainingExample> {
        vec![
            TrainingExample {
                text: "bagus mantap keren".to_string(),
                label: Sentiment::Positive,
            },
            TrainingExample {
                text: "jelek buruk parah".to_string(),
                label: Sentiment::Negative,
            },
            TrainingExample {
                text: "datang melihat".to_string(),
                label: Sentiment::Neutral,
            },
        ]
    }

    #[test]
    fn test_train_counts() {
        let model = train(&tiny_corpus());
        assert_eq!(model.total_documents(), 3);
        assert_eq!(model.document_count(Sentiment::Positive), 1);
        assert_eq!(model.document_count(Sentiment::Negative), 1);
        assert_eq!(model.document_count(Sentiment::Neutral), 1);
        assert_eq!(model.word_count(Sentiment::Positive, "bagus"), 1);
        assert_eq!(model.word_count(Sentiment::Negative, "bagus"), 0);
        assert_eq!(model.vocabulary_len(), 8);
    }

    #[test]
    fn test_train_is_order_independent() {
        let corpus = tiny_corpus();
        let mut reversed = corpus.clone();
        reversed.reverse();

        let a = train(&corpus);
        let b = train(&reversed);
        assert_eq!(a.total_documents(), b.total_documents());
        assert_eq!(a.vocabulary_len(), b.vocabulary_len());
        for &label in Sentiment::ALL.iter() {
            assert_eq!(a.document_count(label), b.document_count(label));
            assert_eq!(a.word_count(label, "bagus"), b.word_count(label, "bagus"));
        }
    }

    #[test]
    fn test_predict_separable_corpus() {
        let model = train(&tiny_corpus());
        let pred = predict(&model, "bagus keren");
        assert_eq!(pred.label, Sentiment::Positive);
        assert!(pred.margin > 0.0);
    }

    #[test]
    fn test_unseen_tokens_stay_finite() {
        let model = train(&tiny_corpus());
        let scores = log_scores(&model, "zzz xxx qqq");
        for (_, score) in scores {
            assert!(score.is_finite());
        }
        let pred = predict(&model, "zzz xxx qqq");
        assert!(pred.margin.is_finite());
        assert!(Sentiment::ALL.contains(&pred.label));
    }

    #[test]
    fn test_empty_corpus_does_not_divide_by_zero() {
        let model = train(&[]);
        let scores = log_scores(&model, "bagus");
        for (_, score) in scores {
            assert!(score.is_finite());
        }
    }

    #[test]
    fn test_predict_is_deterministic() {
        let model = train(&tiny_corpus());
        let a = predict(&model, "jelek parah");
        let b = predict(&model, "jelek parah");
        assert_eq!(a.label, b.label);
        assert_eq!(a.margin, b.margin);
    }

    #[test]
    fn test_unknown_label_rejected() {
        let raw = r#"[{"text": "apa saja", "label": "mixed"}]"#;
        let parsed: Result<Vec<TrainingExample>, _> = serde_json::from_str(raw);
        assert!(parsed.is_err());
    }
}
