//! Survey comment analysis: a Naive Bayes sentiment classifier fused with a
//! deterministic lexicon/rule layer, plus multi-label theme tagging and batch
//! aggregation. Train once with [`train`] and the bundled corpus, then call
//! [`decide`] per comment; classification is a pure function of the immutable
//! model and the text, safe to run in parallel.

pub mod analysis;

pub use analysis::aggregate::{summarize, AggregateSummary};
pub use analysis::classifier::{train, ClassifierModel, Sentiment, TrainingExample};
pub use analysis::corpus::bundled_corpus;
pub use analysis::decision::{decide, ClassificationResult};
pub use analysis::themes::tag_themes;
