// The bundled training corpus is a plain JSON data asset, embedded at compile
// time and parsed once at startup. Keeping it out of the code path means the
// corpus can be swapped or versioned without touching classifier logic.
use anyhow::{Context, Result};

use super::classifier::TrainingExample;

static RAW_CORPUS: &str = include_str!("../../data/training_corpus.json");

/// Parses the bundled corpus. Label validation is structural: any entry whose
/// label is not positive/negative/neutral makes this fail instead of training
/// a phantom class.
pub fn bundled_corpus() -> Result<Vec<TrainingExample>> {
    serde_json::from_str(RAW_CORPUS).context("bundled training corpus is malformed")
}
