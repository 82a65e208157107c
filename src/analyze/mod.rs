// src/analyze/mod.rs
//! Analysis entry: normalization -> tokens -> frequency table -> modal word -> sentiment.
//!
//! Everything here is pure. Repeated calls with the same text give equal
//! results and no state survives a call.

pub mod frequency;
pub mod normalize;

use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use crate::error::AnalyzerError;
use crate::sentiment::{Lexicon, PolarityEstimator, SentimentResult};
use crate::telemetry::anon_hash;

pub use frequency::{FrequencyTable, WordCount, NO_MODAL_WORD};
pub use normalize::{normalize, tokenize, PUNCTUATION};

/// Word statistics of one input, before sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStats {
    pub normalized: String,
    pub tokens: Vec<String>,
    pub frequencies: FrequencyTable,
}

impl TextStats {
    pub fn from_text(text: &str) -> Self {
        let normalized = normalize(text);
        let tokens = tokenize(&normalized);
        let frequencies = FrequencyTable::from_tokens(&tokens);
        Self {
            normalized,
            tokens,
            frequencies,
        }
    }

    fn into_result(self, sentiment: SentimentResult) -> AnalysisResult {
        AnalysisResult {
            total_words: self.tokens.len(),
            modal_word: self.frequencies.modal_word(),
            frequencies: self.frequencies,
            sentiment,
        }
    }
}

/// Output of one analysis. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub total_words: usize,
    pub frequencies: FrequencyTable,
    pub modal_word: String,
    pub sentiment: SentimentResult,
}

/// Analyze with the bundled lexicon. Never fails.
pub fn analyze(text: &str) -> AnalysisResult {
    let stats = TextStats::from_text(text);
    let polarity = Lexicon::bundled().polarity(&stats.normalized);
    stats.into_result(SentimentResult::from_polarity(polarity))
}

/// Analyzer with a pluggable polarity estimator.
#[derive(Clone)]
pub struct TextAnalyzer {
    estimator: Arc<dyn PolarityEstimator>,
}

impl Default for TextAnalyzer {
    fn default() -> Self {
        Self::new(Lexicon::bundled().clone())
    }
}

impl std::fmt::Debug for TextAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAnalyzer").finish_non_exhaustive()
    }
}

impl TextAnalyzer {
    pub fn new<E: PolarityEstimator + 'static>(estimator: E) -> Self {
        Self {
            estimator: Arc::new(estimator),
        }
    }

    /// Word statistics always succeed; the error only reports an estimator
    /// that failed or returned NaN. Finite out-of-range polarities are clamped.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalyzerError> {
        let started = Instant::now();
        let stats = TextStats::from_text(text);

        let raw = self.estimator.estimate_polarity(&stats.normalized)?;
        if raw.is_nan() {
            return Err(AnalyzerError::SentimentUnavailable(
                "estimator returned NaN".into(),
            ));
        }
        let polarity = raw.clamp(-1.0, 1.0);

        debug!(
            target: "analyzer",
            id = %anon_hash(text),
            tokens = stats.tokens.len(),
            distinct = stats.frequencies.len(),
            polarity,
            elapsed_us = started.elapsed().as_micros() as u64,
            "analysis done"
        );

        Ok(stats.into_result(SentimentResult::from_polarity(polarity)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::Sentiment;

    struct Fixed(f64);

    impl PolarityEstimator for Fixed {
        fn estimate_polarity(&self, _text: &str) -> Result<f64, AnalyzerError> {
            Ok(self.0)
        }
    }

    struct Down;

    impl PolarityEstimator for Down {
        fn estimate_polarity(&self, _text: &str) -> Result<f64, AnalyzerError> {
            Err(AnalyzerError::SentimentUnavailable("model not loaded".into()))
        }
    }

    #[test]
    fn empty_input_degrades_gracefully() {
        let r = analyze("");
        assert_eq!(r.total_words, 0);
        assert!(r.frequencies.is_empty());
        assert_eq!(r.modal_word, NO_MODAL_WORD);
        assert_eq!(r.sentiment.polarity, 0.0);
        assert_eq!(r.sentiment.label, Sentiment::Neutral);
    }

    #[test]
    fn default_analyzer_matches_free_function() {
        let text = "What a wonderful, wonderful day!";
        let a = TextAnalyzer::default().analyze(text).unwrap();
        assert_eq!(a, analyze(text));
    }

    #[test]
    fn estimator_sees_normalized_text() {
        struct Echo;
        impl PolarityEstimator for Echo {
            fn estimate_polarity(&self, text: &str) -> Result<f64, AnalyzerError> {
                assert_eq!(text, "hola mundo");
                Ok(0.0)
            }
        }
        TextAnalyzer::new(Echo).analyze("Hola, MUNDO!").unwrap();
    }

    #[test]
    fn out_of_range_polarity_is_clamped() {
        let r = TextAnalyzer::new(Fixed(3.0)).analyze("x").unwrap();
        assert_eq!(r.sentiment.polarity, 1.0);
        let r = TextAnalyzer::new(Fixed(-7.5)).analyze("x").unwrap();
        assert_eq!(r.sentiment.polarity, -1.0);
        assert_eq!(r.sentiment.label, Sentiment::Negative);
    }

    #[test]
    fn nan_and_failures_are_unavailable() {
        let e = TextAnalyzer::new(Fixed(f64::NAN)).analyze("x").unwrap_err();
        assert!(matches!(e, AnalyzerError::SentimentUnavailable(_)));
        let e = TextAnalyzer::new(Down).analyze("x").unwrap_err();
        assert!(matches!(e, AnalyzerError::SentimentUnavailable(_)));
    }
}
