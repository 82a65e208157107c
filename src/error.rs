//! Library error type.
//!
//! Text statistics never fail; only the sentiment side can, and then it must
//! be reported as such instead of passing for a neutral text.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzerError {
    /// The lexicon could not be read or did not validate.
    #[error("sentiment lexicon unavailable: {0}")]
    LexiconUnavailable(String),

    /// The polarity estimator failed or broke its output contract.
    #[error("sentiment analysis unavailable: {0}")]
    SentimentUnavailable(String),
}
