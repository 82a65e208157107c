//! Sentiment: the polarity capability and the bundled lexicon scorer.
//!
//! The analyzer only relies on the output contract of a [`PolarityEstimator`]:
//! a polarity in [-1, 1], negative = negative sentiment, zero = neutral.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use crate::analyze::normalize::{normalize, tokenize};
use crate::error::AnalyzerError;

pub const DEFAULT_NEGATION_WINDOW: usize = 3;
pub const MAX_NEGATION_WINDOW: usize = 10;

/// Negated words flip sign and lose half their strength.
const NEGATION_FACTOR: f64 = -0.5;

static BUNDLED: Lazy<Lexicon> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    Lexicon::from_json_str(raw).expect("valid bundled sentiment lexicon")
});

/// Three-way label derived from the sign of the polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            Sentiment::Positive
        } else if polarity < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub label: Sentiment,
    pub polarity: f64,
}

impl SentimentResult {
    pub fn from_polarity(polarity: f64) -> Self {
        Self {
            label: Sentiment::from_polarity(polarity),
            polarity,
        }
    }
}

/// Anything that can turn (normalized) text into a polarity in [-1, 1].
pub trait PolarityEstimator: Send + Sync {
    fn estimate_polarity(&self, text: &str) -> Result<f64, AnalyzerError>;
}

#[derive(Debug, Deserialize)]
struct LexiconFile {
    words: HashMap<String, f64>,
    #[serde(default)]
    intensifiers: HashMap<String, f64>,
    #[serde(default)]
    negators: Vec<String>,
}

/// Averaging lexicon scorer.
///
/// Every token found in `words` contributes its polarity, scaled by an
/// intensifier directly before it and flipped/damped when a negator occurs
/// in the preceding `negation_window` tokens. The result is the mean of the
/// contributions, or 0.0 if no token was found.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negators: HashSet<String>,
    negation_window: usize,
}

impl Lexicon {
    /// Lexicon compiled into the binary.
    pub fn bundled() -> &'static Lexicon {
        &BUNDLED
    }

    pub fn from_json_str(raw: &str) -> Result<Self, AnalyzerError> {
        let file: LexiconFile = serde_json::from_str(raw)
            .map_err(|e| AnalyzerError::LexiconUnavailable(format!("invalid json: {e}")))?;

        let mut words = HashMap::with_capacity(file.words.len());
        for (k, v) in file.words {
            if !v.is_finite() || !(-1.0..=1.0).contains(&v) {
                return Err(AnalyzerError::LexiconUnavailable(format!(
                    "polarity of '{k}' out of range: {v}"
                )));
            }
            let key = lexicon_key(&k)?;
            if words.insert(key.clone(), v).is_some() {
                return Err(duplicate_key(&k, &key));
            }
        }

        let mut intensifiers = HashMap::with_capacity(file.intensifiers.len());
        for (k, v) in file.intensifiers {
            if !v.is_finite() || v <= 0.0 {
                return Err(AnalyzerError::LexiconUnavailable(format!(
                    "intensifier '{k}' must be a positive multiplier, got {v}"
                )));
            }
            let key = lexicon_key(&k)?;
            if intensifiers.insert(key.clone(), v).is_some() {
                return Err(duplicate_key(&k, &key));
            }
        }

        let negators = file
            .negators
            .iter()
            .map(|k| lexicon_key(k))
            .collect::<Result<HashSet<_>, _>>()?;

        Ok(Self {
            words,
            intensifiers,
            negators,
            negation_window: DEFAULT_NEGATION_WINDOW,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, AnalyzerError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AnalyzerError::LexiconUnavailable(format!("reading {}: {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    /// Window is capped at MAX_NEGATION_WINDOW.
    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window.min(MAX_NEGATION_WINDOW);
        self
    }

    pub fn negation_window(&self) -> usize {
        self.negation_window
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Lexicon score for a single token (None if unknown).
    #[inline]
    pub fn word_score(&self, w: &str) -> Option<f64> {
        self.words.get(w).copied()
    }

    fn is_negator(&self, tok: &str) -> bool {
        self.negators.contains(tok)
    }

    /// Infallible scoring; the text is normalized first, so raw input works too.
    pub fn polarity(&self, text: &str) -> f64 {
        let tokens = tokenize(&normalize(text));
        let mut sum = 0.0f64;
        let mut hits = 0usize;

        for (i, tok) in tokens.iter().enumerate() {
            let Some(base) = self.word_score(tok) else {
                continue;
            };

            let mut p = base;
            if i > 0 {
                if let Some(m) = self.intensifiers.get(tokens[i - 1].as_str()) {
                    p *= m;
                }
            }

            let negated =
                (1..=self.negation_window).any(|k| i >= k && self.is_negator(&tokens[i - k]));
            if negated {
                p *= NEGATION_FACTOR;
            }

            sum += p;
            hits += 1;
        }

        if hits == 0 {
            return 0.0;
        }
        (sum / hits as f64).clamp(-1.0, 1.0)
    }
}

impl PolarityEstimator for Lexicon {
    fn estimate_polarity(&self, text: &str) -> Result<f64, AnalyzerError> {
        Ok(self.polarity(text))
    }
}

fn lexicon_key(raw: &str) -> Result<String, AnalyzerError> {
    let key = normalize(raw);
    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return Err(AnalyzerError::LexiconUnavailable(format!(
            "lexicon entry '{raw}' is not a single token"
        )));
    }
    Ok(key.to_string())
}

/// Two source spellings that normalize to the same key would leave the
/// winning score up to map iteration order.
fn duplicate_key(raw: &str, key: &str) -> AnalyzerError {
    AnalyzerError::LexiconUnavailable(format!(
        "lexicon entry '{raw}' duplicates '{key}' after normalization"
    ))
}
