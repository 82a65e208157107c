// src/analyze/normalize.rs
//! Normalization and tokenization.
//!
//! Normalization = Unicode lowercase + removal of the fixed ASCII punctuation
//! set below. Whitespace is kept as the only token separator, so "don't"
//! becomes the single token "dont" and "well-known" becomes "wellknown".

/// Characters stripped during normalization (the 32 ASCII punctuation chars).
/// Locale independent: nothing outside this set is ever removed.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

#[inline]
pub fn is_punctuation(c: char) -> bool {
    // Same set as PUNCTUATION.
    c.is_ascii_punctuation()
}

/// Lowercase the whole input, then drop punctuation.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    out.extend(lowered.chars().filter(|c| !is_punctuation(*c)));
    out
}

/// Split already normalized text on runs of whitespace.
pub fn tokenize(normalized: &str) -> Vec<String> {
    normalized.split_whitespace().map(str::to_string).collect()
}
