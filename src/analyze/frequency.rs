// src/analyze/frequency.rs
//! Word frequency table with first-appearance ordering.

use serde::Serialize;
use std::collections::HashMap;

/// Modal word reported when there are no tokens at all.
pub const NO_MODAL_WORD: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

/// Token -> count. Entries are kept in order of first appearance, which is
/// both the display order and the modal tie-break order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for t in tokens {
            table.add(t.as_ref());
        }
        table
    }

    pub fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&i) => self.entries[i].count += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push(WordCount {
                    word: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn get(&self, token: &str) -> Option<u32> {
        self.index.get(token).map(|&i| self.entries[i].count)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (== number of tokens counted).
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count as usize).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[WordCount] {
        &self.entries
    }

    /// Highest count wins; on a tie the token seen first wins.
    /// Returns `None` for an empty table.
    pub fn modal(&self) -> Option<&WordCount> {
        let mut best: Option<&WordCount> = None;
        for e in &self.entries {
            // strict '>' keeps the earliest entry on ties
            let better = match best {
                None => true,
                Some(b) => e.count > b.count,
            };
            if better {
                best = Some(e);
            }
        }
        best
    }

    /// Modal word, or the "N/A" sentinel when there are no tokens.
    pub fn modal_word(&self) -> String {
        self.modal()
            .map(|e| e.word.clone())
            .unwrap_or_else(|| NO_MODAL_WORD.to_string())
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_keeps_first_seen_order() {
        let t = FrequencyTable::from_tokens(["b", "a", "b", "c", "a", "b"]);
        let words: Vec<&str> = t.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["b", "a", "c"]);
        assert_eq!(t.get("b"), Some(3));
        assert_eq!(t.get("a"), Some(2));
        assert_eq!(t.get("zzz"), None);
        assert_eq!(t.total(), 6);
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn modal_tie_goes_to_first_appearance() {
        let t = FrequencyTable::from_tokens(["x", "y", "y", "x"]);
        assert_eq!(t.modal_word(), "x");

        let t = FrequencyTable::from_tokens(["y", "x", "x", "y"]);
        assert_eq!(t.modal_word(), "y");
    }

    #[test]
    fn modal_prefers_strictly_higher_count() {
        let t = FrequencyTable::from_tokens(["a", "b", "b"]);
        assert_eq!(t.modal_word(), "b");
    }

    #[test]
    fn empty_table_uses_sentinel() {
        let t = FrequencyTable::new();
        assert!(t.is_empty());
        assert!(t.modal().is_none());
        assert_eq!(t.modal_word(), NO_MODAL_WORD);
    }

    #[test]
    fn serializes_as_ordered_list() {
        let t = FrequencyTable::from_tokens(["hola", "mundo", "hola"]);
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(
            v,
            serde_json::json!([
                {"word": "hola", "count": 2},
                {"word": "mundo", "count": 1}
            ])
        );
    }
}
