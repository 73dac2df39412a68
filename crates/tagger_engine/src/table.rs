use std::collections::BTreeMap;

use crate::normalize::Word;

/// Occurrence counts keyed by normalized word.
///
/// Iteration is always in ascending code-point order of the words,
/// whatever order they were bumped in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagTable {
    counts: BTreeMap<Word, u64>,
}

impl TagTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }

    /// Count one more occurrence of `word`.
    pub fn bump(&mut self, word: Word) {
        *self.counts.entry(word).or_insert(0) += 1;
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Word, u64)> {
        self.counts.iter().map(|(word, count)| (word, *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Returns false, leaving the table untouched, if `word` is already present.
    pub(crate) fn insert_new(&mut self, word: Word, count: u64) -> bool {
        debug_assert!(count > 0);
        if self.counts.contains_key(&word) {
            return false;
        }
        self.counts.insert(word, count);
        true
    }
}
