use std::collections::HashSet;
use std::io::Read;

use crate::decode::{decode_to_string, DecodeError};

/// The set of words filtered out of a scan.
///
/// Entries are trimmed and lowercased but not normalized, so an entry such
/// as `don't` never matches the letters-only words a scan produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current set with the entries of `source`, one per line.
    ///
    /// The set is emptied before reading and stays empty if reading fails.
    pub fn load<R: Read>(&mut self, source: R) -> Result<usize, DecodeError> {
        self.words.clear();
        let text = decode_to_string(source)?;
        self.words.extend(text.split(is_line_break).filter_map(entry));
        Ok(self.words.len())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .filter_map(|line| entry(line.as_ref()))
                .collect(),
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}')
}

fn entry(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    if word.is_empty() {
        None
    } else {
        Some(word)
    }
}
