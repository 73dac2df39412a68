use std::borrow::Borrow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// Anything outside general category L (Lu, Ll, Lt, Lm, Lo).
static NON_LETTERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\P{L}+").expect("non-letter pattern compiles"));

/// A non-empty run of lowercase letters.
///
/// Only [`normalize`] and [`Word::parse`] construct values, so every `Word`
/// holds letters (general category L) in their lowercase form and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word(String);

impl Word {
    /// Accepts `text` only when it is already in normalized form.
    pub fn parse(text: &str) -> Option<Self> {
        normalize(text).filter(|word| word.0 == text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Keep the letters of `token`, lowercased, and drop everything else.
///
/// A letter is a character of general category L. Digits, punctuation,
/// symbols, marks and letter-numbers are dropped, and the letters on either
/// side are fused: `don't` becomes `dont`. Returns `None` when no letter
/// survives.
pub fn normalize(token: &str) -> Option<Word> {
    let word: String = NON_LETTERS
        .replace_all(token, "")
        .chars()
        .map(simple_lowercase)
        .collect();
    if word.is_empty() {
        None
    } else {
        Some(Word(word))
    }
}

// One-to-one mapping only: `İ` becomes `i`, not `i` + combining dot.
fn simple_lowercase(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}
