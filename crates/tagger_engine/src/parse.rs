use crate::normalize::Word;
use crate::table::TagTable;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {reason}")]
pub struct ParseError {
    /// 1-based line number.
    pub line: usize,
    pub reason: ParseErrorReason,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorReason {
    #[error("expected `word count`")]
    MissingCount,
    #[error("`{0}` is not a normalized word")]
    InvalidWord(String),
    #[error("`{0}` is not a positive count")]
    InvalidCount(String),
    #[error("duplicate word `{0}`")]
    Duplicate(String),
}

/// Read a saved tag listing back into a table.
///
/// Accepts either line ending and skips blank lines.
pub fn parse_persisted(text: &str) -> Result<TagTable, ParseError> {
    let mut table = TagTable::new();
    for (index, raw) in text.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            continue;
        }
        let fail = |reason| ParseError {
            line: index + 1,
            reason,
        };

        let (word, count) = line
            .split_once(' ')
            .ok_or_else(|| fail(ParseErrorReason::MissingCount))?;
        let word = Word::parse(word)
            .ok_or_else(|| fail(ParseErrorReason::InvalidWord(word.to_string())))?;
        let count = count
            .parse::<u64>()
            .ok()
            .filter(|count| *count > 0)
            .ok_or_else(|| fail(ParseErrorReason::InvalidCount(count.to_string())))?;

        let name = word.as_str().to_string();
        if !table.insert_new(word, count) {
            return Err(fail(ParseErrorReason::Duplicate(name)));
        }
    }
    Ok(table)
}
