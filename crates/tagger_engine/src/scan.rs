use std::io::Read;

use tagger_logging::tagger_trace;

use crate::decode::DecodeError;
use crate::normalize::normalize;
use crate::stopwords::StopWords;
use crate::table::TagTable;
use crate::token::Tokens;
use crate::types::ScanSummary;

/// Rebuild `table` from the tokens of `source`, skipping stop words.
///
/// Stop words are matched against the normalized form, so `The`, `the`
/// and `THE.` are all filtered by a `the` entry. On a read error the table
/// keeps whatever was counted before the failure; callers discard it.
pub fn scan<R: Read>(
    source: R,
    stop_words: &StopWords,
    table: &mut TagTable,
) -> Result<ScanSummary, DecodeError> {
    table.reset();
    let mut summary = ScanSummary::default();

    for token in Tokens::new(source) {
        let token = token?;
        summary.tokens += 1;

        let Some(word) = normalize(&token) else {
            tagger_trace!("rejected token {:?}", token);
            summary.rejected += 1;
            continue;
        };
        if stop_words.contains(word.as_str()) {
            tagger_trace!("stop word {}", word);
            summary.stopped += 1;
            continue;
        }
        table.bump(word);
        summary.counted += 1;
    }

    Ok(summary)
}
