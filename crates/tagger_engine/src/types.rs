use crate::decode::DecodeError;
use crate::persist::PersistError;

/// Failures surfaced to the shell. None of them is fatal.
#[derive(Debug, thiserror::Error)]
pub enum TagError {
    #[error("source unreadable: {0}")]
    SourceUnreadable(#[from] DecodeError),
    #[error("sink unwritable: {0}")]
    SinkUnwritable(#[from] PersistError),
    #[error("nothing to save")]
    NothingToSave,
}

/// Token accounting for one scan.
///
/// `tokens == rejected + stopped + counted`, and `counted` equals the sum
/// of counts in the resulting table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Whitespace-delimited tokens read from the source.
    pub tokens: u64,
    /// Tokens without a single letter.
    pub rejected: u64,
    /// Tokens whose normalized form is a stop word.
    pub stopped: u64,
    /// Tokens added to the table.
    pub counted: u64,
}
