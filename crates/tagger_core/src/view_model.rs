use crate::state::{Notice, Phase};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub file_label: String,
    pub stop_words_label: String,
    /// Display-format tag listing.
    pub listing: String,
    pub tag_count: usize,
    /// Stop words changed since the listing was computed.
    pub stale: bool,
    pub notice: Option<Notice>,
    pub dirty: bool,
}
