use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User chose a text file to extract tags from.
    TextFileChosen(PathBuf),
    /// User chose a stop-word list.
    StopWordsFileChosen(PathBuf),
    /// User asked to save the tags to the given file.
    SaveRequested(PathBuf),
    /// User asked to see the current listing again.
    ShowRequested,
    /// User asked to forget everything loaded so far.
    ClearRequested,
    StopWordsLoaded {
        count: usize,
    },
    StopWordsFailed {
        reason: String,
    },
    TextScanned {
        tag_count: usize,
        listing: String,
    },
    TextScanFailed {
        reason: String,
    },
    TagsSaved {
        path: PathBuf,
    },
    SaveFailed {
        reason: String,
    },
}

impl Msg {
    /// True for messages that come straight from the user rather than
    /// reporting the result of an effect.
    pub fn is_user_action(&self) -> bool {
        matches!(
            self,
            Msg::TextFileChosen(_)
                | Msg::StopWordsFileChosen(_)
                | Msg::SaveRequested(_)
                | Msg::ShowRequested
                | Msg::ClearRequested
        )
    }
}
