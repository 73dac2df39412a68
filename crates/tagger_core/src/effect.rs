use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadStopWords { path: PathBuf },
    ScanText { path: PathBuf },
    SaveTags { path: PathBuf },
    ClearSession,
}
