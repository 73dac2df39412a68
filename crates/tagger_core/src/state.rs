use std::path::{Path, PathBuf};

use crate::view_model::AppViewModel;

/// Where the session stands in the select-stop-words / select-text / save cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Initial,
    StopLoaded,
    TextLoaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A one-line message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
    pub detail: Option<String>,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            text: text.into(),
            detail: None,
        }
    }

    pub fn error(text: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            text: text.into(),
            detail: Some(detail.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    phase: Phase,
    text_file: Option<PathBuf>,
    stop_words_file: Option<PathBuf>,
    stop_word_count: Option<usize>,
    tag_count: usize,
    listing: String,
    stale: bool,
    notice: Option<Notice>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            file_label: match &self.text_file {
                Some(path) => format!("Tags from: {}", file_name(path)),
                None => "No text file selected".to_string(),
            },
            stop_words_label: match (&self.stop_words_file, self.stop_word_count) {
                (Some(path), Some(count)) => format!("Stop words: {} ({count})", file_name(path)),
                _ => "No stop words loaded".to_string(),
            },
            listing: self.listing.clone(),
            tag_count: self.tag_count,
            stale: self.stale,
            notice: self.notice.clone(),
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_tags(&self) -> bool {
        self.tag_count > 0
    }

    /// Returns whether a redraw was pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn clear_notice(&mut self) {
        self.notice = None;
    }

    pub(crate) fn set_notice(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.dirty = true;
    }

    pub(crate) fn choose_text_file(&mut self, path: PathBuf) {
        self.text_file = Some(path);
        self.dirty = true;
    }

    pub(crate) fn choose_stop_words_file(&mut self, path: PathBuf) {
        self.stop_words_file = Some(path);
        self.dirty = true;
    }

    pub(crate) fn apply_stop_words(&mut self, count: Option<usize>) {
        self.stop_word_count = count;
        if count.is_some() {
            self.phase = Phase::StopLoaded;
        } else if self.phase == Phase::StopLoaded && !self.has_tags() {
            self.phase = Phase::Initial;
        }
        // Tags counted under the previous stop words are now out of date.
        if self.has_tags() {
            self.stale = true;
        }
        self.dirty = true;
    }

    pub(crate) fn apply_scan(&mut self, tag_count: usize, listing: String) {
        self.phase = Phase::TextLoaded;
        self.tag_count = tag_count;
        self.listing = listing;
        self.stale = false;
        self.notice = None;
        self.dirty = true;
    }

    pub(crate) fn discard_tags(&mut self) {
        self.phase = if self.stop_word_count.is_some() {
            Phase::StopLoaded
        } else {
            Phase::Initial
        };
        self.tag_count = 0;
        self.listing.clear();
        self.stale = false;
        self.dirty = true;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self {
            dirty: true,
            ..Self::default()
        };
    }
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
