use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tagger_logging::{tagger_info, tagger_warn};

use crate::decode::DecodeError;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::render::{render_display, write_persisted};
use crate::scan::scan;
use crate::stopwords::StopWords;
use crate::table::TagTable;
use crate::types::TagError;

/// Owns the active stop words and the most recent tag table.
///
/// Each method is one shell action and runs to completion on the caller's
/// thread. Sources and sinks are only borrowed for the duration of a call.
#[derive(Debug, Default)]
pub struct TagSession {
    stop_words: StopWords,
    tags: TagTable,
}

impl TagSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stop words. Tags already counted are left as they are.
    pub fn set_stop_words<R: Read>(&mut self, source: R) -> Result<usize, TagError> {
        match self.stop_words.load(source) {
            Ok(count) => {
                tagger_info!("Loaded {} stop words", count);
                Ok(count)
            }
            Err(err) => {
                tagger_warn!("Failed to load stop words: {}", err);
                Err(err.into())
            }
        }
    }

    pub fn set_stop_words_from_path(&mut self, path: &Path) -> Result<usize, TagError> {
        match File::open(path) {
            Ok(file) => self.set_stop_words(file),
            Err(err) => {
                tagger_warn!("Failed to open stop words file {:?}: {}", path, err);
                self.stop_words.clear();
                Err(DecodeError::from(err).into())
            }
        }
    }

    /// Recount tags from `source` using the current stop words.
    ///
    /// Returns the number of distinct tags. On failure the table is emptied.
    pub fn scan_text<R: Read>(&mut self, source: R) -> Result<usize, TagError> {
        match scan(source, &self.stop_words, &mut self.tags) {
            Ok(summary) => {
                tagger_info!(
                    "Scanned {} tokens: {} tags, {} counted, {} stop words, {} rejected",
                    summary.tokens,
                    self.tags.len(),
                    summary.counted,
                    summary.stopped,
                    summary.rejected
                );
                Ok(self.tags.len())
            }
            Err(err) => {
                tagger_warn!("Failed to scan text: {}", err);
                self.tags.reset();
                Err(err.into())
            }
        }
    }

    pub fn scan_text_from_path(&mut self, path: &Path) -> Result<usize, TagError> {
        match File::open(path) {
            Ok(file) => self.scan_text(file),
            Err(err) => {
                tagger_warn!("Failed to open text file {:?}: {}", path, err);
                self.tags.reset();
                Err(DecodeError::from(err).into())
            }
        }
    }

    pub fn render_display(&self) -> String {
        render_display(&self.tags)
    }

    /// Write the persisted listing to `sink`.
    pub fn save_tags<W: Write>(&self, sink: W) -> Result<(), TagError> {
        if self.tags.is_empty() {
            return Err(TagError::NothingToSave);
        }
        write_persisted(&self.tags, sink).map_err(|err| {
            tagger_warn!("Failed to write tags: {}", err);
            TagError::SinkUnwritable(PersistError::Io(err))
        })
    }

    /// Atomically write the persisted listing to `path`.
    pub fn save_tags_to_path(&self, path: &Path) -> Result<PathBuf, TagError> {
        if self.tags.is_empty() {
            return Err(TagError::NothingToSave);
        }
        let writer = AtomicFileWriter::new(path.to_path_buf());
        match writer.write_with(|out| write_persisted(&self.tags, out)) {
            Ok(written) => {
                tagger_info!("Saved {} tags to {:?}", self.tags.len(), written);
                Ok(written)
            }
            Err(err) => {
                tagger_warn!("Failed to save tags to {:?}: {}", path, err);
                Err(err.into())
            }
        }
    }

    /// Forget both the stop words and the tags.
    pub fn clear(&mut self) {
        self.stop_words.clear();
        self.tags.reset();
    }

    pub fn tags(&self) -> &TagTable {
        &self.tags
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}
