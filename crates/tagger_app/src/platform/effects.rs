use tagger_core::{Effect, Msg};
use tagger_engine::TagSession;
use tagger_logging::tagger_info;

/// Runs core effects against the tag session and reports results as messages.
#[derive(Default)]
pub struct EffectRunner {
    session: TagSession,
}

impl EffectRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        effects
            .into_iter()
            .filter_map(|effect| self.run_one(effect))
            .collect()
    }

    fn run_one(&mut self, effect: Effect) -> Option<Msg> {
        let msg = match effect {
            Effect::LoadStopWords { path } => {
                tagger_info!("LoadStopWords path={:?}", path);
                match self.session.set_stop_words_from_path(&path) {
                    Ok(count) => Msg::StopWordsLoaded { count },
                    Err(err) => Msg::StopWordsFailed {
                        reason: err.to_string(),
                    },
                }
            }
            Effect::ScanText { path } => {
                tagger_info!("ScanText path={:?}", path);
                match self.session.scan_text_from_path(&path) {
                    Ok(tag_count) => Msg::TextScanned {
                        tag_count,
                        listing: self.session.render_display(),
                    },
                    Err(err) => Msg::TextScanFailed {
                        reason: err.to_string(),
                    },
                }
            }
            Effect::SaveTags { path } => {
                tagger_info!("SaveTags path={:?}", path);
                match self.session.save_tags_to_path(&path) {
                    Ok(written) => Msg::TagsSaved { path: written },
                    Err(err) => Msg::SaveFailed {
                        reason: err.to_string(),
                    },
                }
            }
            Effect::ClearSession => {
                tagger_info!("ClearSession");
                self.session.clear();
                return None;
            }
        };
        Some(msg)
    }
}
