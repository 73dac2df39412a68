use crate::state::file_name;
use crate::{AppState, Effect, Msg, Notice};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    // A notice describes the previous action only.
    if msg.is_user_action() {
        state.clear_notice();
    }

    let effects = match msg {
        Msg::TextFileChosen(path) => {
            state.choose_text_file(path.clone());
            vec![Effect::ScanText { path }]
        }
        Msg::StopWordsFileChosen(path) => {
            state.choose_stop_words_file(path.clone());
            vec![Effect::LoadStopWords { path }]
        }
        Msg::SaveRequested(path) => {
            if state.has_tags() {
                vec![Effect::SaveTags { path }]
            } else {
                state.set_notice(Notice::info("No tags to save. Choose a text file first."));
                Vec::new()
            }
        }
        Msg::ShowRequested => {
            state.mark_dirty();
            Vec::new()
        }
        Msg::ClearRequested => {
            state.reset();
            vec![Effect::ClearSession]
        }
        Msg::StopWordsLoaded { count } => {
            state.apply_stop_words(Some(count));
            state.set_notice(Notice::info(format!("Loaded {count} stop words.")));
            Vec::new()
        }
        Msg::StopWordsFailed { reason } => {
            state.apply_stop_words(None);
            state.set_notice(Notice::error("Error reading stop words file.", reason));
            Vec::new()
        }
        Msg::TextScanned { tag_count, listing } => {
            state.apply_scan(tag_count, listing);
            Vec::new()
        }
        Msg::TextScanFailed { reason } => {
            state.discard_tags();
            state.set_notice(Notice::error("Error reading text file.", reason));
            Vec::new()
        }
        Msg::TagsSaved { path } => {
            state.set_notice(Notice::info(format!(
                "Tags saved to: {}",
                file_name(&path)
            )));
            Vec::new()
        }
        Msg::SaveFailed { reason } => {
            state.set_notice(Notice::error("Error writing tags file.", reason));
            Vec::new()
        }
    };

    (state, effects)
}
