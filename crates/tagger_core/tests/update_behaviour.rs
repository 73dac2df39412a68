use std::path::PathBuf;
use std::sync::Once;

use pretty_assertions::assert_eq;
use tagger_core::{update, AppState, Effect, Msg, Notice, Phase, Severity};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tagger_logging::initialize_for_tests);
}

fn scanned(state: AppState, path: &str, tag_count: usize, listing: &str) -> AppState {
    let (state, _) = update(state, Msg::TextFileChosen(PathBuf::from(path)));
    let (state, _) = update(
        state,
        Msg::TextScanned {
            tag_count,
            listing: listing.to_string(),
        },
    );
    state
}

fn stop_words_loaded(state: AppState, path: &str, count: usize) -> AppState {
    let (state, _) = update(state, Msg::StopWordsFileChosen(PathBuf::from(path)));
    let (state, _) = update(state, Msg::StopWordsLoaded { count });
    state
}

#[test]
fn initial_view_has_nothing_selected() {
    init_logging();
    let view = AppState::new().view();
    assert_eq!(view.phase, Phase::Initial);
    assert_eq!(view.file_label, "No text file selected");
    assert_eq!(view.stop_words_label, "No stop words loaded");
    assert_eq!(view.listing, "");
    assert_eq!(view.notice, None);
    assert!(!view.dirty);
}

#[test]
fn choosing_text_file_emits_scan_and_updates_label() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::TextFileChosen(PathBuf::from("/docs/story.txt")),
    );
    assert_eq!(
        effects,
        vec![Effect::ScanText {
            path: PathBuf::from("/docs/story.txt"),
        }]
    );
    assert_eq!(state.view().file_label, "Tags from: story.txt");
    assert!(state.view().dirty);
}

#[test]
fn choosing_stop_words_emits_load() {
    init_logging();
    let (_, effects) = update(
        AppState::new(),
        Msg::StopWordsFileChosen(PathBuf::from("stop.txt")),
    );
    assert_eq!(
        effects,
        vec![Effect::LoadStopWords {
            path: PathBuf::from("stop.txt"),
        }]
    );
}

#[test]
fn loading_stop_words_reports_count() {
    init_logging();
    let state = stop_words_loaded(AppState::new(), "stop.txt", 3);
    let view = state.view();
    assert_eq!(view.phase, Phase::StopLoaded);
    assert_eq!(view.stop_words_label, "Stop words: stop.txt (3)");
    assert_eq!(view.notice, Some(Notice::info("Loaded 3 stop words.")));
}

#[test]
fn scan_result_moves_to_text_loaded() {
    init_logging();
    let state = scanned(AppState::new(), "a.txt", 2, "apple : 3\nbanana : 1\n");
    let view = state.view();
    assert_eq!(view.phase, Phase::TextLoaded);
    assert_eq!(view.tag_count, 2);
    assert_eq!(view.listing, "apple : 3\nbanana : 1\n");
    assert!(!view.stale);
}

#[test]
fn new_stop_words_keep_tags_but_mark_them_stale() {
    init_logging();
    let state = scanned(AppState::new(), "a.txt", 1, "the : 1\n");
    let state = stop_words_loaded(state, "stop.txt", 1);
    let view = state.view();
    assert_eq!(view.phase, Phase::StopLoaded);
    assert_eq!(view.listing, "the : 1\n");
    assert!(view.stale);

    let (_, effects) = update(state, Msg::SaveRequested(PathBuf::from("out.txt")));
    assert_eq!(
        effects,
        vec![Effect::SaveTags {
            path: PathBuf::from("out.txt"),
        }]
    );
}

#[test]
fn rescan_clears_staleness() {
    init_logging();
    let state = scanned(AppState::new(), "a.txt", 1, "the : 1\n");
    let state = stop_words_loaded(state, "stop.txt", 1);
    let state = scanned(state, "a.txt", 0, "");
    assert!(!state.view().stale);
    assert_eq!(state.view().phase, Phase::TextLoaded);
}

#[test]
fn save_without_tags_is_a_noop_with_notice() {
    init_logging();
    for state in [
        AppState::new(),
        stop_words_loaded(AppState::new(), "stop.txt", 2),
        scanned(AppState::new(), "empty.txt", 0, ""),
    ] {
        let phase = state.phase();
        let (next, effects) = update(state, Msg::SaveRequested(PathBuf::from("out.txt")));
        assert!(effects.is_empty());
        assert_eq!(next.phase(), phase);
        assert_eq!(
            next.view().notice,
            Some(Notice::info("No tags to save. Choose a text file first."))
        );
    }
}

#[test]
fn failed_scan_discards_tags() {
    init_logging();
    let state = stop_words_loaded(AppState::new(), "stop.txt", 2);
    let state = scanned(state, "a.txt", 2, "x : 1\ny : 1\n");
    let (state, _) = update(state, Msg::TextFileChosen(PathBuf::from("bad.txt")));
    let (state, _) = update(
        state,
        Msg::TextScanFailed {
            reason: "invalid UTF-8 near byte 3".into(),
        },
    );

    let view = state.view();
    assert_eq!(view.phase, Phase::StopLoaded);
    assert_eq!(view.file_label, "Tags from: bad.txt");
    assert_eq!(view.listing, "");
    assert!(!state.has_tags());
    let notice = view.notice.unwrap();
    assert_eq!(notice.severity, Severity::Error);
    assert_eq!(notice.text, "Error reading text file.");
    assert_eq!(notice.detail.as_deref(), Some("invalid UTF-8 near byte 3"));
}

#[test]
fn failed_stop_words_fall_back_to_initial() {
    init_logging();
    let state = stop_words_loaded(AppState::new(), "stop.txt", 2);
    let (state, _) = update(state, Msg::StopWordsFileChosen(PathBuf::from("gone.txt")));
    let (state, _) = update(
        state,
        Msg::StopWordsFailed {
            reason: "not found".into(),
        },
    );
    let view = state.view();
    assert_eq!(view.phase, Phase::Initial);
    assert_eq!(view.stop_words_label, "No stop words loaded");
    assert_eq!(
        view.notice.map(|n| n.text),
        Some("Error reading stop words file.".to_string())
    );
}

#[test]
fn save_outcomes_are_reported() {
    init_logging();
    let state = scanned(AppState::new(), "a.txt", 1, "fox : 1\n");
    let (state, _) = update(
        state,
        Msg::TagsSaved {
            path: PathBuf::from("/tmp/out/tags.txt"),
        },
    );
    assert_eq!(state.view().notice, Some(Notice::info("Tags saved to: tags.txt")));

    let (state, _) = update(
        state,
        Msg::SaveFailed {
            reason: "permission denied".into(),
        },
    );
    assert_eq!(
        state.view().notice,
        Some(Notice::error("Error writing tags file.", "permission denied"))
    );
    assert_eq!(state.view().listing, "fox : 1\n");
}

#[test]
fn clear_resets_everything_and_emits_effect() {
    init_logging();
    let state = stop_words_loaded(AppState::new(), "stop.txt", 2);
    let state = scanned(state, "a.txt", 1, "fox : 1\n");
    let (mut state, effects) = update(state, Msg::ClearRequested);

    assert_eq!(effects, vec![Effect::ClearSession]);
    assert!(state.consume_dirty());
    assert_eq!(state, AppState::new());
}

#[test]
fn consume_dirty_clears_flag() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::ShowRequested);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn next_user_action_clears_previous_notice() {
    init_logging();
    let state = stop_words_loaded(AppState::new(), "stop.txt", 3);
    assert!(state.view().notice.is_some());

    let (state, effects) = update(state, Msg::ShowRequested);
    assert!(effects.is_empty());
    assert_eq!(state.view().notice, None);

    let state = scanned(state, "a.txt", 1, "fox : 1\n");
    let (state, _) = update(state, Msg::SaveRequested(PathBuf::from("out.txt")));
    let (state, _) = update(
        state,
        Msg::SaveFailed {
            reason: "permission denied".into(),
        },
    );
    let (state, _) = update(state, Msg::StopWordsFileChosen(PathBuf::from("stop.txt")));
    assert_eq!(state.view().notice, None);
}

#[test]
fn effect_results_are_not_user_actions() {
    assert!(Msg::ShowRequested.is_user_action());
    assert!(Msg::SaveRequested(PathBuf::from("out.txt")).is_user_action());
    assert!(!Msg::StopWordsLoaded { count: 1 }.is_user_action());
    assert!(!Msg::TextScanFailed {
        reason: "gone".into(),
    }
    .is_user_action());
}
