use super::*;

fn edit(id: &str) -> DialogMode {
    DialogMode::Edit { id: id.to_owned() }
}

#[test]
fn default_is_closed() {
    let state = DialogState::default();
    assert!(!state.is_open());
    assert!(state.mode().is_none());
}

#[test]
fn open_then_close() {
    let mut state = DialogState::default();
    state.open(DialogMode::Create);
    assert!(state.is_open());
    assert_eq!(state.mode(), Some(&DialogMode::Create));
    state.close();
    assert_eq!(state, DialogState::Closed);
}

#[test]
fn begin_submit_only_from_open() {
    let mut state = DialogState::default();
    assert_eq!(state.begin_submit(), None);

    state.open(edit("g1"));
    assert_eq!(state.begin_submit(), Some(edit("g1")));
    assert!(state.is_submitting());
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    let mut state = DialogState::default();
    state.open(DialogMode::Delete { id: "b1".to_owned() });
    let first = state.begin_submit();
    let second = state.begin_submit();
    assert!(first.is_some());
    assert_eq!(second, None);
}

#[test]
fn close_ignored_while_submitting() {
    let mut state = DialogState::default();
    state.open(DialogMode::Create);
    state.begin_submit();
    state.close();
    assert!(state.is_submitting());
}

#[test]
fn open_ignored_while_submitting() {
    let mut state = DialogState::default();
    state.open(DialogMode::Create);
    state.begin_submit();
    state.open(edit("other"));
    assert_eq!(state, DialogState::Submitting(DialogMode::Create));
}

#[test]
fn finish_success_closes() {
    let mut state = DialogState::default();
    state.open(DialogMode::Create);
    state.begin_submit();
    state.finish(true);
    assert_eq!(state, DialogState::Closed);
}

#[test]
fn finish_failure_keeps_dialog_open_in_same_mode() {
    let mut state = DialogState::default();
    state.open(edit("g1"));
    state.begin_submit();
    state.finish(false);
    assert_eq!(state, DialogState::Open(edit("g1")));
}

#[test]
fn finish_without_submission_is_noop() {
    let mut state = DialogState::default();
    state.open(DialogMode::Create);
    state.finish(true);
    assert_eq!(state, DialogState::Open(DialogMode::Create));
}

#[test]
fn save_enabled_for_unchanged_edit_without_dirty_requirement() {
    let state = DialogState::Open(edit("g1"));
    assert!(save_enabled(&state, false, &"a", &"a"));
}

#[test]
fn save_disabled_for_unchanged_edit_when_dirty_required() {
    let state = DialogState::Open(edit("r1"));
    assert!(!save_enabled(&state, true, &"a", &"a"));
    assert!(save_enabled(&state, true, &"a", &"b"));
}

#[test]
fn save_enabled_for_create_regardless_of_dirty_rule() {
    let state = DialogState::Open(DialogMode::Create);
    assert!(save_enabled(&state, true, &"a", &"a"));
}

#[test]
fn save_disabled_while_submitting_or_closed() {
    assert!(!save_enabled(&DialogState::Submitting(DialogMode::Create), false, &1, &2));
    assert!(!save_enabled(&DialogState::Closed, false, &1, &2));
}
