use super::*;

#[test]
fn push_notice_sets_text_and_bumps_sequence() {
    let mut state = UiState::default();
    state.push_notice(NoticeKind::Success, "Tip added successfully");
    assert_eq!(state.notice_seq, 1);
    let notice = state.notice.clone().unwrap();
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.text, "Tip added successfully");
}

#[test]
fn clear_notice_if_ignores_stale_sequence() {
    let mut state = UiState::default();
    state.push_notice(NoticeKind::Error, "first");
    let stale = state.notice_seq;
    state.push_notice(NoticeKind::Error, "second");
    state.clear_notice_if(stale);
    assert!(state.notice.is_some());
    state.clear_notice_if(state.notice_seq);
    assert!(state.notice.is_none());
}

#[test]
fn repeated_message_still_bumps_sequence() {
    let mut state = UiState::default();
    state.push_notice(NoticeKind::Error, "Failed to fetch tips");
    state.push_notice(NoticeKind::Error, "Failed to fetch tips");
    assert_eq!(state.notice_seq, 2);
}
