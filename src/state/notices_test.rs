use super::*;

#[test]
fn push_hands_out_increasing_ids() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Success, "saved".to_owned());
    let second = state.push(NoticeKind::Error, "failed".to_owned());
    assert!(second > first);
    assert_eq!(state.items.len(), 2);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Success, "one".to_owned());
    let second = state.push(NoticeKind::Success, "two".to_owned());
    state.dismiss(first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, second);
}

#[test]
fn dismissing_an_already_gone_notice_is_harmless() {
    let mut state = NoticeState::default();
    let id = state.push(NoticeKind::Error, "gone".to_owned());
    state.dismiss(id);
    state.dismiss(id);
    assert!(state.items.is_empty());
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = NoticeState::default();
    let first = state.push(NoticeKind::Success, "one".to_owned());
    state.dismiss(first);
    let second = state.push(NoticeKind::Success, "two".to_owned());
    assert_ne!(first, second);
}
