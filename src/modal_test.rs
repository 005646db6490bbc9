use super::*;

#[test]
fn starts_closed_and_empty() {
    let modal = ModalState::new();
    assert!(!modal.open);
    assert!(modal.title.is_empty());
    assert!(modal.body_html.is_empty());
}

#[test]
fn open_sets_content_and_locks_scroll() {
    let mut modal = ModalState::new();
    let overflow = modal.open("X", "Y", "");
    assert!(modal.open);
    assert_eq!(modal.title, "X");
    assert_eq!(modal.body_html, "Y");
    assert_eq!(overflow, SCROLL_LOCK_OVERFLOW);
}

#[test]
fn open_then_close_restores_prior_overflow() {
    let mut modal = ModalState::new();
    modal.open("X", "Y", "scroll");
    assert_eq!(modal.close().as_deref(), Some("scroll"));
    assert!(!modal.open);
}

#[test]
fn open_then_close_restores_unset_overflow() {
    let mut modal = ModalState::new();
    modal.open("X", "Y", "");
    assert_eq!(modal.close().as_deref(), Some(""));
}

#[test]
fn second_open_overwrites_content_and_keeps_saved_overflow() {
    let mut modal = ModalState::new();
    modal.open("A", "a body", "auto");
    // The body is already locked when the second trigger fires.
    modal.open("B", "b body", SCROLL_LOCK_OVERFLOW);
    assert_eq!(modal.title, "B");
    assert_eq!(modal.body_html, "b body");
    assert_eq!(modal.close().as_deref(), Some("auto"));
}

#[test]
fn close_when_closed_is_noop() {
    let mut modal = ModalState::new();
    assert_eq!(modal.close(), None);
    modal.open("X", "Y", "");
    modal.close();
    assert_eq!(modal.close(), None);
}

#[test]
fn escape_closes_only_while_open() {
    let mut modal = ModalState::new();
    assert!(!modal.closes_on_key("Escape"));
    modal.open("X", "Y", "");
    assert!(modal.closes_on_key("Escape"));
    assert!(!modal.closes_on_key("Enter"));
}

#[test]
fn trigger_content_uses_defaults() {
    assert_eq!(
        trigger_content(None, None),
        (DEFAULT_TITLE.to_owned(), DEFAULT_CONTENT.to_owned())
    );
    assert_eq!(
        trigger_content(Some("T".to_owned()), None),
        ("T".to_owned(), DEFAULT_CONTENT.to_owned())
    );
}
