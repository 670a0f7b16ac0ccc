use super::*;

#[test]
fn message_class_carries_kind_modifier() {
    assert_eq!(
        form_message_class(MessageKind::Success),
        "form-message form-message--success"
    );
    assert_eq!(
        form_message_class(MessageKind::Error),
        "form-message form-message--error"
    );
}

#[test]
fn message_style_differs_by_kind_and_fades() {
    let success = form_message_style(MessageKind::Success);
    let error = form_message_style(MessageKind::Error);
    assert!(success.contains("#155724"));
    assert!(error.contains("#721c24"));
    assert!(success.contains("transition: opacity 0.3s"));
}

#[test]
fn reveal_index_ignores_garbage() {
    assert_eq!(parse_reveal_index(Some("3")), Some(3));
    assert_eq!(parse_reveal_index(Some(" 12 ")), Some(12));
    assert_eq!(parse_reveal_index(Some("x")), None);
    assert_eq!(parse_reveal_index(None), None);
}
