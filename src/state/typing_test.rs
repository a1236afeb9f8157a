use super::*;

#[test]
fn indicator_starts_hidden() {
    let indicator = TypingIndicator::default();
    assert!(!indicator.visible);
    assert!(indicator.text.is_empty());
}

#[test]
fn show_sets_text_and_visibility() {
    let mut indicator = TypingIndicator::default();
    indicator.show("Alice");
    assert_eq!(indicator.text, "Alice is typing...");
    assert!(indicator.visible);
}

#[test]
fn later_typer_overwrites_text() {
    let mut indicator = TypingIndicator::default();
    indicator.show("Alice");
    indicator.show("Carol");
    assert_eq!(indicator.text, "Carol is typing...");
}

#[test]
fn hide_keeps_last_text() {
    let mut indicator = TypingIndicator::default();
    indicator.show("Alice");
    indicator.hide();
    assert!(!indicator.visible);
    assert_eq!(indicator.text, "Alice is typing...");
}
