use leptos::prelude::*;

use super::*;
use crate::net::types::MessagePayload;
use crate::util::identity::Identity;

fn busy_state() -> ChatState {
    let identity = Identity::new("Bob");
    let mut state = ChatState::default();
    state.roster.replace(vec!["Alice".to_owned(), "Bob".to_owned()], &identity);
    state.typing.show("Alice");
    state.messages.push(
        MessagePayload { user: "Alice".to_owned(), text: "hi".to_owned(), ts: None },
        &identity,
    );
    state.draft = "hel".to_owned();
    state
}

#[test]
fn publish_copies_only_dirty_regions() {
    let signals = ChatSignals::new(&ChatState::default());
    let state = busy_state();

    signals.publish(&state, Dirty { draft: true, ..Dirty::default() });

    assert_eq!(signals.draft.get_untracked(), "hel");
    assert!(signals.roster.with_untracked(|roster| roster.entries().is_empty()));
    assert!(!signals.typing.with_untracked(|typing| typing.visible));
    assert!(signals.messages.with_untracked(MessageLog::is_empty));
}

#[test]
fn publish_brings_every_dirty_region_up_to_date() {
    let signals = ChatSignals::new(&ChatState::default());
    let state = busy_state();

    signals.publish(&state, Dirty { roster: true, typing: true, messages: true, draft: true });

    assert_eq!(signals.roster.get_untracked(), state.roster);
    assert_eq!(signals.typing.get_untracked(), state.typing);
    assert_eq!(signals.messages.get_untracked(), state.messages);
    assert_eq!(signals.draft.get_untracked(), state.draft);
}

#[test]
fn clean_input_publishes_nothing() {
    let initial = busy_state();
    let signals = ChatSignals::new(&initial);

    signals.publish(&ChatState::default(), Dirty::default());

    assert_eq!(signals.roster.get_untracked(), initial.roster);
    assert_eq!(signals.draft.get_untracked(), initial.draft);
}
