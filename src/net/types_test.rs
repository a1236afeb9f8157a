use super::*;

#[test]
fn event_names_match_wire_names() {
    assert_eq!(EventName::UserList.as_str(), "user_list");
    assert_eq!(EventName::Typing.as_str(), "typing");
    assert_eq!(EventName::Message.as_str(), "message");
}

#[test]
fn outbound_typing_serializes_user_only() {
    let event = OutboundEvent::Typing(TypingPayload { user: "Bob".to_owned() });
    assert_eq!(event.name(), EventName::Typing);
    let json = serde_json::to_value(&event).expect("typing payload should serialize");
    assert_eq!(json, serde_json::json!({ "user": "Bob" }));
}

#[test]
fn outbound_message_omits_missing_timestamp() {
    let event = OutboundEvent::Message(MessagePayload {
        user: "Bob".to_owned(),
        text: "hi".to_owned(),
        ts: None,
    });
    assert_eq!(event.name(), EventName::Message);
    let json = serde_json::to_value(&event).expect("message payload should serialize");
    assert_eq!(json, serde_json::json!({ "user": "Bob", "text": "hi" }));
}

#[test]
fn outbound_message_keeps_timestamp_when_present() {
    let event = OutboundEvent::Message(MessagePayload {
        user: "Bob".to_owned(),
        text: "hi".to_owned(),
        ts: Some(12.5),
    });
    let json = serde_json::to_value(&event).expect("message payload should serialize");
    assert_eq!(json, serde_json::json!({ "user": "Bob", "text": "hi", "ts": 12.5 }));
}
