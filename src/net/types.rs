//! Event names and payload DTOs for the chat socket.
//!
//! DESIGN
//! ======
//! Payload shapes mirror what the chat server sends and accepts, so outbound
//! payloads serialize to exactly `{ "user": .. }` and `{ "user": .., "text": .. }`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Event names the widget subscribes to or emits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventName {
    /// Full roster replacement (inbound only).
    UserList,
    /// Someone is typing (inbound and outbound).
    Typing,
    /// A chat message (inbound and outbound).
    Message,
}

impl EventName {
    /// Wire name used with the socket's `on`/`emit`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserList => "user_list",
            Self::Typing => "typing",
            Self::Message => "message",
        }
    }
}

/// Payload of a `typing` event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingPayload {
    pub user: String,
}

/// Payload of a `message` event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub user: String,
    pub text: String,
    /// Server timestamp, when the server provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<f64>,
}

/// A decoded inbound event.
#[derive(Clone, Debug, PartialEq)]
pub enum InboundEvent {
    UserList(Vec<String>),
    Typing(TypingPayload),
    Message(MessagePayload),
}

/// An event the reactor emits through its [`Channel`](super::channel::Channel).
///
/// Serializes as the bare payload; the event name travels separately.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutboundEvent {
    Typing(TypingPayload),
    Message(MessagePayload),
}

impl OutboundEvent {
    #[must_use]
    pub fn name(&self) -> EventName {
        match self {
            Self::Typing(_) => EventName::Typing,
            Self::Message(_) => EventName::Message,
        }
    }
}
