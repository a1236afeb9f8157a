//! Append-only log of rendered chat messages.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use crate::net::types::MessagePayload;
use crate::util::identity::Identity;

/// Who wrote a message, relative to the local user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Authorship {
    SelfAuthored,
    Other,
}

impl Authorship {
    /// CSS classes for the message node.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::SelfAuthored => "message self",
            Self::Other => "message other",
        }
    }
}

/// A message as rendered in the panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Local arrival sequence; used as the render key.
    pub seq: u64,
    pub user: String,
    /// Body text, rendered as a text node and never as markup.
    pub text: String,
    pub ts: Option<f64>,
    pub authorship: Authorship,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MessageLog {
    items: Vec<ChatMessage>,
    next_seq: u64,
}

impl MessageLog {
    /// Append one message in arrival order and return it.
    pub fn push(&mut self, payload: MessagePayload, identity: &Identity) -> &ChatMessage {
        let authorship = if identity.is(&payload.user) {
            Authorship::SelfAuthored
        } else {
            Authorship::Other
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.items.push(ChatMessage {
            seq,
            user: payload.user,
            text: payload.text,
            ts: payload.ts,
            authorship,
        });
        &self.items[self.items.len() - 1]
    }

    /// Append the messages `source` has that this copy lacks.
    ///
    /// Both logs are append-only, so only the tail past `next_seq` is cloned.
    pub fn catch_up(&mut self, source: &MessageLog) {
        let start = source.items.partition_point(|msg| msg.seq < self.next_seq);
        self.items.extend_from_slice(&source.items[start..]);
        self.next_seq = self.next_seq.max(source.next_seq);
    }

    #[must_use]
    pub fn items(&self) -> &[ChatMessage] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
