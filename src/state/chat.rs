use super::messages::MessageLog;
use super::roster::RosterState;
use super::typing::TypingIndicator;

/// Snapshot of everything the widget renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub roster: RosterState,
    pub typing: TypingIndicator,
    pub messages: MessageLog,
    /// Current contents of the message input.
    pub draft: String,
}
