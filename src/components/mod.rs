//! Widget region components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component reads its own region signal from the `ChatSignals` context
//! and forwards user intents to the reactor through the `InputSender`
//! context. Element ids match the roles a host page styles: `user-list`,
//! `typing-indicator`, `message-panel`, `message-form`, `message-input`.

pub mod message_form;
pub mod message_panel;
pub mod typing_indicator;
pub mod user_list;
