//! View state rendered by the widget components.
//!
//! DESIGN
//! ======
//! State is split by widget region (`roster`, `typing`, `messages`) and
//! gathered into [`chat::ChatState`], which the reactor owns. After each
//! input the host copies only the changed regions into their view signals.

pub mod chat;
pub mod messages;
pub mod roster;
pub mod typing;
