//! Named-event protocol spoken over the host socket.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines event names and payload DTOs, `parse` turns loosely-shaped
//! inbound JSON into typed events, and `channel` is the outbound seam the
//! reactor emits through.

pub mod channel;
pub mod parse;
pub mod types;
