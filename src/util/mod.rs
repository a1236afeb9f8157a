//! Utility helpers shared across the reactor and components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate timer bookkeeping and browser/environment concerns
//! from the reactor and component logic to keep both testable.

pub mod debounce;
pub mod identity;
pub mod scroll;
pub mod storage;
