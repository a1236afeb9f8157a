//! Restartable single-shot timers expressed as generation tokens.
//!
//! The reactor never owns a real timer. Each restart arms a fresh token and
//! hands the host a [`Timer`] request; when the host's sleep elapses it feeds
//! the token back. Only the most recently armed token fires, so a restart
//! implicitly cancels whatever the host already has in flight.

#[cfg(test)]
#[path = "debounce_test.rs"]
mod debounce_test;

use std::time::Duration;

/// Which reactor timer a [`Timer`] request belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Trailing-edge debounce before emitting a local `typing` event.
    TypingEmit,
    /// Auto-hide of the remote "is typing" banner.
    TypingHide,
}

/// A request for the host to call back after `delay`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub token: u64,
    pub delay: Duration,
}

/// Generation counter for one restartable timer.
#[derive(Clone, Debug, Default)]
pub struct Debounce {
    generation: u64,
    armed: Option<u64>,
}

impl Debounce {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a new generation, invalidating any earlier one.
    pub fn restart(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.armed = Some(self.generation);
        self.generation
    }

    /// Arm a new generation and wrap it into a host timer request.
    pub fn schedule(&mut self, kind: TimerKind, delay: Duration) -> Timer {
        let token = self.restart();
        Timer { kind, token, delay }
    }

    /// Consume `token` if it is the armed generation.
    ///
    /// Returns `false` for stale or already-fired tokens.
    pub fn fire(&mut self, token: u64) -> bool {
        if self.armed == Some(token) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}
