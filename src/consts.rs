//! Shared constants for the chat widget.

// ── Timers ──────────────────────────────────────────────────────

/// Quiet period after the last keystroke before a `typing` event is emitted.
pub const TYPING_EMIT_DELAY_MS: u64 = 350;

/// How long a remote "is typing" banner stays up without a refresh.
pub const TYPING_HIDE_DELAY_MS: u64 = 2000;

// ── Identity ────────────────────────────────────────────────────

/// Identity used when neither configuration, page global, nor storage has one.
pub const DEFAULT_IDENTITY: &str = "You";

/// `window` property a host page may set to name the local user.
pub const IDENTITY_GLOBAL: &str = "currentUsername";

/// `localStorage` key holding a previously chosen display name.
pub const IDENTITY_STORAGE_KEY: &str = "username";

/// Suffix appended to the local user's roster entry.
pub const SELF_SUFFIX: &str = " (you)";
