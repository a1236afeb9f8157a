//! Widget configuration passed by the host page at mount time.
//!
//! All fields are optional in the incoming options object; missing fields
//! take the defaults below. Features are decided once here and never
//! re-evaluated against the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{TYPING_EMIT_DELAY_MS, TYPING_HIDE_DELAY_MS};
use crate::net::types::EventName;

/// Error returned by [`ReactorConfig::from_value`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The options object does not match the expected shape.
    #[error("invalid chat options: {0}")]
    Parse(#[from] serde_json::Error),
    /// A timer delay was configured as zero.
    #[error("`{0}` must be greater than zero")]
    ZeroDelay(&'static str),
}

/// Which widget regions and handlers are active.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Features {
    /// Render the user list and subscribe to `user_list`.
    pub roster: bool,
    /// Emit debounced `typing` events and show remote typers.
    pub typing: bool,
    /// Scroll the message panel on child insertions/removals.
    pub auto_scroll: bool,
    /// Subscribe to `message` and render messages.
    pub render_messages: bool,
    /// Intercept form submission and emit `message`.
    pub submit_messages: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            roster: true,
            typing: true,
            auto_scroll: true,
            render_messages: true,
            submit_messages: true,
        }
    }
}

impl Features {
    /// Inbound events the host should subscribe to.
    #[must_use]
    pub fn inbound_events(&self) -> Vec<EventName> {
        [
            (self.roster, EventName::UserList),
            (self.typing, EventName::Typing),
            (self.render_messages, EventName::Message),
        ]
        .into_iter()
        .filter_map(|(enabled, name)| enabled.then_some(name))
        .collect()
    }

    /// Whether the message panel element is rendered at all.
    #[must_use]
    pub fn message_panel(&self) -> bool {
        self.render_messages || self.auto_scroll
    }

    /// Shape of the input area, if one is rendered.
    ///
    /// Without submission there is no `<form>` wrapper, so pressing Enter
    /// cannot trigger a native submit and page reload.
    #[must_use]
    pub fn message_form(&self) -> Option<FormKind> {
        if self.submit_messages {
            Some(FormKind::Submitting)
        } else if self.typing {
            Some(FormKind::InputOnly)
        } else {
            None
        }
    }
}

/// How the message input is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    /// `<form id="message-form">` that intercepts submit.
    Submitting,
    /// A bare input that only drives the typing debounce.
    InputOnly,
}

/// Reactor and host settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactorConfig {
    pub typing_emit_delay_ms: u64,
    pub typing_hide_delay_ms: u64,
    /// Explicit local identity; overrides page globals and storage.
    pub identity: Option<String>,
    /// Id of the host element to mount into; `<body>` when absent.
    pub mount_id: Option<String>,
    /// Id of an existing message panel on the page. When set the widget
    /// renders into and observes that element instead of its own panel.
    pub message_panel_id: Option<String>,
    pub features: Features,
}

impl Default for ReactorConfig {
    fn default() -> Self {
        Self {
            typing_emit_delay_ms: TYPING_EMIT_DELAY_MS,
            typing_hide_delay_ms: TYPING_HIDE_DELAY_MS,
            identity: None,
            mount_id: None,
            message_panel_id: None,
            features: Features::default(),
        }
    }
}

impl ReactorConfig {
    /// Build a config from a host options value; `null` yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for mistyped fields and
    /// [`ConfigError::ZeroDelay`] when either delay is zero.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let config = if value.is_null() {
            Self::default()
        } else {
            serde_json::from_value::<Self>(value)?
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.typing_emit_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay("typing_emit_delay_ms"));
        }
        if self.typing_hide_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay("typing_hide_delay_ms"));
        }
        Ok(())
    }

    /// Whether the widget renders its own `#message-panel`.
    #[must_use]
    pub fn renders_own_panel(&self) -> bool {
        self.features.message_panel() && self.message_panel_id.is_none()
    }

    /// Id of the page's existing message panel to attach to, if any.
    #[must_use]
    pub fn host_panel_id(&self) -> Option<&str> {
        if self.features.message_panel() {
            self.message_panel_id.as_deref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn typing_emit_delay(&self) -> Duration {
        Duration::from_millis(self.typing_emit_delay_ms)
    }

    #[must_use]
    pub fn typing_hide_delay(&self) -> Duration {
        Duration::from_millis(self.typing_hide_delay_ms)
    }
}
