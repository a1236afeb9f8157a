//! Browser-free chat reactor.
//!
//! `ReactorCore` owns the widget's view state and its two restartable timers,
//! and talks to the server only through an injected [`Channel`]. The host
//! feeds every [`ReactorInput`] through one queue, so handlers never
//! interleave. Each input reports which view regions changed and may ask the
//! host to schedule one [`Timer`].
//!
//! TRADE-OFFS
//! ==========
//! Timer requests are fire-and-forget on the host side. Restarting a timer
//! does not cancel the host's pending sleep, it only bumps the generation so
//! the stale wake-up is ignored here.

#[cfg(test)]
#[path = "reactor_test.rs"]
mod reactor_test;

use serde_json::Value;

use crate::config::{Features, ReactorConfig};
use crate::net::channel::Channel;
use crate::net::parse::parse_inbound;
use crate::net::types::{EventName, InboundEvent, MessagePayload, OutboundEvent, TypingPayload};
use crate::state::chat::ChatState;
use crate::util::debounce::{Debounce, Timer, TimerKind};
use crate::util::identity::Identity;

/// Everything that can drive the reactor.
#[derive(Clone, Debug, PartialEq)]
pub enum ReactorInput {
    /// Raw payload delivered by the socket for a subscribed event.
    Inbound { event: EventName, payload: Value },
    /// The message input changed to this value.
    Draft(String),
    /// The message form was submitted.
    Submit,
    /// A previously requested timer elapsed.
    TimerFired(Timer),
}

/// View regions touched by one input; the host republishes only these.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dirty {
    pub roster: bool,
    pub typing: bool,
    pub messages: bool,
    pub draft: bool,
}

impl Dirty {
    #[must_use]
    pub fn any(self) -> bool {
        self.roster || self.typing || self.messages || self.draft
    }
}

/// Result of [`ReactorCore::apply`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Applied {
    pub dirty: Dirty,
    pub timer: Option<Timer>,
}

/// What a submit attempt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submission is handled elsewhere.
    Disabled,
    /// The trimmed draft was empty.
    Empty,
    /// A `message` event was emitted and the draft cleared.
    Sent,
}

pub struct ReactorCore<C> {
    channel: C,
    identity: Identity,
    config: ReactorConfig,
    state: ChatState,
    typing_emit: Debounce,
    typing_hide: Debounce,
    dirty: Dirty,
}

impl<C: Channel> ReactorCore<C> {
    pub fn new(channel: C, identity: Identity, config: ReactorConfig) -> Self {
        Self {
            channel,
            identity,
            config,
            state: ChatState::default(),
            typing_emit: Debounce::new(),
            typing_hide: Debounce::new(),
            dirty: Dirty::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &ChatState {
        &self.state
    }

    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    #[must_use]
    pub fn features(&self) -> Features {
        self.config.features
    }

    /// Dispatch one input, reporting the regions it changed and any timer
    /// the host must schedule.
    pub fn apply(&mut self, input: ReactorInput) -> Applied {
        let timer = self.dispatch(input);
        Applied { dirty: std::mem::take(&mut self.dirty), timer }
    }

    fn dispatch(&mut self, input: ReactorInput) -> Option<Timer> {
        match input {
            ReactorInput::Inbound { event, payload } => self.handle_raw(event, &payload),
            ReactorInput::Draft(text) => self.on_draft(text),
            ReactorInput::Submit => {
                self.submit();
                None
            }
            ReactorInput::TimerFired(timer) => {
                self.fire(timer);
                None
            }
        }
    }

    /// Decode and dispatch an inbound payload, dropping malformed ones.
    pub fn handle_raw(&mut self, event: EventName, payload: &Value) -> Option<Timer> {
        match parse_inbound(event, payload) {
            Ok(inbound) => self.handle_inbound(inbound),
            Err(err) => {
                log::debug!("dropping inbound event: {err}");
                None
            }
        }
    }

    pub fn handle_inbound(&mut self, event: InboundEvent) -> Option<Timer> {
        match event {
            InboundEvent::UserList(names) => {
                self.on_user_list(names);
                None
            }
            InboundEvent::Typing(payload) => self.on_remote_typing(&payload),
            InboundEvent::Message(payload) => {
                self.on_message(payload);
                None
            }
        }
    }

    /// Replace the roster.
    pub fn on_user_list(&mut self, names: Vec<String>) {
        if !self.config.features.roster {
            return;
        }
        self.state.roster.replace(names, &self.identity);
        self.dirty.roster = true;
    }

    /// Show a remote typer and (re)arm the auto-hide.
    ///
    /// Notifications about the local user are ignored.
    pub fn on_remote_typing(&mut self, payload: &TypingPayload) -> Option<Timer> {
        if !self.config.features.typing || payload.user.is_empty() || self.identity.is(&payload.user) {
            return None;
        }
        self.state.typing.show(&payload.user);
        self.dirty.typing = true;
        Some(self.typing_hide.schedule(TimerKind::TypingHide, self.config.typing_hide_delay()))
    }

    /// Render an inbound message and clear the typing banner.
    pub fn on_message(&mut self, payload: MessagePayload) {
        if !self.config.features.render_messages {
            return;
        }
        self.render_message(payload);
        self.typing_hide.cancel();
        if self.state.typing.visible {
            self.state.typing.hide();
            self.dirty.typing = true;
        }
    }

    /// Append one message node to the panel.
    pub fn render_message(&mut self, payload: MessagePayload) {
        let msg = self.state.messages.push(payload, &self.identity);
        log::trace!("rendered message #{} from {}", msg.seq, msg.user);
        self.dirty.messages = true;
    }

    /// Record the input value and restart the typing debounce.
    pub fn on_draft(&mut self, text: String) -> Option<Timer> {
        if self.state.draft != text {
            self.state.draft = text;
            self.dirty.draft = true;
        }
        if !self.config.features.typing {
            return None;
        }
        Some(self.typing_emit.schedule(TimerKind::TypingEmit, self.config.typing_emit_delay()))
    }

    /// Send the trimmed draft as a `message` event.
    pub fn submit(&mut self) -> SubmitOutcome {
        if !self.config.features.submit_messages {
            return SubmitOutcome::Disabled;
        }
        let text = self.state.draft.trim();
        if text.is_empty() {
            return SubmitOutcome::Empty;
        }
        let event = OutboundEvent::Message(MessagePayload {
            user: self.identity.as_str().to_owned(),
            text: text.to_owned(),
            ts: None,
        });
        self.emit(&event);
        self.state.draft.clear();
        self.dirty.draft = true;
        SubmitOutcome::Sent
    }

    /// Handle an elapsed timer; stale generations are ignored.
    pub fn fire(&mut self, timer: Timer) {
        match timer.kind {
            TimerKind::TypingEmit => {
                if self.typing_emit.fire(timer.token) {
                    let event = OutboundEvent::Typing(TypingPayload { user: self.identity.as_str().to_owned() });
                    self.emit(&event);
                }
            }
            TimerKind::TypingHide => {
                if self.typing_hide.fire(timer.token) {
                    self.state.typing.hide();
                    self.dirty.typing = true;
                }
            }
        }
    }

    fn emit(&self, event: &OutboundEvent) {
        if let Err(err) = self.channel.emit(event) {
            log::warn!("{err}");
        }
    }
}
