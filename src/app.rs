//! Root widget component, per-region view signals, and the UI-to-reactor
//! input sender.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use crate::components::{
    message_form::MessageForm, message_panel::MessagePanel, typing_indicator::TypingIndicatorBanner,
    user_list::UserList,
};
use crate::config::Features;
use crate::reactor::{Dirty, ReactorInput};
use crate::state::chat::ChatState;
use crate::state::messages::MessageLog;
use crate::state::roster::RosterState;
use crate::state::typing::TypingIndicator;

/// One signal per widget region.
///
/// A keystroke only touches `draft`, so the roster and message list never
/// re-render while the user types.
#[derive(Clone, Copy)]
pub struct ChatSignals {
    pub roster: RwSignal<RosterState>,
    pub typing: RwSignal<TypingIndicator>,
    pub messages: RwSignal<MessageLog>,
    pub draft: RwSignal<String>,
}

impl ChatSignals {
    pub fn new(state: &ChatState) -> Self {
        Self {
            roster: RwSignal::new(state.roster.clone()),
            typing: RwSignal::new(state.typing.clone()),
            messages: RwSignal::new(state.messages.clone()),
            draft: RwSignal::new(state.draft.clone()),
        }
    }

    /// Copy the `dirty` regions of `state` into their signals.
    pub fn publish(self, state: &ChatState, dirty: Dirty) {
        if dirty.roster {
            self.roster.set(state.roster.clone());
        }
        if dirty.typing {
            self.typing.set(state.typing.clone());
        }
        if dirty.messages {
            self.messages.update(|log| log.catch_up(&state.messages));
        }
        if dirty.draft {
            self.draft.set(state.draft.clone());
        }
    }
}

/// Handle components use to push inputs into the reactor queue.
///
/// Without the `csr` feature there is no reactor task and sends are dropped.
#[derive(Clone, Default)]
pub struct InputSender {
    #[cfg(feature = "csr")]
    tx: Option<futures::channel::mpsc::UnboundedSender<ReactorInput>>,
}

impl InputSender {
    #[cfg(feature = "csr")]
    pub(crate) fn new(tx: futures::channel::mpsc::UnboundedSender<ReactorInput>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Queue `input` for the reactor.
    ///
    /// Returns `false` if no reactor task is listening.
    pub fn send(&self, input: ReactorInput) -> bool {
        #[cfg(feature = "csr")]
        {
            self.tx.as_ref().is_some_and(|tx| tx.unbounded_send(input).is_ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            log::trace!("no reactor task, dropping {input:?}");
            false
        }
    }
}

/// The whole chat widget.
///
/// Provides the region signals, input sender, and feature flags as context
/// and renders only the regions whose features are enabled. `own_panel` is
/// false when messages go into a panel the host page already has.
#[component]
pub fn ChatWidget(features: Features, own_panel: bool, signals: ChatSignals, sender: InputSender) -> impl IntoView {
    provide_context(signals);
    provide_context(RwSignal::new(sender));
    provide_context(features);

    view! {
        <div class="chat-widget">
            {features.roster.then(|| view! { <UserList/> })}
            {own_panel.then(|| view! { <MessagePanel/> })}
            {features.typing.then(|| view! { <TypingIndicatorBanner/> })}
            {features.message_form().map(|kind| view! { <MessageForm kind=kind/> })}
        </div>
    }
}
