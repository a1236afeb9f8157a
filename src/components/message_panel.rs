//! Scrollable message panel.
//!
//! Messages are keyed by arrival sequence so each new message inserts exactly
//! one child node. A `MutationObserver` on the panel scrolls it to the bottom
//! whenever children are added or removed, including nodes appended by other
//! scripts on the page.
//!
//! When the host page already has a panel, the host mounts [`MessageItems`]
//! into it and installs the observer there instead of rendering
//! [`MessagePanel`].

use leptos::prelude::*;

use crate::app::ChatSignals;
use crate::config::Features;
use crate::state::messages::{ChatMessage, MessageLog};

#[component]
pub fn MessagePanel() -> impl IntoView {
    let messages = expect_context::<ChatSignals>().messages;
    let features = expect_context::<Features>();
    let panel_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    {
        let installed = StoredValue::new(false);
        Effect::new(move || {
            let Some(panel) = panel_ref.get() else {
                return;
            };
            if !features.auto_scroll || installed.get_value() {
                return;
            }
            installed.set_value(true);
            install_auto_scroll(&panel);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("auto-scroll observer needs a browser (enabled: {})", features.auto_scroll);
    }

    view! {
        <div id="message-panel" class="message-panel" node_ref=panel_ref>
            <MessageItems messages=messages/>
        </div>
    }
}

/// The rendered messages alone, without a containing panel.
#[component]
pub fn MessageItems(messages: RwSignal<MessageLog>) -> impl IntoView {
    let items = move || messages.with(|log| log.items().to_vec());

    view! {
        <For
            each=items
            key=|msg: &ChatMessage| msg.seq
            children=move |msg: ChatMessage| {
                view! { <div class=msg.authorship.css_class()>{msg.text}</div> }
            }
        />
    }
}

/// Scroll `panel` to the bottom whenever its children change.
#[cfg(feature = "csr")]
pub(crate) fn install_auto_scroll(panel: &web_sys::Element) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    use crate::util::scroll::{ChildMutation, scroll_to_bottom, should_scroll};

    let target = panel.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::MutationObserver)>::new(
        move |records: js_sys::Array, _observer: web_sys::MutationObserver| {
            let batch = records
                .iter()
                .flat_map(|value| value.dyn_into::<web_sys::MutationRecord>())
                .map(|record| ChildMutation {
                    added: record.added_nodes().length(),
                    removed: record.removed_nodes().length(),
                })
                .collect::<Vec<_>>();
            if should_scroll(&batch) {
                scroll_to_bottom(&target);
            }
        },
    );

    let observer = match web_sys::MutationObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => observer,
        Err(err) => {
            log::warn!("auto-scroll disabled, observer creation failed: {err:?}");
            return;
        }
    };
    let init = web_sys::MutationObserverInit::new();
    init.set_child_list(true);
    if let Err(err) = observer.observe_with_options(panel, &init) {
        log::warn!("auto-scroll disabled, observe failed: {err:?}");
        return;
    }
    // The observer lives as long as the panel; the callback must too.
    callback.forget();
}
