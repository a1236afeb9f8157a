//! Browser host: mounts the widget and runs the reactor task.
//!
//! `mount` is the JS entry point. It resolves configuration and identity once,
//! mounts [`ChatWidget`] into the host element, subscribes to the socket for
//! enabled inbound events, and spawns the single task that owns the
//! [`ReactorCore`]. Socket callbacks, UI intents, and timer wake-ups all feed
//! the same unbounded queue so the core sees them strictly in order.
//!
//! ERROR HANDLING
//! ==============
//! Only invalid options are reported back to the caller. A missing mount
//! element, an inbound payload with no JSON form, or a closed queue is
//! logged and the widget degrades silently.

use futures::StreamExt;
use futures::channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded};
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use crate::app::{ChatSignals, ChatWidget, InputSender};
use crate::components::message_panel::{MessageItems, install_auto_scroll};
use crate::config::{Features, ReactorConfig};
use crate::net::channel::{Socket, SocketChannel, js_to_json};
use crate::reactor::{ReactorCore, ReactorInput};
use crate::state::chat::ChatState;
use crate::util::debounce::Timer;
use crate::util::identity::{self, Identity};

/// Mount the chat widget and attach it to `socket`.
///
/// `options` is a plain object matching [`ReactorConfig`]; `null` or
/// `undefined` selects the defaults.
///
/// # Errors
///
/// Returns the configuration error message when `options` is invalid.
#[wasm_bindgen]
pub fn mount(socket: Socket, options: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }

    let options = js_to_json(&options).map_err(|err| JsValue::from_str(&format!("invalid options: {err}")))?;
    let config = ReactorConfig::from_value(options).map_err(|err| JsValue::from_str(&err.to_string()))?;
    let identity = identity::from_environment(config.identity.as_deref());

    let Some(parent) = find_element(config.mount_id.as_deref()) else {
        log::warn!("chat widget not mounted: host element {:?} not found", config.mount_id);
        return Ok(());
    };

    let features = config.features;
    let own_panel = config.renders_own_panel();
    let host_panel = config.host_panel_id().map(str::to_owned);

    let signals = ChatSignals::new(&ChatState::default());
    let sender = spawn_reactor(socket, identity, config, signals);

    if let Some(id) = host_panel {
        attach_host_panel(&id, features, signals);
    }

    let handle = leptos::mount::mount_to(parent, move || {
        view! { <ChatWidget features=features own_panel=own_panel signals=signals sender=sender/> }
    });
    handle.forget();
    log::info!("chat widget mounted");
    Ok(())
}

/// Element with `id`, or `<body>` when no id is given.
fn find_element(id: Option<&str>) -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;
    match id {
        Some(id) => match document.get_element_by_id(id)?.dyn_into::<web_sys::HtmlElement>() {
            Ok(element) => Some(element),
            Err(_) => None,
        },
        None => document.body(),
    }
}

/// Render messages into, and auto-scroll, a panel the page already has.
fn attach_host_panel(id: &str, features: Features, signals: ChatSignals) {
    let Some(panel) = find_element(Some(id)) else {
        log::warn!("message panel #{id} not found, messages will not be shown");
        return;
    };
    if features.auto_scroll {
        install_auto_scroll(&panel);
    }
    if features.render_messages {
        let messages = signals.messages;
        leptos::mount::mount_to(panel, move || view! { <MessageItems messages=messages/> }).forget();
    }
    log::debug!("attached to host message panel #{id}");
}

/// Wire the socket to a fresh reactor and spawn its task.
fn spawn_reactor(socket: Socket, identity: Identity, config: ReactorConfig, signals: ChatSignals) -> InputSender {
    let (tx, rx) = unbounded::<ReactorInput>();
    subscribe(&socket, config.features, &tx);

    let core = ReactorCore::new(SocketChannel::new(socket), identity, config);
    leptos::task::spawn_local(reactor_loop(core, signals, tx.clone(), rx));

    InputSender::new(tx)
}

/// Register one socket handler per enabled inbound event.
fn subscribe(socket: &Socket, features: Features, tx: &UnboundedSender<ReactorInput>) {
    for event in features.inbound_events() {
        let tx = tx.clone();
        let handler = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            let payload = match js_to_json(&payload) {
                Ok(payload) => payload,
                Err(err) => {
                    log::warn!("dropping {} event, payload is not JSON: {err}", event.as_str());
                    return;
                }
            };
            if tx.unbounded_send(ReactorInput::Inbound { event, payload }).is_err() {
                log::debug!("reactor queue closed, dropping {}", event.as_str());
            }
        });
        socket.on(event.as_str(), handler.as_ref().unchecked_ref());
        // Socket subscriptions last for the page lifetime.
        handler.forget();
    }
}

async fn reactor_loop(
    mut core: ReactorCore<SocketChannel>,
    signals: ChatSignals,
    tx: UnboundedSender<ReactorInput>,
    mut rx: UnboundedReceiver<ReactorInput>,
) {
    while let Some(input) = rx.next().await {
        let applied = core.apply(input);
        if let Some(timer) = applied.timer {
            schedule(timer, tx.clone());
        }
        signals.publish(core.state(), applied.dirty);
    }
    log::debug!("reactor queue closed");
}

fn schedule(timer: Timer, tx: UnboundedSender<ReactorInput>) {
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(timer.delay).await;
        if tx.unbounded_send(ReactorInput::TimerFired(timer)).is_err() {
            log::debug!("reactor queue closed before {:?} fired", timer.kind);
        }
    });
}
