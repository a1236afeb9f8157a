//! # chat-reactor
//!
//! Leptos + WASM chat widget that reacts to a host-supplied realtime socket.
//! It renders the connected-user roster, shows a debounced "is typing"
//! banner, renders and submits chat messages, and keeps the message panel
//! scrolled to the bottom.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`reactor`] | Browser-free [`reactor::ReactorCore`] owning state and timers |
//! | [`state`] | View state: roster, typing banner, message log |
//! | [`net`] | Event names, payload parsing, and the [`net::channel::Channel`] seam |
//! | [`config`] | [`config::ReactorConfig`] and feature flags |
//! | [`util`] | Debounce tokens, identity resolution, storage, scroll helpers |
//! | [`components`] | Leptos components for each widget region |
//! | [`app`] | Root `ChatWidget` component, per-region signals, input sender |
//! | [`consts`] | Delays, fallback identity, storage keys |
//!
//! The browser entry point [`mount`] is only compiled with the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
pub mod consts;
pub mod net;
pub mod reactor;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
mod host;

#[cfg(feature = "csr")]
pub use host::mount;
