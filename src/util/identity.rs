//! Local user identity and its one-time resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity is resolved once when the widget mounts and then injected
//! into the reactor. Sources are tried in order: explicit configuration, the
//! page global named by [`IDENTITY_GLOBAL`], the `localStorage` entry named by
//! [`IDENTITY_STORAGE_KEY`], and finally [`DEFAULT_IDENTITY`]. Empty strings
//! are treated as missing at every step.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::fmt;

#[cfg(feature = "csr")]
use crate::consts::{IDENTITY_GLOBAL, IDENTITY_STORAGE_KEY};
use crate::consts::{DEFAULT_IDENTITY, SELF_SUFFIX};

/// Display name of a chat participant.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identity(String);

impl Identity {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `name` refers to this identity.
    #[must_use]
    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }

    /// Roster label for `name`, marking it when it is this identity.
    #[must_use]
    pub fn label_for(&self, name: &str) -> String {
        if self.is(name) {
            format!("{name}{SELF_SUFFIX}")
        } else {
            name.to_owned()
        }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new(DEFAULT_IDENTITY)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pick the first non-empty candidate, falling back to [`DEFAULT_IDENTITY`].
#[must_use]
pub fn resolve(explicit: Option<&str>, global: Option<&str>, stored: Option<&str>) -> Identity {
    [explicit, global, stored]
        .into_iter()
        .flatten()
        .find(|name| !name.is_empty())
        .map_or_else(Identity::default, Identity::new)
}

/// Resolve the identity from configuration and the browser environment.
#[cfg(feature = "csr")]
pub fn from_environment(explicit: Option<&str>) -> Identity {
    let global = read_global_name();
    let stored = super::storage::load_string(IDENTITY_STORAGE_KEY);
    let identity = resolve(explicit, global.as_deref(), stored.as_deref());
    log::info!("chat identity resolved as {identity}");
    identity
}

#[cfg(feature = "csr")]
fn read_global_name() -> Option<String> {
    let window = web_sys::window()?;
    match js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str(IDENTITY_GLOBAL)) {
        Ok(value) => value.as_string(),
        Err(_) => None,
    }
}
