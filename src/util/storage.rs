//! Browser `localStorage` reads.
//!
//! Outside the browser these helpers report nothing stored so the core can be
//! exercised natively.

/// Load the raw string stored under `key`.
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = match web_sys::window()?.local_storage() {
            Ok(storage) => storage?,
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                return None;
            }
        };
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("localStorage read of {key} failed: {err:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("no browser storage, skipping lookup of {key}");
        None
    }
}
