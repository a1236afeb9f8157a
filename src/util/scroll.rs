//! Auto-scroll decision for the message panel observer.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Node counts extracted from one `MutationRecord`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChildMutation {
    pub added: u32,
    pub removed: u32,
}

/// Whether a batch of mutation records should scroll the panel to the bottom.
///
/// Any insertion or removal of child nodes counts; attribute or text-only
/// records do not.
#[must_use]
pub fn should_scroll(records: &[ChildMutation]) -> bool {
    records.iter().any(|r| r.added > 0 || r.removed > 0)
}

/// Smoothly scroll `panel` to its full scroll height.
#[cfg(feature = "csr")]
pub fn scroll_to_bottom(panel: &web_sys::Element) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(f64::from(panel.scroll_height()));
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    panel.scroll_to_with_scroll_to_options(&options);
}
