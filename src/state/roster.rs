#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::util::identity::Identity;

/// One line of the user list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterEntry {
    pub name: String,
    pub is_self: bool,
    /// Display text, with the self marker applied.
    pub label: String,
}

/// Connected users in server order.
///
/// Every update replaces the whole list; there is no diffing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterState {
    entries: Vec<RosterEntry>,
}

impl RosterState {
    /// Replace the roster with `names`, marking the entry matching `identity`.
    pub fn replace(&mut self, names: Vec<String>, identity: &Identity) {
        self.entries = names
            .into_iter()
            .map(|name| RosterEntry {
                is_self: identity.is(&name),
                label: identity.label_for(&name),
                name,
            })
            .collect();
    }

    #[must_use]
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.label.as_str()).collect()
    }
}
