use super::*;

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn roster_default_is_empty() {
    assert!(RosterState::default().entries().is_empty());
}

#[test]
fn replace_marks_local_identity() {
    let mut roster = RosterState::default();
    roster.replace(names(&["Alice", "Bob"]), &Identity::new("Bob"));
    assert_eq!(roster.labels(), vec!["Alice", "Bob (you)"]);
    assert!(!roster.entries()[0].is_self);
    assert!(roster.entries()[1].is_self);
    assert_eq!(roster.entries()[1].name, "Bob");
}

#[test]
fn replace_discards_previous_roster() {
    let identity = Identity::new("Bob");
    let mut roster = RosterState::default();
    roster.replace(names(&["Alice", "Bob", "Carol"]), &identity);
    roster.replace(names(&["Dave"]), &identity);
    assert_eq!(roster.labels(), vec!["Dave"]);

    roster.replace(Vec::new(), &identity);
    assert!(roster.entries().is_empty());
}

#[test]
fn duplicate_self_entries_are_all_marked() {
    let mut roster = RosterState::default();
    roster.replace(names(&["Bob", "Bob"]), &Identity::new("Bob"));
    assert_eq!(roster.labels(), vec!["Bob (you)", "Bob (you)"]);
}
