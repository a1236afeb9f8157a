use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_prefers_explicit_value() {
    let identity = resolve(Some("Carol"), Some("Alice"), Some("Bob"));
    assert_eq!(identity.as_str(), "Carol");
}

#[test]
fn resolve_uses_global_before_storage() {
    let identity = resolve(None, Some("Alice"), Some("Bob"));
    assert_eq!(identity.as_str(), "Alice");
}

#[test]
fn resolve_falls_back_to_storage() {
    let identity = resolve(None, None, Some("Bob"));
    assert_eq!(identity.as_str(), "Bob");
}

#[test]
fn resolve_skips_empty_candidates() {
    let identity = resolve(Some(""), Some(""), Some("Bob"));
    assert_eq!(identity.as_str(), "Bob");
}

#[test]
fn resolve_defaults_to_you() {
    assert_eq!(resolve(None, None, None).as_str(), "You");
    assert_eq!(resolve(Some(""), None, Some("")).as_str(), "You");
}

// =============================================================
// Identity
// =============================================================

#[test]
fn label_for_marks_only_self() {
    let identity = Identity::new("Bob");
    assert_eq!(identity.label_for("Bob"), "Bob (you)");
    assert_eq!(identity.label_for("Alice"), "Alice");
}

#[test]
fn identity_comparison_is_case_sensitive() {
    let identity = Identity::new("Bob");
    assert!(identity.is("Bob"));
    assert!(!identity.is("bob"));
}

#[test]
fn display_prints_bare_name() {
    assert_eq!(Identity::new("Ann").to_string(), "Ann");
}
