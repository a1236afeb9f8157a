use super::*;

fn payload(user: &str, text: &str) -> MessagePayload {
    MessagePayload { user: user.to_owned(), text: text.to_owned(), ts: None }
}

#[test]
fn log_starts_empty() {
    let log = MessageLog::default();
    assert!(log.is_empty());
    assert_eq!(log.len(), 0);
}

#[test]
fn push_classifies_authorship_by_identity() {
    let identity = Identity::new("Bob");
    let mut log = MessageLog::default();
    assert_eq!(log.push(payload("Bob", "mine"), &identity).authorship, Authorship::SelfAuthored);
    assert_eq!(log.push(payload("Alice", "theirs"), &identity).authorship, Authorship::Other);
    assert_eq!(log.items()[0].authorship.css_class(), "message self");
    assert_eq!(log.items()[1].authorship.css_class(), "message other");
}

#[test]
fn push_appends_in_arrival_order_with_increasing_seq() {
    let identity = Identity::new("Bob");
    let mut log = MessageLog::default();
    log.push(payload("Alice", "one"), &identity);
    log.push(payload("Alice", "two"), &identity);
    log.push(payload("Carol", "three"), &identity);
    let texts: Vec<&str> = log.items().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, vec!["one", "two", "three"]);
    let seqs: Vec<u64> = log.items().iter().map(|m| m.seq).collect();
    assert_eq!(seqs, vec![0, 1, 2]);
}

#[test]
fn push_keeps_markup_verbatim() {
    let identity = Identity::new("Bob");
    let mut log = MessageLog::default();
    let msg = log.push(payload("Alice", "<b>hi</b>"), &identity);
    assert_eq!(msg.text, "<b>hi</b>");
}

#[test]
fn catch_up_appends_only_the_missing_tail() {
    let identity = Identity::new("Bob");
    let mut source = MessageLog::default();
    source.push(payload("Alice", "one"), &identity);
    let mut copy = source.clone();
    source.push(payload("Alice", "two"), &identity);
    source.push(payload("Bob", "three"), &identity);

    copy.catch_up(&source);
    assert_eq!(copy, source);

    copy.catch_up(&source);
    assert_eq!(copy.len(), 3);
}
