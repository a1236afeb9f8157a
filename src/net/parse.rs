//! Permissive decoding of inbound socket payloads.
//!
//! ERROR HANDLING
//! ==============
//! Roster payloads never fail: anything that is not an array is an empty
//! roster. Typing and message payloads report a [`ParseError`] that the
//! reactor logs and drops, so malformed server data never reaches the view.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

use serde_json::Value;

use super::types::{EventName, InboundEvent, MessagePayload, TypingPayload};

/// Reason an inbound payload was dropped.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The payload was not a JSON object.
    #[error("{event} payload is not an object")]
    NotAnObject { event: &'static str },
    /// A required field was absent, falsy, or had the wrong type.
    #[error("{event} payload is missing `{field}`")]
    MissingField { event: &'static str, field: &'static str },
}

/// Decode the payload delivered for `event`.
///
/// # Errors
///
/// See [`ParseError`]; `user_list` payloads always decode.
pub fn parse_inbound(event: EventName, payload: &Value) -> Result<InboundEvent, ParseError> {
    match event {
        EventName::UserList => Ok(InboundEvent::UserList(parse_user_list(payload))),
        EventName::Typing => parse_typing(payload).map(InboundEvent::Typing),
        EventName::Message => parse_message(payload).map(InboundEvent::Message),
    }
}

/// Roster names in server order.
///
/// Strings are taken verbatim and scalar numbers/booleans use their JSON text;
/// `null`, arrays, and objects are skipped.
#[must_use]
pub fn parse_user_list(payload: &Value) -> Vec<String> {
    let Some(items) = payload.as_array() else {
        return Vec::new();
    };
    items.iter().filter_map(scalar_text).collect()
}

fn parse_typing(payload: &Value) -> Result<TypingPayload, ParseError> {
    let user = required_user(payload, EventName::Typing.as_str())?;
    Ok(TypingPayload { user })
}

fn parse_message(payload: &Value) -> Result<MessagePayload, ParseError> {
    let event = EventName::Message.as_str();
    let user = required_user(payload, event)?;
    let text = payload
        .get("text")
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingField { event, field: "text" })?;
    let ts = payload.get("ts").and_then(Value::as_f64);
    Ok(MessagePayload { user, text: text.to_owned(), ts })
}

/// The `user` field as display text.
///
/// Any truthy scalar counts, so `7` becomes `"7"`. Empty strings, `0`,
/// `false`, and `null` are missing.
fn required_user(payload: &Value, event: &'static str) -> Result<String, ParseError> {
    if !payload.is_object() {
        return Err(ParseError::NotAnObject { event });
    }
    payload
        .get("user")
        .filter(|value| is_truthy(value))
        .and_then(scalar_text)
        .ok_or(ParseError::MissingField { event, field: "user" })
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
