use std::borrow::Cow;

use serde_json::Value;

/// Transport-level failure: the request never reached the server or never
/// came back from it.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkFailure {
    message: Option<String>,
    raw: Value,
}

impl NetworkFailure {
    /// Creates a failure from a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            raw: Value::String(message.clone()),
            message: Some(message),
        }
    }

    /// Creates a failure from whatever value the GraphQL client reported.
    ///
    /// Objects contribute their `message` field when it is a string.
    pub fn from_value(raw: Value) -> Self {
        let message = raw
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string);
        Self { message, raw }
    }

    /// Creates a failure from a Rust error, using its `Display` output.
    pub fn from_error<E: std::error::Error + ?Sized>(err: &E) -> Self {
        Self::new(err.to_string())
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Text shown to the user: the message when present and non-empty,
    /// otherwise the stringified raw value.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self.message.as_deref() {
            Some(message) if !message.is_empty() => Cow::Borrowed(message),
            _ => match &self.raw {
                Value::String(s) => Cow::Borrowed(s.as_str()),
                other => Cow::Owned(other.to_string()),
            },
        }
    }
}
