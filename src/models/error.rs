//! Error model
//!
//! The Collection+JSON `error` block. Not to be confused with
//! [`ModelError`](super::ModelError), which is what this crate returns when
//! something goes wrong.

use super::entity::{deserialize_fields, serialize_fields};
use super::{Entity, ModelResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Collection+JSON error object. Every field is optional.
///
/// Absent fields are omitted on output. Empty strings are kept, so they
/// survive a round trip, but [`Display`](fmt::Display) skips them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Error {
    /// Application-specific error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Short summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Error {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fields shown by `Display`: set and non-empty
    fn present(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("code", &self.code),
            ("message", &self.message),
            ("title", &self.title),
        ]
        .into_iter()
        .filter_map(|(key, field)| match field.as_deref() {
            Some(text) if !text.is_empty() => Some((key, text)),
            _ => None,
        })
    }

    /// Always `{"error": {...}}`, even when every field is absent
    pub fn to_document(&self) -> Value {
        let mut output = Map::new();
        output.insert("error".to_string(), self.to_value());
        Value::Object(output)
    }
}

impl Entity for Error {
    const KIND: &'static str = "Error";

    fn from_fields(fields: Map<String, Value>) -> ModelResult<Self> {
        deserialize_fields(Self::KIND, fields)
    }

    fn to_value(&self) -> Value {
        serialize_fields(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Error")?;
        for (key, text) in self.present() {
            write!(f, " {}='{}'", key, text)?;
        }
        write!(f, ">")
    }
}
