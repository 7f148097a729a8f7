//! Data model
//!
//! A `Data` entry is a named value, optionally with a human-readable prompt.

use super::entity::{deserialize_fields, explicit_value, serialize_fields};
use super::{Entity, ModelResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Collection+JSON data object
///
/// # Example
///
/// ```rust
/// use collection_json::models::Data;
///
/// let data = Data::new("email").with_value("jdoe@example.org").with_prompt("Email");
/// assert_eq!(data.to_string(), "<Data: name='email' prompt='Email'>");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Data {
    /// Property name, also the key for attribute-style lookup
    pub name: String,
    /// Any JSON value. `None` means absent and is omitted on output, while
    /// `Some(Value::Null)` is an explicit `null` and is written back out.
    #[serde(
        default,
        deserialize_with = "explicit_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<Value>,
    /// Human-readable label for the value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl Data {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            prompt: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

impl Entity for Data {
    const KIND: &'static str = "Data";

    fn from_fields(fields: Map<String, Value>) -> ModelResult<Self> {
        deserialize_fields(Self::KIND, fields)
    }

    fn to_value(&self) -> Value {
        serialize_fields(self)
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Data: name='{}'", self.name)?;
        if let Some(prompt) = &self.prompt {
            write!(f, " prompt='{}'", prompt)?;
        }
        write!(f, ">")
    }
}
