//! Link model

use super::entity::{deserialize_fields, serialize_fields};
use super::{Entity, ModelResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Collection+JSON link object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    /// Target URI
    pub href: String,
    /// Link relation (e.g., "feed", "alternate")
    pub rel: String,
    /// Identifier for attribute-style lookup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rendering hint, e.g. "image" or "link"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,
    /// Human-readable label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            name: None,
            render: None,
            prompt: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_render(mut self, render: impl Into<String>) -> Self {
        self.render = Some(render.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }
}

impl Entity for Link {
    const KIND: &'static str = "Link";

    fn from_fields(fields: Map<String, Value>) -> ModelResult<Self> {
        deserialize_fields(Self::KIND, fields)
    }

    fn to_value(&self) -> Value {
        serialize_fields(self)
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn rel(&self) -> Option<&str> {
        Some(&self.rel)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Link: rel='{}'", self.rel)?;
        for (key, field) in [
            ("name", &self.name),
            ("render", &self.render),
            ("prompt", &self.prompt),
        ] {
            match field {
                Some(text) if !text.is_empty() => write!(f, " {}='{}'", key, text)?,
                _ => {}
            }
        }
        write!(f, ">")
    }
}
