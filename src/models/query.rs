//! Query model

use super::entity::{Fields, impl_serde_via_value};
use super::{Array, ArraySource, Data, Entity, Lookup, ModelResult, assign_array};
use serde_json::{Map, Value};
use std::fmt;

/// Collection+JSON query object: a templated search the client may run
/// against `href`.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// URI the query is sent to
    pub href: String,
    /// Link relation of the query (e.g., "search")
    pub rel: String,
    /// Identifier for attribute-style lookup
    pub name: Option<String>,
    /// Human-readable label
    pub prompt: Option<String>,
    data: Array<Data>,
}

impl Query {
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            rel: rel.into(),
            name: None,
            prompt: None,
            data: Array::empty("data"),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_data(mut self, data: impl Into<ArraySource<Data>>) -> ModelResult<Self> {
        self.set_data(data)?;
        Ok(self)
    }

    pub fn data(&self) -> &Array<Data> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Array<Data> {
        &mut self.data
    }

    pub fn set_data(&mut self, data: impl Into<ArraySource<Data>>) -> ModelResult<()> {
        self.data = assign_array("data", data.into())?;
        Ok(())
    }

    /// Names of every query parameter, in order
    pub fn properties(&self) -> Vec<&str> {
        self.data.names()
    }

    pub fn lookup(&self, key: &str) -> ModelResult<Lookup<'_, Data>> {
        self.data.lookup(key)
    }
}

impl Entity for Query {
    const KIND: &'static str = "Query";

    fn from_fields(fields: Map<String, Value>) -> ModelResult<Self> {
        let mut fields = Fields::new(Self::KIND, fields);
        let query = Self {
            href: fields.required_string("href")?,
            rel: fields.required_string("rel")?,
            name: fields.optional_string("name")?,
            prompt: fields.optional_string("prompt")?,
            data: assign_array("data", fields.take("data").into())?,
        };
        fields.finish()?;
        Ok(query)
    }

    fn to_value(&self) -> Value {
        let mut output = Map::new();
        output.insert("href".to_string(), Value::String(self.href.clone()));
        output.insert("rel".to_string(), Value::String(self.rel.clone()));
        if let Some(name) = &self.name {
            output.insert("name".to_string(), Value::String(name.clone()));
        }
        if let Some(prompt) = &self.prompt {
            output.insert("prompt".to_string(), Value::String(prompt.clone()));
        }
        if !self.data.is_empty() {
            output.extend(self.data.to_map());
        }
        Value::Object(output)
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn rel(&self) -> Option<&str> {
        Some(&self.rel)
    }
}

impl_serde_via_value!(Query);

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Query: rel='{}'", self.rel)?;
        if let Some(name) = self.name.as_deref().filter(|s| !s.is_empty()) {
            write!(f, " name='{}'", name)?;
        }
        if let Some(prompt) = self.prompt.as_deref().filter(|s| !s.is_empty()) {
            write!(f, " prompt='{}'", prompt)?;
        }
        write!(f, ">")
    }
}
