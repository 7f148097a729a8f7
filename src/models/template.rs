//! Template model
//!
//! A template describes the data a client should send when writing to the
//! collection. It can be parsed on its own from a `{"template": {...}}`
//! document.

use super::entity::{Fields, impl_serde_via_value};
use super::{Array, ArraySource, Data, Entity, Lookup, ModelResult, assign_array};
use crate::export::DocumentExporter;
use crate::import::DocumentImporter;
use serde_json::{Map, Value};
use std::fmt;

/// Collection+JSON template object
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    data: Array<Data>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    /// A template with no data
    pub fn new() -> Self {
        Self {
            data: Array::empty("data"),
        }
    }

    /// A template with the given data entries (typed or raw mappings)
    pub fn with_data(data: impl Into<ArraySource<Data>>) -> ModelResult<Self> {
        let mut template = Self::new();
        template.set_data(data)?;
        Ok(template)
    }

    /// Parse a template-only document, `{"template": {"data": [...]}}`.
    ///
    /// A full `{"collection": ...}` document is rejected.
    pub fn parse(text: &str) -> ModelResult<Self> {
        DocumentImporter::new().parse_template(text)
    }

    /// JSON text of [`Template::to_document`]
    pub fn to_json(&self) -> ModelResult<String> {
        DocumentExporter::default().export_template(self)
    }

    pub fn data(&self) -> &Array<Data> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Array<Data> {
        &mut self.data
    }

    /// Replace the data entries; `null` clears them
    pub fn set_data(&mut self, data: impl Into<ArraySource<Data>>) -> ModelResult<()> {
        self.data = assign_array("data", data.into())?;
        Ok(())
    }

    /// Names of every data entry, in order
    pub fn properties(&self) -> Vec<&str> {
        self.data.names()
    }

    /// Look up data entries by name, see [`Array::lookup`]
    pub fn lookup(&self, key: &str) -> ModelResult<Lookup<'_, Data>> {
        self.data.lookup(key)
    }

    /// `{"template": {"data": [...]}}`, `data` included even when empty
    pub fn to_document(&self) -> Value {
        let mut output = Map::new();
        output.insert("template".to_string(), self.to_value());
        Value::Object(output)
    }
}

impl Entity for Template {
    const KIND: &'static str = "Template";

    fn from_fields(fields: Map<String, Value>) -> ModelResult<Self> {
        let mut fields = Fields::new(Self::KIND, fields);
        let data = assign_array("data", fields.take("data").into())?;
        fields.finish()?;
        Ok(Self { data })
    }

    fn to_value(&self) -> Value {
        self.data.to_value()
    }
}

impl_serde_via_value!(Template);

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self
            .properties()
            .iter()
            .map(|name| format!("'{}'", name))
            .collect::<Vec<_>>();
        write!(f, "<Template: data=[{}]>", names.join(", "))
    }
}
