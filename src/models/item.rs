//! Item model

use super::entity::{Fields, impl_serde_via_value};
use super::{Array, ArraySource, Data, Entity, Link, Lookup, ModelResult, assign_array};
use serde_json::{Map, Value};
use std::fmt;

/// Collection+JSON item object: one element of the collection, described by
/// its data entries and related links.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// URI of this item; omitted on output only when `None`
    pub href: Option<String>,
    data: Array<Data>,
    links: Array<Link>,
}

impl Default for Item {
    fn default() -> Self {
        Self::new()
    }
}

impl Item {
    pub fn new() -> Self {
        Self {
            href: None,
            data: Array::empty("data"),
            links: Array::empty("links"),
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn with_data(mut self, data: impl Into<ArraySource<Data>>) -> ModelResult<Self> {
        self.set_data(data)?;
        Ok(self)
    }

    pub fn with_links(mut self, links: impl Into<ArraySource<Link>>) -> ModelResult<Self> {
        self.set_links(links)?;
        Ok(self)
    }

    pub fn data(&self) -> &Array<Data> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Array<Data> {
        &mut self.data
    }

    pub fn links(&self) -> &Array<Link> {
        &self.links
    }

    pub fn links_mut(&mut self) -> &mut Array<Link> {
        &mut self.links
    }

    pub fn set_data(&mut self, data: impl Into<ArraySource<Data>>) -> ModelResult<()> {
        self.data = assign_array("data", data.into())?;
        Ok(())
    }

    pub fn set_links(&mut self, links: impl Into<ArraySource<Link>>) -> ModelResult<()> {
        self.links = assign_array("links", links.into())?;
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
}

impl Entity for Item {
    const KIND: &'static str = "Item";

    fn from_fields(fields: Map<String, Value>) -> ModelResult<Self> {
        let mut fields = Fields::new(Self::KIND, fields);
        let item = Self {
            href: fields.optional_string("href")?,
            data: assign_array("data", fields.take("data").into())?,
            links: assign_array("links", fields.take("links").into())?,
        };
        fields.finish()?;
        Ok(item)
    }

    fn to_value(&self) -> Value {
        let mut output = Map::new();
        if let Some(href) = &self.href {
            output.insert("href".to_string(), Value::String(href.clone()));
        }
        if !self.data.is_empty() {
            output.extend(self.data.to_map());
        }
        if !self.links.is_empty() {
            output.extend(self.links.to_map());
        }
        Value::Object(output)
    }
}

impl_serde_via_value!(Item);

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.href {
            Some(href) => write!(f, "<Item: href='{}'>", href),
            None => write!(f, "<Item: href='None'>"),
        }
    }
}
