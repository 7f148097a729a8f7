//! Collection model
//!
//! The root of a Collection+JSON document. Owns the top-level links, items
//! and queries, plus an optional write template and error block.
//!
//! Containers and typed fields can only be replaced through their setters,
//! which re-run coercion and validation. A `Collection` shared between threads
//! needs external synchronization for those setters; reads are safe.

use super::entity::{Fields, impl_serde_via_value};
use super::{
    Array, ArraySource, Entity, Error, Item, Link, Member, ModelResult, Query, Template,
    assign_array, assign_typed,
};
use crate::export::DocumentExporter;
use crate::import::DocumentImporter;
use serde_json::{Map, Value};
use std::fmt;

/// Collection+JSON document root
///
/// # Example
///
/// ```rust
/// use collection_json::models::Collection;
///
/// let collection = Collection::parse(r#"{"collection": {"href": "http://example.org"}}"#).unwrap();
/// assert_eq!(collection.version, "1.0");
/// assert!(collection.items().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    /// Format version (default: "1.0")
    pub version: String,
    /// URI of the collection
    pub href: String,
    links: Array<Link>,
    items: Array<Item>,
    queries: Array<Query>,
    template: Option<Template>,
    error: Option<Error>,
}

impl Collection {
    pub const DEFAULT_VERSION: &'static str = "1.0";

    /// An empty collection at `href`, version 1.0
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            version: Self::DEFAULT_VERSION.to_string(),
            href: href.into(),
            links: Array::empty("links"),
            items: Array::empty("items"),
            queries: Array::empty("queries"),
            template: None,
            error: None,
        }
    }

    /// Parse a `{"collection": {...}}` document.
    ///
    /// Invalid JSON, and a missing or empty `collection` key, all fail with
    /// [`ModelError::InvalidDocument`](super::ModelError::InvalidDocument).
    pub fn parse(text: &str) -> ModelResult<Self> {
        DocumentImporter::new().parse_collection(text)
    }

    /// Compact JSON text of [`Collection::to_document`]
    pub fn to_json(&self) -> ModelResult<String> {
        DocumentExporter::default().export_collection(self)
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_links(mut self, links: impl Into<ArraySource<Link>>) -> ModelResult<Self> {
        self.set_links(links)?;
        Ok(self)
    }

    pub fn with_items(mut self, items: impl Into<ArraySource<Item>>) -> ModelResult<Self> {
        self.set_items(items)?;
        Ok(self)
    }

    pub fn with_queries(mut self, queries: impl Into<ArraySource<Query>>) -> ModelResult<Self> {
        self.set_queries(queries)?;
        Ok(self)
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_error(mut self, error: Error) -> Self {
        self.error = Some(error);
        self
    }

    pub fn links(&self) -> &Array<Link> {
        &self.links
    }

    pub fn links_mut(&mut self) -> &mut Array<Link> {
        &mut self.links
    }

    pub fn items(&self) -> &Array<Item> {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Array<Item> {
        &mut self.items
    }

    pub fn queries(&self) -> &Array<Query> {
        &self.queries
    }

    pub fn queries_mut(&mut self) -> &mut Array<Query> {
        &mut self.queries
    }

    pub fn template(&self) -> Option<&Template> {
        self.template.as_ref()
    }

    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    pub fn set_links(&mut self, links: impl Into<ArraySource<Link>>) -> ModelResult<()> {
        self.links = assign_array("links", links.into())?;
        Ok(())
    }

    pub fn set_items(&mut self, items: impl Into<ArraySource<Item>>) -> ModelResult<()> {
        self.items = assign_array("items", items.into())?;
        Ok(())
    }

    pub fn set_queries(&mut self, queries: impl Into<ArraySource<Query>>) -> ModelResult<()> {
        self.queries = assign_array("queries", queries.into())?;
        Ok(())
    }

    /// Replace the template; `None` or JSON `null` removes it
    pub fn set_template(&mut self, template: Option<Member<Template>>) -> ModelResult<()> {
        self.template = assign_typed("template", template)?;
        Ok(())
    }

    /// Replace the error block; `None` or JSON `null` removes it
    pub fn set_error(&mut self, error: Option<Member<Error>>) -> ModelResult<()> {
        self.error = assign_typed("error", error)?;
        Ok(())
    }

    /// `{"collection": {...}}`
    pub fn to_document(&self) -> Value {
        let mut output = Map::new();
        output.insert("collection".to_string(), self.to_value());
        Value::Object(output)
    }

    /// Short description, e.g. `<Collection: version='1.0' href='...'>`
    pub fn summary(&self) -> String {
        format!(
            "<Collection: version='{}' href='{}'>",
            self.version, self.href
        )
    }
}

impl Entity for Collection {
    const KIND: &'static str = "Collection";

    fn from_fields(fields: Map<String, Value>) -> ModelResult<Self> {
        let mut fields = Fields::new(Self::KIND, fields);
        let href = fields.required_string("href")?;
        let version = fields
            .optional_string("version")?
            .unwrap_or_else(|| Self::DEFAULT_VERSION.to_string());
        let collection = Self {
            version,
            href,
            links: assign_array("links", fields.take("links").into())?,
            items: assign_array("items", fields.take("items").into())?,
            queries: assign_array("queries", fields.take("queries").into())?,
            template: assign_typed("template", Some(Member::Raw(fields.take("template"))))?,
            error: assign_typed("error", Some(Member::Raw(fields.take("error"))))?,
        };
        fields.finish()?;
        Ok(collection)
    }

    /// `version` and `href` first, then each non-empty part in the order
    /// links, items, queries, template, error
    fn to_value(&self) -> Value {
        let mut output = Map::new();
        output.insert("version".to_string(), Value::String(self.version.clone()));
        output.insert("href".to_string(), Value::String(self.href.clone()));
        if !self.links.is_empty() {
            output.extend(self.links.to_map());
        }
        if !self.items.is_empty() {
            output.extend(self.items.to_map());
        }
        if !self.queries.is_empty() {
            output.extend(self.queries.to_map());
        }
        if let Some(template) = &self.template {
            output.insert("template".to_string(), template.to_value());
        }
        if let Some(error) = &self.error {
            output.insert("error".to_string(), error.to_value());
        }
        Value::Object(output)
    }
}

impl_serde_via_value!(Collection);

/// The compact JSON text of the document
impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_document())
    }
}
