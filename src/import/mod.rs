//! Import functionality
//!
//! Parses Collection+JSON documents from JSON text:
//! - `{"collection": {...}}` into a [`Collection`]
//! - `{"template": {...}}` into a [`Template`]
//!
//! Every failure to find a usable document is reported as the same
//! [`ModelError::InvalidDocument`]; the JSON parser's own diagnostic is only
//! logged. Errors raised while building the entities themselves (missing
//! fields, wrong types) are returned as-is.

use crate::models::{Collection, Entity, ModelError, ModelResult, Template};
use serde_json::{Map, Value};
use tracing::debug;

/// Document importer
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentImporter;

impl DocumentImporter {
    pub fn new() -> Self {
        Self
    }

    /// Parse a full Collection+JSON document
    pub fn parse_collection(&self, text: &str) -> ModelResult<Collection> {
        let fields = self.unwrap_document(text, "collection", None)?;
        let collection = Collection::from_fields(fields)?;
        debug!(
            href = %collection.href,
            items = collection.items().len(),
            "Parsed Collection+JSON document"
        );
        Ok(collection)
    }

    /// Parse a template-only document. A document wrapped in `collection` is
    /// rejected rather than searched for a nested template, and so is one
    /// that carries a `collection` key next to `template`.
    pub fn parse_template(&self, text: &str) -> ModelResult<Template> {
        let fields = self.unwrap_document(text, "template", Some("collection"))?;
        let template = Template::from_fields(fields)?;
        debug!(
            properties = template.properties().len(),
            "Parsed Collection+JSON template"
        );
        Ok(template)
    }

    /// Parse `text` and return the non-empty mapping stored under `key`.
    /// A root that also holds `excluded` is not a `key` document.
    fn unwrap_document(
        &self,
        text: &str,
        key: &'static str,
        excluded: Option<&'static str>,
    ) -> ModelResult<Map<String, Value>> {
        let document: Value = serde_json::from_str(text).map_err(|e| {
            debug!(error = %e, "Document is not valid JSON");
            ModelError::InvalidDocument(key)
        })?;

        let Value::Object(mut root) = document else {
            debug!("Document root is not an object");
            return Err(ModelError::InvalidDocument(key));
        };

        if let Some(other) = excluded.filter(|other| root.contains_key(*other)) {
            debug!(key, other, "Document root mixes top-level keys");
            return Err(ModelError::InvalidDocument(key));
        }

        match root.remove(key) {
            Some(Value::Object(fields)) if !fields.is_empty() => Ok(fields),
            _ => {
                debug!(key, "Document has no usable top-level key");
                Err(ModelError::InvalidDocument(key))
            }
        }
    }
}
