//! Export functionality
//!
//! Renders Collection+JSON documents as JSON text, compact or pretty-printed
//! according to [`ExportOptions`].

use crate::models::{Collection, ModelError, ModelResult, Template};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

fn default_indent() -> usize {
    2
}

/// Output settings for [`DocumentExporter`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportOptions {
    /// Emit indented, multi-line JSON (default: false)
    #[serde(default)]
    pub pretty: bool,
    /// Spaces per indentation level when `pretty` is set (default: 2)
    #[serde(default = "default_indent")]
    pub indent: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            indent: default_indent(),
        }
    }
}

/// Document exporter
#[derive(Debug, Clone, Default)]
pub struct DocumentExporter {
    pub options: ExportOptions,
}

impl DocumentExporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// Exporter producing pretty-printed output with the default indent
    pub fn pretty() -> Self {
        Self::new(ExportOptions {
            pretty: true,
            ..ExportOptions::default()
        })
    }

    pub fn export_collection(&self, collection: &Collection) -> ModelResult<String> {
        self.render(&collection.to_document())
    }

    pub fn export_template(&self, template: &Template) -> ModelResult<String> {
        self.render(&template.to_document())
    }

    fn render(&self, document: &Value) -> ModelResult<String> {
        let text = if self.options.pretty {
            let indent = vec![b' '; self.options.indent];
            let mut buf = Vec::new();
            let mut serializer =
                Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
            document
                .serialize(&mut serializer)
                .map_err(|e| ModelError::Serialization(e.to_string()))?;
            String::from_utf8(buf).map_err(|e| ModelError::Serialization(e.to_string()))?
        } else {
            serde_json::to_string(document)
                .map_err(|e| ModelError::Serialization(e.to_string()))?
        };
        debug!(bytes = text.len(), pretty = self.options.pretty, "Exported document");
        Ok(text)
    }
}
