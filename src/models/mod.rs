//! Models module
//!
//! Defines the Collection+JSON object graph:
//! - Leaf entities (`Data`, `Link`, `Error`)
//! - Composite entities (`Template`, `Item`, `Query`)
//! - The root aggregate (`Collection`)
//! - The typed container (`Array`) and the assignment coercion helpers

pub mod array;
pub mod collection;
pub mod data;
pub mod entity;
pub mod error;
pub mod item;
pub mod link;
pub mod property;
pub mod query;
pub mod template;

pub use array::{Array, Lookup, Member};
pub use collection::Collection;
pub use data::Data;
pub use entity::Entity;
pub use error::Error;
pub use item::Item;
pub use link::Link;
pub use property::{ArraySource, assign_array, assign_typed};
pub use query::Query;
pub use template::Template;

/// Error raised while building, searching or parsing the object graph
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// Input text is not JSON, or lacks the required top-level wrapper key
    #[error("Not a valid Collection+JSON {0} document.")]
    InvalidDocument(&'static str),

    /// A container element is neither the declared type nor a mapping
    #[error("Invalid value for {expected}: {value}")]
    InvalidElement { expected: &'static str, value: String },

    /// A field was assigned a value of an incompatible type
    #[error("Invalid value for {field}: expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    /// A mandatory field was not provided
    #[error("{entity} is missing required field '{field}'")]
    MissingField { entity: &'static str, field: String },

    /// A field of a leaf entity has the wrong JSON type
    #[error("{entity} has an invalid field: {reason}")]
    InvalidField { entity: &'static str, reason: String },

    /// A mapping carried a key the entity does not declare
    #[error("{entity} got an unexpected field '{field}'")]
    UnexpectedField { entity: &'static str, field: String },

    /// `Array::get` found nothing for the filter
    #[error("No matching item found (name: {name:?}, rel: {rel:?}).")]
    NoMatch {
        name: Option<String>,
        rel: Option<String>,
    },

    /// Rendering a document to text failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Attribute-style lookup matched zero elements
    #[error("No element named '{key}'")]
    AttributeNotFound { key: String },
}

/// Result type for model operations
pub type ModelResult<T> = Result<T, ModelError>;
