//! Collection+JSON - typed object model for the Collection+JSON hypermedia format
//!
//! Provides:
//! - Entities for every part of a document (collection, items, links, queries,
//!   template, error, data)
//! - Typed containers with search by `name` and/or `rel`
//! - Parsing from and rendering to JSON text
//!
//! ```rust
//! use collection_json::Collection;
//!
//! let text = r#"{"collection": {
//!     "href": "http://example.org/friends/",
//!     "links": [{"href": "http://example.org/friends/rss", "rel": "feed"}]
//! }}"#;
//! let collection = Collection::parse(text).unwrap();
//! let feed = collection.links().get(None, Some("feed")).unwrap();
//! assert_eq!(feed.href, "http://example.org/friends/rss");
//! assert_eq!(Collection::parse(&collection.to_json().unwrap()).unwrap(), collection);
//! ```

pub mod export;
pub mod import;
pub mod models;

pub use export::{DocumentExporter, ExportOptions};
pub use import::DocumentImporter;
pub use models::{
    Array, ArraySource, Collection, Data, Entity, Error, Item, Link, Lookup, Member, ModelError,
    ModelResult, Query, Template,
};
