#![deny(missing_docs)]

//! # OpenAPI Parsing Module
//!
//! - **models**: Intermediate Deserialization Layer for schema objects.
//! - **document**: Top-level document parsing (YAML/JSON).
//! - **resolver**: `$ref` pointer resolution against the registry.

pub mod document;
pub mod models;
pub mod resolver;

// Re-export public API
pub use document::{parse_document, Components, Document};
pub use models::{AdditionalProperties, SchemaNode, SchemaRegistry, Shape};
pub use resolver::resolve_ref;
