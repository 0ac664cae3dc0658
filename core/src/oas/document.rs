#![deny(missing_docs)]

//! # OpenAPI Document Parsing
//!
//! Deserialization of the surrounding document. The engine itself only ever
//! sees the [`SchemaRegistry`]; everything outside `components/schemas`
//! (paths, info, servers) is ignored on the way in.

use crate::error::{AppError, AppResult};
use crate::oas::models::SchemaRegistry;
use serde::Deserialize;

/// Top-level view of an OpenAPI 3 document, reduced to the parts the
/// generator consumes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Document {
    /// The declared document version string (e.g. `3.0.3`). Informational;
    /// engine selection happens through [`Options::version`](crate::Options).
    #[serde(default)]
    pub openapi: Option<String>,

    /// The `components` container.
    #[serde(default)]
    pub components: Components,
}

/// The `components` object, reduced to its schema registry.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Components {
    /// Named schema definitions, in source order.
    #[serde(default)]
    pub schemas: SchemaRegistry,
}

/// Parses a serialized OpenAPI document, accepting YAML or JSON.
///
/// JSON documents are detected by their leading `{` and routed through
/// `serde_json` so that object key order survives; everything else goes
/// through `serde_yaml`.
pub fn parse_document(content: &str) -> AppResult<Document> {
    if content.trim_start().starts_with('{') {
        serde_json::from_str(content)
            .map_err(|e| AppError::General(format!("Failed to parse OpenAPI JSON: {}", e)))
    } else {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::General(format!("Failed to parse OpenAPI YAML: {}", e)))
    }
}
