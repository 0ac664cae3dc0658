#![deny(missing_docs)]

//! # Reference Resolution
//!
//! Resolves `$ref` pointer strings against the schema registry. Resolution
//! failure is fatal: the whole generation aborts, no partial output.

use crate::error::{AppError, AppResult};
use crate::oas::models::{SchemaNode, SchemaRegistry};

/// The pointer prefix of local schema references.
const SCHEMA_POINTER_PREFIX: &str = "#/components/schemas/";

/// Resolves a pointer string to its named registry entry.
///
/// Strips the `#/components/schemas/` prefix and looks the remaining name
/// up in the registry, returning both the resolved name and its node.
///
/// # Arguments
///
/// * `registry` - The schema registry to resolve against.
/// * `pointer` - A pointer string, e.g. `#/components/schemas/User`.
pub fn resolve_ref<'a>(
    registry: &'a SchemaRegistry,
    pointer: &str,
) -> AppResult<(&'a str, &'a SchemaNode)> {
    let name = pointer.strip_prefix(SCHEMA_POINTER_PREFIX).unwrap_or(pointer);
    registry
        .get_key_value(name)
        .map(|(name, node)| (name.as_str(), node))
        .ok_or_else(|| AppError::UnresolvedReference(name.to_string()))
}
