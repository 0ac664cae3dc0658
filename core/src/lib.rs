#![deny(missing_docs)]

//! # oas2ts Core
//!
//! Core library for the OpenAPI-to-TypeScript declaration generator.
//!
//! The engine walks the `components/schemas` registry of an OpenAPI 3
//! document and synthesizes one TypeScript interface per object definition,
//! resolving `$ref` pointers, flattening primitive aliases, and naming
//! nested inline objects after their position in the schema tree.

/// Shared error types.
pub mod error;

/// OpenAPI document and schema parsing.
pub mod oas;

/// TypeScript synthesis, emission, and formatting.
pub mod ts;

pub use error::{AppError, AppResult};
pub use oas::{
    parse_document, resolve_ref, AdditionalProperties, Components, Document, SchemaNode,
    SchemaRegistry, Shape,
};
pub use ts::{
    generate_typescript, generate_typescript_with_formatter, Formatter, Options, TextFormatter,
    TypeExpr, Wrapper, DEFAULT_WRAPPER, WARNING_MESSAGE,
};

/// Converts a parsed document into TypeScript declarations, dispatching on
/// the schema-description version the options request.
///
/// Only version 3 is implemented; any other requested version fails with
/// [`AppError::UnsupportedVersion`] before the engine runs.
pub fn generate(document: &Document, options: &Options) -> AppResult<String> {
    match options.version {
        3 => ts::generate_typescript(&document.components.schemas, options),
        version => Err(AppError::UnsupportedVersion(version)),
    }
}
