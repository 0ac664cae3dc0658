#![deny(missing_docs)]

//! # TypeScript Generation Module
//!
//! - **types**: the type-expression tree and the primitive mapping.
//! - **naming**: identifier sanitization and case conversion.
//! - **synth**: recursive type synthesis over schema nodes.
//! - **emitter**: the interface worklist and declaration emission.
//! - **format**: the formatter seam and the default text formatter.
//!
//! The whole transformation is a pure function of `(registry, options)`:
//! no I/O, no shared state, and any failure aborts with no partial output.

pub mod format;
pub mod naming;
mod synth;
pub mod types;

mod emitter;

use crate::error::AppResult;
use crate::oas::models::SchemaRegistry;
use emitter::Emitter;

// Re-export public API
pub use format::{Formatter, TextFormatter};
pub use types::TypeExpr;

/// The fixed warning comment prepended when `inject_warning` is set.
pub const WARNING_MESSAGE: &str =
    "/**\n* This file was auto-generated by oas2ts.\n* Do not make direct changes to the file.\n*/";

/// The built-in namespace header used when no custom wrapper is supplied.
pub const DEFAULT_WRAPPER: &str = "declare namespace OpenAPI3";

/// The namespace/module wrapper around the emitted declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Wrapper {
    /// Wrap in the built-in [`DEFAULT_WRAPPER`] header.
    #[default]
    Default,
    /// Emit bare declarations without any wrapper.
    None,
    /// Wrap in a caller-supplied header (e.g. `export namespace API`).
    /// An empty header falls back to the built-in one.
    Custom(String),
}

impl Wrapper {
    /// The header line to open the wrapper with, if any.
    fn header(&self) -> Option<&str> {
        match self {
            Wrapper::Default => Some(DEFAULT_WRAPPER),
            Wrapper::None => None,
            Wrapper::Custom(header) if header.is_empty() => Some(DEFAULT_WRAPPER),
            Wrapper::Custom(header) => Some(header),
        }
    }
}

/// Generation options. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Namespace/module wrapper handling.
    pub wrapper: Wrapper,
    /// Convert interface and field names to camelCase.
    pub camel_case: bool,
    /// Prepend the auto-generated-file warning comment.
    pub inject_warning: bool,
    /// The schema-description version the caller requests; the dispatch
    /// layer rejects anything but `3`.
    pub version: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            wrapper: Wrapper::Default,
            camel_case: false,
            inject_warning: false,
            version: 3,
        }
    }
}

/// Converts a schema registry into TypeScript interface declarations,
/// formatted with the default [`TextFormatter`].
pub fn generate_typescript(registry: &SchemaRegistry, options: &Options) -> AppResult<String> {
    generate_typescript_with_formatter(registry, options, &TextFormatter)
}

/// Converts a schema registry into TypeScript interface declarations,
/// delegating whitespace normalization to the given formatter.
///
/// Assembly order: optional warning banner, optional wrapper header, the
/// emitted interfaces, the wrapper's closing brace.
pub fn generate_typescript_with_formatter(
    registry: &SchemaRegistry,
    options: &Options,
    formatter: &dyn Formatter,
) -> AppResult<String> {
    let mut output: Vec<String> = Vec::new();

    if options.inject_warning {
        output.push(WARNING_MESSAGE.to_string());
    }

    let header = options.wrapper.header();
    if let Some(header) = header {
        output.push(format!("{} {{", header));
    }

    output.extend(Emitter::new(registry, options).run()?);

    if header.is_some() {
        output.push("}".to_string());
    }

    Ok(formatter.format(&output.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_headers() {
        assert_eq!(Wrapper::Default.header(), Some(DEFAULT_WRAPPER));
        assert_eq!(Wrapper::None.header(), None);
        assert_eq!(
            Wrapper::Custom("export namespace API".into()).header(),
            Some("export namespace API")
        );
        assert_eq!(Wrapper::Custom(String::new()).header(), Some(DEFAULT_WRAPPER));
    }

    #[test]
    fn test_empty_registry_with_wrapper() {
        let registry = SchemaRegistry::new();
        let output = generate_typescript(&registry, &Options::default()).unwrap();
        assert_eq!(output, "declare namespace OpenAPI3 {\n}\n");
    }

    #[test]
    fn test_empty_registry_without_wrapper_is_empty() {
        let registry = SchemaRegistry::new();
        let options = Options {
            wrapper: Wrapper::None,
            ..Options::default()
        };
        assert_eq!(generate_typescript(&registry, &options).unwrap(), "");
    }
}
