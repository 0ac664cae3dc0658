#![deny(missing_docs)]

//! # Type Expressions
//!
//! Logic for mapping schema definitions to TypeScript type expressions.
//!
//! Synthesis builds a small [`TypeExpr`] tree and renders it to text at the
//! very end, so bracket placement lives in exactly one spot.

use std::fmt;

/// Maps a schema primitive `type` tag to its TypeScript name.
///
/// Primitives only: `boolean` and everything else pass through unmapped and
/// render as-is. `format` plays no part in the mapping.
pub(crate) fn primitive_mapping(ty: &str) -> Option<&'static str> {
    match ty {
        "string" => Some("string"),
        "integer" | "number" => Some("number"),
        _ => None,
    }
}

/// A TypeScript type expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// A primitive type name (`string`, `number`) or a raw unmapped tag.
    Primitive(String),
    /// A reference to a named interface.
    Named(String),
    /// An element type with an `[]` suffix.
    Array(Box<TypeExpr>),
    /// Member types joined with ` | `. Members are not parenthesized; the
    /// join is textual, matching the established output format.
    Union(Vec<TypeExpr>),
    /// A quoted string literal, as produced by `enum` values.
    Literal(String),
    /// The universal `any` type.
    Any,
    /// The `null` type marker appended for nullable fields.
    Null,
}

impl TypeExpr {
    /// Builds a primitive expression from a `type` tag, mapped when a
    /// mapping exists and raw otherwise.
    pub(crate) fn primitive(ty: &str) -> Self {
        TypeExpr::Primitive(primitive_mapping(ty).unwrap_or(ty).to_string())
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Primitive(name) | TypeExpr::Named(name) => f.write_str(name),
            TypeExpr::Array(inner) => write!(f, "{}[]", inner),
            TypeExpr::Union(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{}", member)?;
                }
                Ok(())
            }
            TypeExpr::Literal(value) => {
                write!(f, "'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
            }
            TypeExpr::Any => f.write_str("any"),
            TypeExpr::Null => f.write_str("null"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_mapping() {
        assert_eq!(primitive_mapping("string"), Some("string"));
        assert_eq!(primitive_mapping("integer"), Some("number"));
        assert_eq!(primitive_mapping("number"), Some("number"));
        assert_eq!(primitive_mapping("boolean"), None);
        assert_eq!(primitive_mapping("object"), None);
    }

    #[test]
    fn test_unmapped_tag_renders_raw() {
        assert_eq!(TypeExpr::primitive("boolean").to_string(), "boolean");
    }

    #[test]
    fn test_nested_arrays() {
        let expr = TypeExpr::Array(Box::new(TypeExpr::Array(Box::new(TypeExpr::Primitive(
            "string".into(),
        )))));
        assert_eq!(expr.to_string(), "string[][]");
    }

    #[test]
    fn test_union_join_is_bare() {
        let expr = TypeExpr::Union(vec![
            TypeExpr::Primitive("string".into()),
            TypeExpr::Primitive("number".into()),
            TypeExpr::Null,
        ]);
        assert_eq!(expr.to_string(), "string | number | null");
    }

    #[test]
    fn test_literal_quoting() {
        assert_eq!(TypeExpr::Literal("admin".into()).to_string(), "'admin'");
        assert_eq!(TypeExpr::Literal("it's".into()).to_string(), "'it\\'s'");
    }
}
