#![deny(missing_docs)]

//! # Schema Models
//!
//! Generic structures acting as an Intermediate Deserialization Layer for
//! `components/schemas` entries. A source schema object may carry fields
//! belonging to several shapes at once (`$ref` next to `items`, `enum` next
//! to `type`), so every field here is optional and [`SchemaNode::shape`]
//! classifies a node with a fixed precedence order instead of ad hoc
//! field-presence checks at the call sites.

use indexmap::IndexMap;
use serde::Deserialize;

/// The full set of named schema definitions provided as input.
/// Insertion order follows the source document and is preserved.
pub type SchemaRegistry = IndexMap<String, SchemaNode>;

/// One schema object as it appears in the source document.
///
/// Any subset of the fields may co-occur; dispatch happens through
/// [`SchemaNode::shape`], never through direct field sniffing in the engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    /// A `#/components/schemas/<name>` pointer to another registry entry.
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    /// `allOf` parts: referenced supertypes and inline property blocks.
    pub all_of: Option<Vec<SchemaNode>>,

    /// Human-readable description, emitted as a doc comment.
    pub description: Option<String>,

    /// Literal string values of an `enum` schema, in source order.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<String>>,

    /// Value format hint (`int64`, `float`, ...). Ignored for typing.
    pub format: Option<String>,

    /// Item schema of an array.
    pub items: Option<Box<SchemaNode>>,

    /// `oneOf` parts, rendered as a union type.
    pub one_of: Option<Vec<SchemaNode>>,

    /// Named properties of an object schema, in source order.
    pub properties: Option<IndexMap<String, SchemaNode>>,

    /// Whether the value may additionally be `null`.
    pub nullable: Option<bool>,

    /// `additionalProperties`: a boolean flag or a value schema.
    pub additional_properties: Option<AdditionalProperties>,

    /// Names of required properties; everything else is optional.
    pub required: Option<Vec<String>>,

    /// The outer `type` tag (`object`, `array`, `string`, ...).
    #[serde(rename = "type")]
    pub schema_type: Option<String>,
}

/// The `additionalProperties` keyword: `true`/`false` or a value schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `additionalProperties: true` (index signature typed `any`) or
    /// `false` (no index signature).
    Flag(bool),
    /// A typed value schema for the index signature.
    Schema(Box<SchemaNode>),
}

/// A classified view of a [`SchemaNode`] for type synthesis.
///
/// The variants are checked in a fixed order because fields of several
/// shapes can co-occur on one node: a `$ref` wins over everything, an
/// `items` field only counts as an array when the item itself carries a
/// `$ref` or `type` tag, `oneOf` wins over `properties`, and the
/// declaration-level facets (`allOf`, `enum`) rank below both since the
/// synthesizer resolves such nodes like bare primitives.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape<'a> {
    /// A pointer to another registry entry.
    Reference(&'a str),
    /// An array whose item schema carries a `$ref` or `type` tag.
    ArrayOf(&'a SchemaNode),
    /// A `oneOf` union.
    Union(&'a [SchemaNode]),
    /// An inline object with named properties.
    ObjectInline(&'a IndexMap<String, SchemaNode>),
    /// An `allOf` composition. Merged at declaration level by the emitter;
    /// the synthesizer falls back to the node's `type` tag.
    Composition(&'a [SchemaNode]),
    /// An enum of string literals. Rendered at field level by the emitter;
    /// the synthesizer falls back to the node's `type` tag.
    EnumOf(&'a [String]),
    /// A bare `type` tag.
    Primitive(&'a str),
    /// No recognizable shape; maps to the universal `any` type.
    Unknown,
}

impl SchemaNode {
    /// Classifies this node into a [`Shape`], applying the precedence order
    /// documented on the enum.
    pub fn shape(&self) -> Shape<'_> {
        if let Some(pointer) = &self.reference {
            return Shape::Reference(pointer);
        }
        if let Some(items) = &self.items {
            if items.reference.is_some() || items.schema_type.is_some() {
                return Shape::ArrayOf(items);
            }
        }
        if let Some(parts) = &self.one_of {
            return Shape::Union(parts);
        }
        if let Some(properties) = &self.properties {
            return Shape::ObjectInline(properties);
        }
        if let Some(parts) = &self.all_of {
            return Shape::Composition(parts);
        }
        if let Some(values) = &self.enum_values {
            return Shape::EnumOf(values);
        }
        if let Some(ty) = &self.schema_type {
            return Shape::Primitive(ty);
        }
        Shape::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(yaml: &str) -> SchemaNode {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn test_deserialize_loose_fields() {
        let parsed = node(
            r#"
type: object
properties:
  id: { type: string }
required: [id]
additionalProperties: true
"#,
        );
        assert_eq!(parsed.schema_type.as_deref(), Some("object"));
        assert_eq!(parsed.properties.as_ref().unwrap().len(), 1);
        assert_eq!(
            parsed.additional_properties,
            Some(AdditionalProperties::Flag(true))
        );
    }

    #[test]
    fn test_additional_properties_schema() {
        let parsed = node("additionalProperties: { type: string }");
        match parsed.additional_properties {
            Some(AdditionalProperties::Schema(schema)) => {
                assert_eq!(schema.schema_type.as_deref(), Some("string"));
            }
            other => panic!("expected schema variant, got {:?}", other),
        }
    }

    #[test]
    fn test_ref_wins_over_items() {
        let parsed = node(
            r#"
$ref: '#/components/schemas/User'
items: { type: string }
"#,
        );
        assert!(matches!(parsed.shape(), Shape::Reference(_)));
    }

    #[test]
    fn test_untagged_items_do_not_make_an_array() {
        // An items schema without $ref or type falls through to the
        // outer node's own shape.
        let parsed = node(
            r#"
items:
  properties:
    id: { type: string }
type: array
"#,
        );
        assert!(matches!(parsed.shape(), Shape::Primitive("array")));
    }

    #[test]
    fn test_one_of_wins_over_sibling_type() {
        let parsed = node(
            r#"
type: array
oneOf:
  - { type: string }
  - { type: number }
"#,
        );
        assert!(matches!(parsed.shape(), Shape::Union(_)));
    }

    #[test]
    fn test_enum_ranks_below_properties() {
        let parsed = node(
            r#"
enum: [a, b]
properties:
  id: { type: string }
"#,
        );
        assert!(matches!(parsed.shape(), Shape::ObjectInline(_)));
    }

    #[test]
    fn test_property_order_preserved() {
        let parsed = node(
            r#"
type: object
properties:
  zulu: { type: string }
  alpha: { type: string }
  mike: { type: string }
"#,
        );
        let keys: Vec<&String> = parsed.properties.as_ref().unwrap().keys().collect();
        assert_eq!(keys, ["zulu", "alpha", "mike"]);
    }
}
