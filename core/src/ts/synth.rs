#![deny(missing_docs)]

//! # Type Synthesis
//!
//! Recursively infers a [`TypeExpr`] for one schema node. Synthesis never
//! prints anything itself; inline object schemas (and arrays of them) are
//! pushed onto the worklist so the emitter turns them into named interfaces
//! later.

use crate::error::AppResult;
use crate::oas::models::{SchemaNode, SchemaRegistry, Shape};
use crate::oas::resolver::resolve_ref;
use crate::ts::naming::camel_case;
use crate::ts::types::{primitive_mapping, TypeExpr};

/// A pending `(interface name, schema)` pair awaiting emission.
///
/// Nodes are borrowed from the registry-rooted tree; the worklist owns only
/// the derived names.
#[derive(Debug)]
pub(crate) struct WorklistEntry<'a> {
    /// The interface name the entry will be emitted under.
    pub name: String,
    /// The schema to emit.
    pub node: &'a SchemaNode,
}

/// Synthesizes the type expression for `node`.
///
/// `nested_name` is the interface name the node would receive if it turns
/// out to need one (a parent-derived name for properties, the resolved name
/// for references, empty where the caller cannot name it). The name is
/// camel-cased before use so nested interfaces are uniformly cased no
/// matter how the source field was spelled.
///
/// # Arguments
///
/// * `registry` - The schema registry, for `$ref` resolution.
/// * `node` - The schema node to synthesize.
/// * `nested_name` - Candidate interface name for inline objects.
/// * `worklist` - Receives entries for schemas that need own interfaces.
pub(crate) fn synthesize<'a>(
    registry: &'a SchemaRegistry,
    node: &'a SchemaNode,
    nested_name: &str,
    worklist: &mut Vec<WorklistEntry<'a>>,
) -> AppResult<TypeExpr> {
    let next_interface = camel_case(nested_name);

    match node.shape() {
        Shape::Reference(pointer) => {
            let (ref_name, ref_node) = resolve_ref(registry, pointer)?;

            // A reference to an array-of-reference alias flattens to the
            // aliased array type instead of the alias name.
            if let Some(items) = &ref_node.items {
                if items.reference.is_some() {
                    return synthesize(registry, ref_node, ref_name, worklist);
                }
            }
            // A reference to a bare mapped primitive flattens likewise; no
            // interface exists purely to alias a primitive.
            if let Some(mapped) = ref_node
                .schema_type
                .as_deref()
                .and_then(primitive_mapping)
            {
                return Ok(TypeExpr::Primitive(mapped.to_string()));
            }
            Ok(TypeExpr::Named(ref_name.to_string()))
        }

        Shape::ArrayOf(items) => {
            if let Some(pointer) = &items.reference {
                let (ref_name, _) = resolve_ref(registry, pointer)?;
                let inner = synthesize(registry, items, ref_name, worklist)?;
                return Ok(TypeExpr::Array(Box::new(inner)));
            }
            // shape() only classifies an array when the item carries a
            // $ref or a type tag, so a type tag is present here.
            match items.schema_type.as_deref() {
                Some("array") => {
                    let inner = synthesize(registry, items, nested_name, worklist)?;
                    Ok(TypeExpr::Array(Box::new(inner)))
                }
                Some(ty) if primitive_mapping(ty).is_some() => Ok(TypeExpr::Array(Box::new(
                    TypeExpr::primitive(ty),
                ))),
                _ => {
                    worklist.push(WorklistEntry {
                        name: next_interface.clone(),
                        node: items,
                    });
                    Ok(TypeExpr::Array(Box::new(TypeExpr::Named(next_interface))))
                }
            }
        }

        Shape::Union(parts) => {
            // Union members never spawn named interfaces from their own
            // type tag; they synthesize with an empty candidate name.
            let mut members = Vec::with_capacity(parts.len());
            for part in parts {
                members.push(synthesize(registry, part, "", worklist)?);
            }
            Ok(TypeExpr::Union(members))
        }

        Shape::ObjectInline(_) => {
            worklist.push(WorklistEntry {
                name: next_interface.clone(),
                node,
            });
            Ok(TypeExpr::Named(next_interface))
        }

        // allOf and enum act at declaration level; for type synthesis such
        // nodes resolve like a bare primitive.
        Shape::Composition(_) | Shape::EnumOf(_) => Ok(match node.schema_type.as_deref() {
            Some(ty) => TypeExpr::primitive(ty),
            None => TypeExpr::Any,
        }),

        Shape::Primitive(ty) => Ok(TypeExpr::primitive(ty)),

        Shape::Unknown => Ok(TypeExpr::Any),
    }
}
