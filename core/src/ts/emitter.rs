#![deny(missing_docs)]

//! # Interface Emission
//!
//! Drains the worklist one entry at a time, rendering each into an
//! interface declaration. The worklist is a plain stack owned by the
//! emitter for the duration of one invocation: entries queued while a
//! parent interface is being rendered are drained before anything queued
//! earlier, which places nested interfaces directly after their parent.

use crate::error::AppResult;
use crate::oas::models::{AdditionalProperties, SchemaNode, SchemaRegistry};
use crate::oas::resolver::resolve_ref;
use crate::ts::naming::{camel_case, capitalize, sanitize};
use crate::ts::synth::{synthesize, WorklistEntry};
use crate::ts::types::{primitive_mapping, TypeExpr};
use crate::ts::Options;
use indexmap::IndexMap;

/// Renders every interface reachable from the registry's top-level object
/// definitions, in emission order, as logical lines.
pub(crate) struct Emitter<'a> {
    registry: &'a SchemaRegistry,
    options: &'a Options,
    worklist: Vec<WorklistEntry<'a>>,
    lines: Vec<String>,
}

impl<'a> Emitter<'a> {
    /// Creates an emitter over `registry` with an empty worklist.
    pub fn new(registry: &'a SchemaRegistry, options: &'a Options) -> Self {
        Self {
            registry,
            options,
            worklist: Vec::new(),
            lines: Vec::new(),
        }
    }

    /// Loads the top-level definitions and drains the worklist to
    /// completion, returning the emitted lines.
    pub fn run(mut self) -> AppResult<Vec<String>> {
        self.load_top_level();
        while let Some(entry) = self.worklist.pop() {
            self.build_next_interface(entry)?;
        }
        Ok(self.lines)
    }

    /// Queues every registry entry whose outer `type` is exactly `object`,
    /// sorted ascending by name. The stack is consumed from the end, so
    /// independent top-level interfaces emit in descending name order.
    /// Bare-array and bare-primitive definitions are not queued; they are
    /// still referenceable and flatten at their use sites.
    fn load_top_level(&mut self) {
        let mut entries: Vec<(&'a String, &'a SchemaNode)> = self
            .registry
            .iter()
            .filter(|(_, node)| node.schema_type.as_deref() == Some("object"))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (name, node) in entries {
            self.worklist.push(WorklistEntry {
                name: name.clone(),
                node,
            });
        }
    }

    /// Renders one worklist entry into an interface declaration, or skips
    /// it under the suppression rule.
    fn build_next_interface(&mut self, entry: WorklistEntry<'a>) -> AppResult<()> {
        let WorklistEntry { name, node } = entry;
        let registry = self.registry;

        // Accumulate own properties, then allOf parts: referenced parts
        // become supertypes, inline parts merge into the property map.
        // The merge is a plain union; later parts do not override keys
        // that are already present.
        let mut merged: IndexMap<&'a str, &'a SchemaNode> = IndexMap::new();
        if let Some(properties) = &node.properties {
            for (key, value) in properties {
                merged.insert(key.as_str(), value);
            }
        }

        let mut includes: Vec<String> = Vec::new();
        if let Some(parts) = &node.all_of {
            for part in parts {
                if let Some(pointer) = &part.reference {
                    let (ref_name, _) = resolve_ref(registry, pointer)?;
                    includes.push(ref_name.to_string());
                } else if let Some(properties) = &part.properties {
                    for (key, value) in properties {
                        merged.entry(key.as_str()).or_insert(value);
                    }
                }
            }
        }

        // Suppression: a propertyless entry whose type already flattened to
        // a mapped primitive at its use sites needs no interface.
        if merged.is_empty()
            && !matches!(
                node.additional_properties,
                Some(AdditionalProperties::Flag(true))
            )
            && node
                .schema_type
                .as_deref()
                .is_some_and(|ty| primitive_mapping(ty).is_some())
        {
            return Ok(());
        }

        let rendered_name = if self.options.camel_case {
            camel_case(&name)
        } else {
            name.clone()
        };
        let extending = if includes.is_empty() {
            String::new()
        } else {
            format!(" extends {}", includes.join(", "))
        };
        self.lines
            .push(format!("export interface {}{} {{", rendered_name, extending));

        let required = node.required.as_deref().unwrap_or_default();
        for (key, value) in &merged {
            let optional = !required.iter().any(|r| r == key);
            let formatted_key = if self.options.camel_case {
                camel_case(key)
            } else {
                (*key).to_string()
            };
            let field_name = format!(
                "{}{}",
                sanitize(&formatted_key),
                if optional { "?" } else { "" }
            );
            let nested_id = format!("{}{}", name, capitalize(&formatted_key));

            if let Some(description) = &value.description {
                self.lines.push(render_doc_comment(description));
            }

            // Enum literals win over everything else the property states,
            // including its type tag and nullable flag.
            if let Some(values) = &value.enum_values {
                let literal = TypeExpr::Union(
                    values
                        .iter()
                        .map(|value| TypeExpr::Literal(value.clone()))
                        .collect(),
                );
                self.lines.push(format!("{}: {};", field_name, literal));
                continue;
            }

            let mut field_type = synthesize(registry, value, &nested_id, &mut self.worklist)?;
            if value.nullable == Some(true) {
                field_type = TypeExpr::Union(vec![field_type, TypeExpr::Null]);
            }
            self.lines.push(format!("{}: {};", field_name, field_type));
        }

        match &node.additional_properties {
            Some(AdditionalProperties::Flag(true)) => {
                self.lines.push("[name: string]: any;".to_string());
            }
            // An index signature needs a type tag on the value schema.
            Some(AdditionalProperties::Schema(schema)) if schema.schema_type.is_some() => {
                let value_type = synthesize(registry, schema, "", &mut self.worklist)?;
                self.lines.push(format!("[name: string]: {};", value_type));
            }
            _ => {}
        }

        self.lines.push("}".to_string());
        Ok(())
    }
}

/// Renders a property description as a doc comment, re-prefixing interior
/// newlines so multi-line text stays inside the comment.
fn render_doc_comment(description: &str) -> String {
    let trimmed = description.strip_suffix('\n').unwrap_or(description);
    format!("/**\n* {}\n*/", trimmed.replace('\n', "\n* "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ts::Options;
    use pretty_assertions::assert_eq;

    fn registry(yaml: &str) -> SchemaRegistry {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn emit(yaml: &str) -> Vec<String> {
        let registry = registry(yaml);
        let options = Options::default();
        Emitter::new(&registry, &options).run().unwrap()
    }

    #[test]
    fn test_top_level_descending_order() {
        let lines = emit(
            r#"
Alpha: { type: object, properties: { a: { type: string } } }
Zulu: { type: object, properties: { z: { type: string } } }
"#,
        );
        let interfaces: Vec<&String> = lines
            .iter()
            .filter(|l| l.starts_with("export interface"))
            .collect();
        assert_eq!(
            interfaces,
            [
                "export interface Zulu {",
                "export interface Alpha {"
            ]
        );
    }

    #[test]
    fn test_nested_interface_emits_directly_after_parent() {
        let lines = emit(
            r#"
Alpha:
  type: object
  properties:
    inner:
      type: object
      properties:
        id: { type: string }
Zulu: { type: object, properties: { z: { type: string } } }
"#,
        );
        let interfaces: Vec<&String> = lines
            .iter()
            .filter(|l| l.starts_with("export interface"))
            .collect();
        assert_eq!(
            interfaces,
            [
                "export interface Zulu {",
                "export interface Alpha {",
                "export interface AlphaInner {"
            ]
        );
    }

    #[test]
    fn test_suppresses_flattened_alias_entries() {
        let registry = registry("{}");
        let options = Options::default();
        let mut emitter = Emitter::new(&registry, &options);
        let alias: SchemaNode = serde_yaml::from_str("type: string").unwrap();
        emitter.worklist.push(WorklistEntry {
            name: "Alias".into(),
            node: &alias,
        });
        while let Some(entry) = emitter.worklist.pop() {
            emitter.build_next_interface(entry).unwrap();
        }
        assert!(emitter.lines.is_empty());
    }

    #[test]
    fn test_empty_object_still_emits_an_interface() {
        // `object` has no primitive mapping, so suppression does not fire.
        let lines = emit("Empty: { type: object }");
        assert_eq!(lines, ["export interface Empty {", "}"]);
    }

    #[test]
    fn test_all_of_required_lists_are_ignored() {
        // Only the entry node's own required set drives optionality.
        let lines = emit(
            r#"
Admin:
  type: object
  allOf:
    - type: object
      properties:
        rbac: { type: string }
      required: [rbac]
"#,
        );
        assert!(lines.contains(&"rbac?: string;".to_string()));
    }

    #[test]
    fn test_all_of_merge_keeps_first_key() {
        let lines = emit(
            r#"
Admin:
  type: object
  properties:
    id: { type: string }
  allOf:
    - type: object
      properties:
        id: { type: integer }
"#,
        );
        assert!(lines.contains(&"id?: string;".to_string()));
    }

    #[test]
    fn test_doc_comment_rendering() {
        assert_eq!(
            render_doc_comment("one line\n"),
            "/**\n* one line\n*/"
        );
        assert_eq!(
            render_doc_comment("first\nsecond"),
            "/**\n* first\n* second\n*/"
        );
    }
}
