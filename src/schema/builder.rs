use std::collections::BTreeMap;

use super::{ClassKind, ClassSchema, SchemaError};
use crate::property::PropertyType;

/// Attribute names synthesized on every record.
const SYNTHESIZED: [&str; 2] = ["id", "class_name"];

/// Native and renamed edge endpoint keys. Decoding renames `in` and `out`
/// on every record, so no class may declare any of them.
const ENDPOINTS: [&str; 4] = ["in", "out", "in_vertex", "out_vertex"];

/// Collects property declarations and validates them on `build`.
#[derive(Debug, Clone)]
pub struct ClassSchemaBuilder {
    name: String,
    kind: ClassKind,
    properties: Vec<(String, PropertyType)>,
}

impl ClassSchemaBuilder {
    pub(crate) fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            properties: Vec::new(),
        }
    }

    pub fn property(mut self, name: impl Into<String>, ty: PropertyType) -> Self {
        self.properties.push((name.into(), ty));
        self
    }

    pub fn build(self) -> Result<ClassSchema, SchemaError> {
        if self.name.trim().is_empty() {
            return Err(SchemaError::EmptyClassName);
        }

        let mut properties = BTreeMap::new();
        for (property, ty) in self.properties {
            if !is_identifier(&property) {
                return Err(SchemaError::InvalidPropertyName {
                    class: self.name,
                    property,
                });
            }
            if is_reserved(&property) {
                return Err(SchemaError::ReservedProperty {
                    class: self.name,
                    property,
                });
            }
            if properties.contains_key(&property) {
                return Err(SchemaError::DuplicateProperty {
                    class: self.name,
                    property,
                });
            }
            properties.insert(property, ty);
        }

        Ok(ClassSchema {
            name: self.name,
            kind: self.kind,
            properties,
        })
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn is_reserved(name: &str) -> bool {
    SYNTHESIZED.contains(&name) || ENDPOINTS.contains(&name)
}
