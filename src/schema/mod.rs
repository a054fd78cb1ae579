//! Class schemas - explicit declarations of node and edge classes.
//!
//! Each class declares its property names and types once, either by hand
//! through [`ClassSchema::node`] / [`ClassSchema::edge`], or with the
//! `Node` / `Edge` derives:
//!
//! ```ignore
//! use orient_rust::Node;
//!
//! #[derive(Serialize, Deserialize, Node)]
//! struct Person {
//!     id: Option<String>,
//!     name: String,
//!     #[orient(type = "date")]
//!     born: String,
//! }
//!
//! assert_eq!(Person::schema().property("born"), Some(PropertyType::Date));
//! ```

mod builder;
mod registry;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::property::PropertyType;

pub use builder::ClassSchemaBuilder;
pub use registry::{SchemaRegistry, SchemaRegistryBuilder};

/// Whether a class holds vertices or edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassKind {
    Node,
    Edge,
}

impl fmt::Display for ClassKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassKind::Node => f.write_str("node"),
            ClassKind::Edge => f.write_str("edge"),
        }
    }
}

/// The declared shape of one class.
///
/// Deserializing goes through [`ClassSchemaBuilder`], so a schema read from
/// a document is checked like one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawClassSchema")]
pub struct ClassSchema {
    name: String,
    kind: ClassKind,
    properties: BTreeMap<String, PropertyType>,
}

impl ClassSchema {
    pub fn node(name: impl Into<String>) -> ClassSchemaBuilder {
        ClassSchemaBuilder::new(name, ClassKind::Node)
    }

    pub fn edge(name: impl Into<String>) -> ClassSchemaBuilder {
        ClassSchemaBuilder::new(name, ClassKind::Edge)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ClassKind {
        self.kind
    }

    pub fn properties(&self) -> &BTreeMap<String, PropertyType> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<PropertyType> {
        self.properties.get(name).copied()
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}

#[derive(Deserialize)]
struct RawClassSchema {
    name: String,
    kind: ClassKind,
    #[serde(default)]
    properties: BTreeMap<String, PropertyType>,
}

impl TryFrom<RawClassSchema> for ClassSchema {
    type Error = SchemaError;

    fn try_from(raw: RawClassSchema) -> Result<Self, Self::Error> {
        raw.properties
            .into_iter()
            .fold(ClassSchemaBuilder::new(raw.name, raw.kind), |builder, (name, ty)| {
                builder.property(name, ty)
            })
            .build()
    }
}

/// A Rust type bound to a class schema.
///
/// Usually derived; see the `Node` and `Edge` derive macros.
pub trait GraphClass {
    const CLASS_NAME: &'static str;

    fn schema() -> &'static ClassSchema;
}

/// A class whose records are vertices.
pub trait NodeClass: GraphClass {}

/// A class whose records are edges.
pub trait EdgeClass: GraphClass {}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("class name must not be empty")]
    EmptyClassName,

    #[error("invalid property name {property:?} on class {class}")]
    InvalidPropertyName { class: String, property: String },

    #[error("property name {property:?} on class {class} is reserved")]
    ReservedProperty { class: String, property: String },

    #[error("property {property} is declared twice on class {class}")]
    DuplicateProperty { class: String, property: String },

    #[error("class {0} is registered twice")]
    DuplicateClass(String),

    #[error("a schema registry is already installed")]
    AlreadyInstalled,
}
