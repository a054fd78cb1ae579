//! Property types - the closed set of types a class property may declare.
//!
//! A [`TypeRegistry`] validates raw values against a declared
//! [`PropertyType`] and converts them where a lossless conversion exists.
//! [`StandardTypes`] is the registry used unless a client is built with its
//! own.

mod registry;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use registry::{StandardTypes, TypeRegistry, DATETIME_FORMAT, DATE_FORMAT};

/// Property types understood by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Boolean,
    Short,
    Integer,
    Long,
    Float,
    Double,
    String,
    Date,
    DateTime,
    Link,
    EmbeddedList,
    EmbeddedMap,
}

impl PropertyType {
    pub const ALL: [PropertyType; 12] = [
        PropertyType::Boolean,
        PropertyType::Short,
        PropertyType::Integer,
        PropertyType::Long,
        PropertyType::Float,
        PropertyType::Double,
        PropertyType::String,
        PropertyType::Date,
        PropertyType::DateTime,
        PropertyType::Link,
        PropertyType::EmbeddedList,
        PropertyType::EmbeddedMap,
    ];

    /// Lowercase name, as accepted by `#[orient(type = "...")]`.
    pub fn name(&self) -> &'static str {
        match self {
            PropertyType::Boolean => "boolean",
            PropertyType::Short => "short",
            PropertyType::Integer => "integer",
            PropertyType::Long => "long",
            PropertyType::Float => "float",
            PropertyType::Double => "double",
            PropertyType::String => "string",
            PropertyType::Date => "date",
            PropertyType::DateTime => "datetime",
            PropertyType::Link => "link",
            PropertyType::EmbeddedList => "embeddedlist",
            PropertyType::EmbeddedMap => "embeddedmap",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown property type {0:?}")]
pub struct UnknownPropertyType(pub String);

impl FromStr for PropertyType {
    type Err = UnknownPropertyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        PropertyType::ALL
            .into_iter()
            .find(|ty| ty.name() == lower)
            .ok_or_else(|| UnknownPropertyType(s.to_string()))
    }
}

/// A raw value could not be converted to its declared type.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot convert {value} to {expected}: {reason}")]
pub struct TypeValidationError {
    pub expected: PropertyType,
    pub value: Value,
    pub reason: String,
}

impl TypeValidationError {
    pub fn new(expected: PropertyType, value: &Value, reason: impl Into<String>) -> Self {
        Self {
            expected,
            value: value.clone(),
            reason: reason.into(),
        }
    }
}
