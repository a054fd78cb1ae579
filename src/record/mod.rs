//! Records decoded from query responses.

mod record_id;

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::OrmError;

pub use record_id::{RecordId, RecordIdParseError};

/// A record materialized from one element of a response's `result` array.
///
/// Holds the decoded properties plus two synthesized attributes: the
/// record's identifier (from `@rid`) and its class tag (from `@class`).
/// Records are plain values; nothing is written back to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: Option<String>,
    class_name: String,
    properties: Map<String, Value>,
}

impl Record {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            id: None,
            class_name: class_name.into(),
            properties: Map::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The identifier parsed into its native form, if it has one.
    pub fn record_id(&self) -> Option<RecordId> {
        self.id.as_deref().and_then(|id| id.parse().ok())
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Look up a decoded property. The synthesized `id` and `class_name`
    /// are not properties; use their accessors.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Source vertex of an edge record.
    pub fn out_vertex(&self) -> Option<&str> {
        self.get("out_vertex").and_then(Value::as_str)
    }

    /// Target vertex of an edge record.
    pub fn in_vertex(&self) -> Option<&str> {
        self.get("in_vertex").and_then(Value::as_str)
    }

    pub(crate) fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    pub(crate) fn insert(&mut self, name: String, value: Value) {
        self.properties.insert(name, value);
    }

    /// Deserialize the record into `T`.
    ///
    /// The deserializer sees every property plus `id` and `class_name`,
    /// so structs may declare either as a field.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, OrmError> {
        let mut object = self.properties.clone();
        if let Some(id) = &self.id {
            object.insert("id".to_string(), Value::String(id.clone()));
        }
        object.insert(
            "class_name".to_string(),
            Value::String(self.class_name.clone()),
        );
        serde_json::from_value(Value::Object(object)).map_err(OrmError::Decode)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.id {
            Some(id) => write!(f, "{}({})", self.class_name, id),
            None => write!(f, "{}", self.class_name),
        }
    }
}

/// Something an edge can be attached to.
///
/// Anything exposing an identifier and a class name qualifies, which in
/// practice means a record returned by an earlier create or query.
pub trait Endpoint {
    fn endpoint_id(&self) -> Option<&str>;
    fn endpoint_class(&self) -> Option<&str>;
}

impl Endpoint for Record {
    fn endpoint_id(&self) -> Option<&str> {
        self.id()
    }

    fn endpoint_class(&self) -> Option<&str> {
        Some(self.class_name())
    }
}

impl<T: Endpoint + ?Sized> Endpoint for &T {
    fn endpoint_id(&self) -> Option<&str> {
        (**self).endpoint_id()
    }

    fn endpoint_class(&self) -> Option<&str> {
        (**self).endpoint_class()
    }
}
