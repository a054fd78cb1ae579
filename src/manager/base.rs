use serde::Serialize;
use serde_json::Value;

use crate::error::OrmError;
use crate::gateway::{Criteria, Gateway, PropertyMap};
use crate::property::{PropertyType, TypeRegistry};
use crate::record::Record;
use crate::response::{Envelope, ResultSet, RID_FIELD};
use crate::schema::{ClassKind, ClassSchema};

/// Pseudo-property addressing a record by its identifier in filters.
pub const ID_KEY: &str = "id";

/// Queries shared by node and edge managers.
pub struct BaseManager<'a, G, R> {
    gateway: &'a G,
    types: &'a R,
    schema: &'a ClassSchema,
}

impl<'a, G: Gateway, R: TypeRegistry> BaseManager<'a, G, R> {
    pub fn new(gateway: &'a G, types: &'a R, schema: &'a ClassSchema) -> Self {
        Self {
            gateway,
            types,
            schema,
        }
    }

    pub fn schema(&self) -> &'a ClassSchema {
        self.schema
    }

    pub fn class_name(&self) -> &'a str {
        self.schema.name()
    }

    /// Every record of the class.
    pub fn all(&self) -> Result<ResultSet, OrmError> {
        tracing::debug!(class = self.class_name(), "fetching all records");
        let envelope = self.gateway.get_all(self.class_name())?;
        ResultSet::from_envelope(envelope)
    }

    /// Records whose properties equal all given values.
    ///
    /// Keys must be declared properties or `id`; `id` matches the record
    /// identifier.
    pub fn filter<I, K, V>(&self, criteria: I) -> Result<ResultSet, OrmError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut native = Criteria::new();
        for (key, value) in criteria {
            let key = key.into();
            if key == ID_KEY {
                native.insert(RID_FIELD.to_string(), value.into());
            } else {
                self.declared_type(&key)?;
                native.insert(key, value.into());
            }
        }

        tracing::debug!(class = self.class_name(), criteria = native.len(), "filtering records");
        let envelope = self.gateway.filter(self.class_name(), &native)?;
        ResultSet::from_envelope(envelope)
    }

    /// The record with the given identifier, or `None`.
    pub fn get_by_id(&self, id: &str) -> Result<Option<Record>, OrmError> {
        Ok(self.filter([(ID_KEY, id)])?.into_first())
    }

    fn declared_type(&self, property: &str) -> Result<PropertyType, OrmError> {
        self.schema
            .property(property)
            .ok_or_else(|| OrmError::UnknownProperty {
                property: property.to_string(),
                class: self.class_name().to_string(),
            })
    }

    /// Convert one value to its declared type.
    pub(crate) fn property_value(
        &self,
        name: &str,
        value: &Value,
        ty: PropertyType,
    ) -> Result<Value, OrmError> {
        self.types.validate_and_convert(value, ty).map_err(|err| {
            tracing::debug!(class = self.class_name(), property = name, %err, "rejected value");
            OrmError::from(err)
        })
    }

    /// Validate and convert caller-supplied properties for an insert.
    pub(crate) fn build_properties<I, K, V>(&self, values: I) -> Result<PropertyMap, OrmError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut properties = PropertyMap::new();
        for (key, value) in values {
            let key = key.into();
            let ty = self.declared_type(&key)?;
            let converted = self.property_value(&key, &value.into(), ty)?;
            properties.insert(key, converted);
        }
        Ok(properties)
    }

    /// Properties of a serializable model, minus the attributes the store
    /// synthesizes and unset values.
    pub(crate) fn model_values<T: Serialize>(&self, model: &T) -> Result<PropertyMap, OrmError> {
        let value = serde_json::to_value(model).map_err(OrmError::Encode)?;
        let Value::Object(object) = value else {
            return Err(OrmError::Encode(serde::ser::Error::custom(
                "models must serialize to a map",
            )));
        };

        let synthesized: &[&str] = match self.schema.kind() {
            ClassKind::Node => &["id", "class_name"],
            ClassKind::Edge => &["id", "class_name", "in_vertex", "out_vertex"],
        };
        Ok(object
            .into_iter()
            .filter(|(key, value)| !value.is_null() && !synthesized.contains(&key.as_str()))
            .collect())
    }

    pub(crate) fn gateway(&self) -> &'a G {
        self.gateway
    }

    /// The record an insert answered with.
    pub(crate) fn created(
        &self,
        envelope: Envelope,
        operation: &'static str,
    ) -> Result<Record, OrmError> {
        ResultSet::from_envelope(envelope)?
            .into_first()
            .ok_or_else(|| OrmError::EmptyResponse {
                class: self.class_name().to_string(),
                operation,
            })
    }
}
