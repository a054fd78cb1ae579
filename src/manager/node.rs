use std::ops::Deref;

use serde::Serialize;
use serde_json::Value;

use super::BaseManager;
use crate::error::OrmError;
use crate::gateway::Gateway;
use crate::property::TypeRegistry;
use crate::record::Record;

/// Manager for vertex classes.
pub struct NodeManager<'a, G, R> {
    base: BaseManager<'a, G, R>,
}

impl<'a, G: Gateway, R: TypeRegistry> NodeManager<'a, G, R> {
    pub fn new(base: BaseManager<'a, G, R>) -> Self {
        Self { base }
    }

    /// Insert a vertex and return the stored record.
    ///
    /// Every key must be a declared property; values are converted to
    /// their declared types first.
    pub fn create<I, K, V>(&self, values: I) -> Result<Record, OrmError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let properties = self.base.build_properties(values)?;
        tracing::debug!(
            class = self.class_name(),
            properties = properties.len(),
            "creating vertex"
        );
        let envelope = self
            .base
            .gateway()
            .add_to_class(self.class_name(), &properties)?;
        self.base.created(envelope, "create")
    }

    /// Insert a vertex from a serializable model.
    pub fn create_from<T: Serialize>(&self, model: &T) -> Result<Record, OrmError> {
        let values = self.base.model_values(model)?;
        self.create(values)
    }
}

impl<'a, G, R> Deref for NodeManager<'a, G, R> {
    type Target = BaseManager<'a, G, R>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
