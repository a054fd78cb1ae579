use std::ops::Deref;

use serde::Serialize;
use serde_json::Value;

use super::BaseManager;
use crate::error::OrmError;
use crate::gateway::Gateway;
use crate::property::TypeRegistry;
use crate::record::{Endpoint, Record};

/// Manager for edge classes.
pub struct EdgeManager<'a, G, R> {
    base: BaseManager<'a, G, R>,
}

impl<'a, G: Gateway, R: TypeRegistry> EdgeManager<'a, G, R> {
    pub fn new(base: BaseManager<'a, G, R>) -> Self {
        Self { base }
    }

    /// Connect `from` to `to` and return the stored edge.
    ///
    /// Both endpoints must be records the store has assigned an identifier;
    /// properties are checked as for vertices.
    pub fn create<F, T, I, K, V>(&self, from: F, to: T, values: I) -> Result<Record, OrmError>
    where
        F: Endpoint,
        T: Endpoint,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let from_id = endpoint_id("from", &from)?;
        let to_id = endpoint_id("to", &to)?;
        let properties = self.base.build_properties(values)?;

        tracing::debug!(
            class = self.class_name(),
            from = from_id,
            to = to_id,
            properties = properties.len(),
            "creating edge"
        );
        let envelope =
            self.base
                .gateway()
                .add_edge(self.class_name(), from_id, to_id, &properties)?;
        self.base.created(envelope, "create")
    }

    /// Connect two records with an edge built from a serializable model.
    pub fn create_from<F, T, M>(&self, from: F, to: T, model: &M) -> Result<Record, OrmError>
    where
        F: Endpoint,
        T: Endpoint,
        M: Serialize,
    {
        let values = self.base.model_values(model)?;
        self.create(from, to, values)
    }
}

fn endpoint_id<'e, E: Endpoint>(argument: &'static str, endpoint: &'e E) -> Result<&'e str, OrmError> {
    let invalid = |reason: &str| OrmError::InvalidEndpoint {
        argument,
        reason: reason.to_string(),
    };

    let id = endpoint
        .endpoint_id()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| invalid("it has no record id"))?;
    endpoint
        .endpoint_class()
        .filter(|class| !class.is_empty())
        .ok_or_else(|| invalid("it has no class name"))?;
    Ok(id)
}

impl<'a, G, R> Deref for EdgeManager<'a, G, R> {
    type Target = BaseManager<'a, G, R>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}
