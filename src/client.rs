//! GraphClient - owns a gateway and a type registry, hands out managers.

use crate::error::OrmError;
use crate::gateway::Gateway;
use crate::manager::{BaseManager, EdgeManager, NodeManager};
use crate::property::{StandardTypes, TypeRegistry};
use crate::schema::{ClassKind, ClassSchema, EdgeClass, NodeClass, SchemaRegistry};

/// Entry point for working with one store.
pub struct GraphClient<G, R = StandardTypes> {
    gateway: G,
    types: R,
}

impl<G: Gateway> GraphClient<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            types: StandardTypes,
        }
    }
}

impl<G: Gateway, R: TypeRegistry> GraphClient<G, R> {
    pub fn with_types(gateway: G, types: R) -> Self {
        Self { gateway, types }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn types(&self) -> &R {
        &self.types
    }

    /// Manager for a declared vertex class.
    pub fn nodes<C: NodeClass>(&self) -> NodeManager<'_, G, R> {
        NodeManager::new(self.base(C::schema()))
    }

    /// Manager for a declared edge class.
    pub fn edges<C: EdgeClass>(&self) -> EdgeManager<'_, G, R> {
        EdgeManager::new(self.base(C::schema()))
    }

    /// Manager for a vertex class built at runtime.
    pub fn node_manager<'s>(
        &'s self,
        schema: &'s ClassSchema,
    ) -> Result<NodeManager<'s, G, R>, OrmError> {
        expect_kind(schema, ClassKind::Node)?;
        Ok(NodeManager::new(self.base(schema)))
    }

    /// Manager for an edge class built at runtime.
    pub fn edge_manager<'s>(
        &'s self,
        schema: &'s ClassSchema,
    ) -> Result<EdgeManager<'s, G, R>, OrmError> {
        expect_kind(schema, ClassKind::Edge)?;
        Ok(EdgeManager::new(self.base(schema)))
    }

    /// Manager for a vertex class in the installed [`SchemaRegistry`].
    pub fn registered_nodes(&self, class_name: &str) -> Result<NodeManager<'_, G, R>, OrmError> {
        self.node_manager(registered(class_name)?)
    }

    /// Manager for an edge class in the installed [`SchemaRegistry`].
    pub fn registered_edges(&self, class_name: &str) -> Result<EdgeManager<'_, G, R>, OrmError> {
        self.edge_manager(registered(class_name)?)
    }

    fn base<'s>(&'s self, schema: &'s ClassSchema) -> BaseManager<'s, G, R> {
        BaseManager::new(&self.gateway, &self.types, schema)
    }
}

fn expect_kind(schema: &ClassSchema, expected: ClassKind) -> Result<(), OrmError> {
    if schema.kind() == expected {
        Ok(())
    } else {
        Err(OrmError::ClassKindMismatch {
            class: schema.name().to_string(),
            expected,
            actual: schema.kind(),
        })
    }
}

fn registered(class_name: &str) -> Result<&'static ClassSchema, OrmError> {
    SchemaRegistry::global()
        .and_then(|registry| registry.get(class_name))
        .ok_or_else(|| OrmError::UnregisteredClass(class_name.to_string()))
}
