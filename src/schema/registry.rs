//! SchemaRegistry - process-wide lookup of declared classes by name.
//!
//! Built once at startup and installed; read-only afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::{ClassSchema, GraphClass, SchemaError};

static GLOBAL: OnceLock<SchemaRegistry> = OnceLock::new();

/// Class schemas keyed by class name.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    classes: HashMap<String, ClassSchema>,
}

impl SchemaRegistry {
    pub fn builder() -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::default()
    }

    /// The installed registry, if any.
    pub fn global() -> Option<&'static SchemaRegistry> {
        GLOBAL.get()
    }

    /// Install as the process-wide registry. Only the first install wins.
    pub fn install(self) -> Result<&'static SchemaRegistry, SchemaError> {
        let mut pending = Some(self);
        let installed = GLOBAL.get_or_init(|| pending.take().unwrap_or_default());
        match pending {
            None => {
                tracing::debug!(classes = installed.len(), "installed schema registry");
                Ok(installed)
            }
            Some(_) => Err(SchemaError::AlreadyInstalled),
        }
    }

    pub fn get(&self, class_name: &str) -> Option<&ClassSchema> {
        self.classes.get(class_name)
    }

    pub fn contains(&self, class_name: &str) -> bool {
        self.classes.contains_key(class_name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassSchema> {
        self.classes.values()
    }
}

#[derive(Debug, Default)]
pub struct SchemaRegistryBuilder {
    classes: HashMap<String, ClassSchema>,
}

impl SchemaRegistryBuilder {
    pub fn register(mut self, schema: ClassSchema) -> Result<Self, SchemaError> {
        if self.classes.contains_key(schema.name()) {
            return Err(SchemaError::DuplicateClass(schema.name().to_string()));
        }
        self.classes.insert(schema.name().to_string(), schema);
        Ok(self)
    }

    pub fn register_class<C: GraphClass>(self) -> Result<Self, SchemaError> {
        self.register(C::schema().clone())
    }

    pub fn build(self) -> SchemaRegistry {
        SchemaRegistry {
            classes: self.classes,
        }
    }
}
