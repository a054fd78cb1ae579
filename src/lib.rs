//! A thin graph ORM for OrientDB-style stores.
//!
//! Declare node and edge classes, create and filter records through
//! per-class managers, and get back records decoded from the store's
//! `@rid`/`@class`-tagged JSON.

mod client;
mod error;
pub mod gateway;
mod manager;
mod property;
mod record;
mod response;
mod schema;

pub use client::GraphClient;
pub use error::{OrmError, OrmResult};
pub use gateway::{Criteria, Gateway, GatewayConfig, GatewayError, InMemoryGateway, PropertyMap};
#[cfg(feature = "http")]
pub use gateway::HttpGateway;
pub use manager::{BaseManager, EdgeManager, NodeManager, ID_KEY};
pub use property::{
    PropertyType, StandardTypes, TypeRegistry, TypeValidationError, UnknownPropertyType,
    DATETIME_FORMAT, DATE_FORMAT,
};
pub use record::{Endpoint, Record, RecordId, RecordIdParseError};
pub use response::{
    Envelope, ResultSet, CLASS_FIELD, META_PREFIX, REPR_OUTPUT_SIZE, RID_FIELD,
    TRUNCATION_MARKER, UNAUTHORIZED_STATUS,
};
pub use schema::{
    ClassKind, ClassSchema, ClassSchemaBuilder, EdgeClass, GraphClass, NodeClass, SchemaError,
    SchemaRegistry, SchemaRegistryBuilder,
};

// Re-export the derive macros
pub use orient_rust_macros::{Edge, Node};
