//! Gateway - the four primitive operations against the store.
//!
//! A gateway answers every call with the raw [`Envelope`] the store sent;
//! decoding is left to [`ResultSet`](crate::ResultSet). Transport failures
//! are the only errors a gateway reports.

mod config;
#[cfg(feature = "http")]
mod http;
mod in_memory;
pub mod sql;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::response::Envelope;

pub use config::GatewayConfig;
#[cfg(feature = "http")]
pub use http::HttpGateway;
pub use in_memory::InMemoryGateway;

/// Property name to value, ordered by name.
pub type PropertyMap = BTreeMap<String, Value>;

/// Equality criteria, combined with AND. Keys are store-native names.
pub type Criteria = BTreeMap<String, Value>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[cfg(feature = "http")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("cannot build command: {0}")]
    Query(String),

    #[error("invalid gateway configuration: {0}")]
    Config(String),

    #[error("gateway lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

/// The store's primitive operations.
pub trait Gateway: Send + Sync {
    /// Every record of a class.
    fn get_all(&self, class_name: &str) -> Result<Envelope, GatewayError>;

    /// Records of a class matching all criteria.
    fn filter(&self, class_name: &str, criteria: &Criteria) -> Result<Envelope, GatewayError>;

    /// Insert one vertex.
    fn add_to_class(
        &self,
        class_name: &str,
        properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError>;

    /// Insert one edge from `from_id` to `to_id`.
    fn add_edge(
        &self,
        class_name: &str,
        from_id: &str,
        to_id: &str,
        properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError>;
}

impl<G: Gateway + ?Sized> Gateway for &G {
    fn get_all(&self, class_name: &str) -> Result<Envelope, GatewayError> {
        (**self).get_all(class_name)
    }

    fn filter(&self, class_name: &str, criteria: &Criteria) -> Result<Envelope, GatewayError> {
        (**self).filter(class_name, criteria)
    }

    fn add_to_class(
        &self,
        class_name: &str,
        properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError> {
        (**self).add_to_class(class_name, properties)
    }

    fn add_edge(
        &self,
        class_name: &str,
        from_id: &str,
        to_id: &str,
        properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError> {
        (**self).add_edge(class_name, from_id, to_id, properties)
    }
}

impl<G: Gateway + ?Sized> Gateway for Arc<G> {
    fn get_all(&self, class_name: &str) -> Result<Envelope, GatewayError> {
        (**self).get_all(class_name)
    }

    fn filter(&self, class_name: &str, criteria: &Criteria) -> Result<Envelope, GatewayError> {
        (**self).filter(class_name, criteria)
    }

    fn add_to_class(
        &self,
        class_name: &str,
        properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError> {
        (**self).add_to_class(class_name, properties)
    }

    fn add_edge(
        &self,
        class_name: &str,
        from_id: &str,
        to_id: &str,
        properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError> {
        (**self).add_edge(class_name, from_id, to_id, properties)
    }
}
