//! Test domain: people, places and the edges between them.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use orient_rust::{
    Criteria, Edge, Envelope, Gateway, GatewayError, InMemoryGateway, Node, PropertyMap,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Node)]
pub struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub age: Option<i32>,
    #[orient(type = "date")]
    pub born: Option<String>,
}

impl Person {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            age: None,
            born: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Node)]
#[orient(class = "City")]
pub struct Place {
    pub id: Option<String>,
    pub name: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Edge)]
pub struct Knows {
    pub id: Option<String>,
    pub out_vertex: Option<String>,
    pub in_vertex: Option<String>,
    pub since: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Edge)]
pub struct LivesIn {
    pub out_vertex: Option<String>,
    pub in_vertex: Option<String>,
    #[orient(type = "datetime")]
    pub moved: Option<String>,
}

/// Counts calls on the way to an in-memory store.
#[derive(Default)]
pub struct CountingGateway {
    pub inner: InMemoryGateway,
    calls: AtomicUsize,
}

impl CountingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

impl Gateway for CountingGateway {
    fn get_all(&self, class_name: &str) -> Result<Envelope, GatewayError> {
        self.tick();
        self.inner.get_all(class_name)
    }

    fn filter(&self, class_name: &str, criteria: &Criteria) -> Result<Envelope, GatewayError> {
        self.tick();
        self.inner.filter(class_name, criteria)
    }

    fn add_to_class(
        &self,
        class_name: &str,
        properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError> {
        self.tick();
        self.inner.add_to_class(class_name, properties)
    }

    fn add_edge(
        &self,
        class_name: &str,
        from_id: &str,
        to_id: &str,
        properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError> {
        self.tick();
        self.inner.add_edge(class_name, from_id, to_id, properties)
    }
}

/// A gateway whose transport is always down.
pub struct OfflineGateway;

impl Gateway for OfflineGateway {
    fn get_all(&self, _class_name: &str) -> Result<Envelope, GatewayError> {
        Err(GatewayError::Config("offline".into()))
    }

    fn filter(&self, _class_name: &str, _criteria: &Criteria) -> Result<Envelope, GatewayError> {
        Err(GatewayError::Config("offline".into()))
    }

    fn add_to_class(
        &self,
        _class_name: &str,
        _properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError> {
        Err(GatewayError::Config("offline".into()))
    }

    fn add_edge(
        &self,
        _class_name: &str,
        _from_id: &str,
        _to_id: &str,
        _properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError> {
        Err(GatewayError::Config("offline".into()))
    }
}
