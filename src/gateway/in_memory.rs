//! InMemoryGateway - a store held in process memory, for tests and development.
//!
//! Answers with the same wire shape the REST endpoint produces, so the
//! result parser sees realistic envelopes.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::{json, Map, Value};

use super::{Criteria, Gateway, GatewayError, PropertyMap};
use crate::record::RecordId;
use crate::response::{Envelope, CLASS_FIELD, RID_FIELD, UNAUTHORIZED_STATUS};

/// Cluster id given to the first class written.
const FIRST_CLUSTER: i64 = 10;

struct StoredRecord {
    rid: RecordId,
    class: String,
    version: u64,
    fields: Map<String, Value>,
}

impl StoredRecord {
    fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("@type".into(), json!("d"));
        object.insert(RID_FIELD.into(), json!(self.rid.to_string()));
        object.insert("@version".into(), json!(self.version));
        object.insert(CLASS_FIELD.into(), json!(self.class));
        for (key, value) in &self.fields {
            object.insert(key.clone(), value.clone());
        }
        Value::Object(object)
    }

    fn matches(&self, criteria: &Criteria) -> bool {
        criteria.iter().all(|(key, expected)| match key.as_str() {
            RID_FIELD => expected.as_str() == Some(self.rid.to_string().as_str()),
            CLASS_FIELD => expected.as_str() == Some(self.class.as_str()),
            _ => match self.fields.get(key) {
                Some(actual) => actual == expected,
                None => expected.is_null(),
            },
        })
    }

    /// Append `link` to the list property `key`.
    fn push_link(&mut self, key: String, link: RecordId) {
        let entry = self.fields.entry(key).or_insert_with(|| json!([]));
        if let Value::Array(links) = entry {
            links.push(json!(link.to_string()));
        }
        self.version += 1;
    }
}

#[derive(Default)]
struct Store {
    clusters: HashMap<String, i64>,
    next_position: HashMap<i64, i64>,
    records: Vec<StoredRecord>,
}

impl Store {
    fn allocate(&mut self, class_name: &str) -> RecordId {
        let next_cluster = FIRST_CLUSTER + self.clusters.len() as i64;
        let cluster = *self
            .clusters
            .entry(class_name.to_string())
            .or_insert(next_cluster);
        let position = self.next_position.entry(cluster).or_insert(0);
        let rid = RecordId::new(cluster, *position);
        *position += 1;
        rid
    }

    fn insert(&mut self, class_name: &str, fields: Map<String, Value>) -> &StoredRecord {
        let rid = self.allocate(class_name);
        self.records.push(StoredRecord {
            rid,
            class: class_name.to_string(),
            version: 1,
            fields,
        });
        &self.records[self.records.len() - 1]
    }

    fn position_of(&self, id: &str) -> Option<usize> {
        let rid = id.parse::<RecordId>().ok()?;
        self.records.iter().position(|r| r.rid == rid)
    }
}

/// In-memory gateway backed by a shared store.
///
/// Clones share storage, so a test can keep a handle while a client owns
/// another.
#[derive(Clone)]
pub struct InMemoryGateway {
    store: Arc<RwLock<Store>>,
    authorized: bool,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::default())),
            authorized: true,
        }
    }

    /// A gateway that answers every call with a `401`.
    pub fn unauthorized() -> Self {
        Self {
            authorized: false,
            ..Self::new()
        }
    }

    /// Number of stored records, vertices and edges together.
    pub fn len(&self) -> usize {
        self.store.read().map(|s| s.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn denied() -> Envelope {
        Envelope::new(UNAUTHORIZED_STATUS, "401 Unauthorized.")
    }

    fn results<'a>(records: impl Iterator<Item = &'a StoredRecord>) -> Envelope {
        let result: Vec<Value> = records.map(StoredRecord::to_json).collect();
        Envelope::ok(json!({ "result": result }).to_string())
    }

    fn command_error(message: String) -> Envelope {
        tracing::debug!(%message, "in-memory command failed");
        Envelope::new(
            "500",
            json!({ "errors": [{ "code": 500, "reason": 500, "content": message }] }).to_string(),
        )
    }
}

fn to_fields(properties: &PropertyMap) -> Map<String, Value> {
    properties
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}

impl Gateway for InMemoryGateway {
    fn get_all(&self, class_name: &str) -> Result<Envelope, GatewayError> {
        if !self.authorized {
            return Ok(Self::denied());
        }
        let store = self
            .store
            .read()
            .map_err(|_| GatewayError::LockPoisoned("get_all"))?;
        Ok(Self::results(
            store.records.iter().filter(|r| r.class == class_name),
        ))
    }

    fn filter(&self, class_name: &str, criteria: &Criteria) -> Result<Envelope, GatewayError> {
        if !self.authorized {
            return Ok(Self::denied());
        }
        let store = self
            .store
            .read()
            .map_err(|_| GatewayError::LockPoisoned("filter"))?;
        Ok(Self::results(
            store
                .records
                .iter()
                .filter(|r| r.class == class_name && r.matches(criteria)),
        ))
    }

    fn add_to_class(
        &self,
        class_name: &str,
        properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError> {
        if !self.authorized {
            return Ok(Self::denied());
        }
        let mut store = self
            .store
            .write()
            .map_err(|_| GatewayError::LockPoisoned("add_to_class"))?;
        let record = store.insert(class_name, to_fields(properties));
        tracing::debug!(class = class_name, rid = %record.rid, "stored vertex");
        Ok(Self::results(std::iter::once(record)))
    }

    fn add_edge(
        &self,
        class_name: &str,
        from_id: &str,
        to_id: &str,
        properties: &PropertyMap,
    ) -> Result<Envelope, GatewayError> {
        if !self.authorized {
            return Ok(Self::denied());
        }
        let mut store = self
            .store
            .write()
            .map_err(|_| GatewayError::LockPoisoned("add_edge"))?;

        let Some(from) = store.position_of(from_id) else {
            return Ok(Self::command_error(format!("source vertex {} not found", from_id)));
        };
        let Some(to) = store.position_of(to_id) else {
            return Ok(Self::command_error(format!("target vertex {} not found", to_id)));
        };

        let from_rid = store.records[from].rid;
        let to_rid = store.records[to].rid;

        let mut fields = to_fields(properties);
        fields.insert("out".into(), json!(from_rid.to_string()));
        fields.insert("in".into(), json!(to_rid.to_string()));
        let edge_rid = store.insert(class_name, fields).rid;

        store.records[from].push_link(format!("out_{}", class_name), edge_rid);
        store.records[to].push_link(format!("in_{}", class_name), edge_rid);
        tracing::debug!(class = class_name, rid = %edge_rid, from = %from_rid, to = %to_rid, "stored edge");

        let edge = &store.records[store.records.len() - 1];
        Ok(Self::results(std::iter::once(edge)))
    }
}
