use serde_json::{Map, Value};

use super::Envelope;
use crate::error::OrmError;
use crate::record::Record;

/// Native identifier field.
pub const RID_FIELD: &str = "@rid";

/// Native class-tag field.
pub const CLASS_FIELD: &str = "@class";

/// Prefix of structural fields that are never copied as properties.
pub const META_PREFIX: char = '@';

const RESULT_KEY: &str = "result";

/// Native keys that would read badly as attribute names.
const KEY_RENAMES: [(&str, &str); 2] = [("in", "in_vertex"), ("out", "out_vertex")];

fn rename(key: &str) -> &str {
    KEY_RENAMES
        .iter()
        .find(|&&(native, _)| native == key)
        .map_or(key, |&(_, renamed)| renamed)
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Decode an envelope into records, in response order.
pub(crate) fn parse_envelope(envelope: &Envelope) -> Result<Vec<Record>, OrmError> {
    if envelope.is_unauthorized() {
        tracing::warn!(status = %envelope.status, "database rejected credentials");
        return Err(OrmError::Authorization);
    }

    if envelope.body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let decoded: Value =
        serde_json::from_str(&envelope.body).map_err(|source| OrmError::MalformedResponse {
            body: envelope.body.clone(),
            source,
        })?;

    let Some(elements) = decoded.get(RESULT_KEY).and_then(Value::as_array) else {
        tracing::trace!("response carries no result array");
        return Ok(Vec::new());
    };

    let records: Vec<Record> = elements
        .iter()
        .filter_map(|element| element.as_object().and_then(materialize))
        .collect();

    tracing::trace!(
        kept = records.len(),
        dropped = elements.len() - records.len(),
        "decoded result array"
    );
    Ok(records)
}

/// Build a record from one result element. Elements without a class tag
/// yield `None`.
fn materialize(element: &Map<String, Value>) -> Option<Record> {
    let class_name = element.get(CLASS_FIELD).map(as_text)?;
    let mut record = Record::new(class_name);

    if let Some(rid) = element.get(RID_FIELD) {
        record.set_id(as_text(rid));
    }

    for (key, value) in element {
        if key.starts_with(META_PREFIX) {
            continue;
        }
        // nested references (e.g. in_vertex) stay as their raw ids
        record.insert(rename(key).to_string(), value.clone());
    }

    Some(record)
}
