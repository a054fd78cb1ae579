//! SQL commands for the four gateway primitives.
//!
//! Only what the primitives need: whole-class scans, AND-ed equality
//! filters, and single vertex/edge inserts.

use serde_json::Value;

use super::{Criteria, GatewayError, PropertyMap};
use crate::record::RecordId;
use crate::response::RID_FIELD;

/// `SELECT FROM <class>`
pub fn select_all(class_name: &str) -> String {
    format!("SELECT FROM {}", identifier(class_name))
}

/// `SELECT FROM <class> WHERE a = x AND b = y`, criteria in key order.
pub fn select_where(class_name: &str, criteria: &Criteria) -> String {
    if criteria.is_empty() {
        return select_all(class_name);
    }

    let conditions: Vec<String> = criteria
        .iter()
        .map(|(key, value)| condition(key, value))
        .collect();
    format!(
        "SELECT FROM {} WHERE {}",
        identifier(class_name),
        conditions.join(" AND ")
    )
}

/// `CREATE VERTEX <class> CONTENT {...}`
pub fn create_vertex(class_name: &str, properties: &PropertyMap) -> String {
    format!("CREATE VERTEX {}{}", identifier(class_name), content(properties))
}

/// `CREATE EDGE <class> FROM #a:b TO #c:d CONTENT {...}`
pub fn create_edge(
    class_name: &str,
    from_id: &str,
    to_id: &str,
    properties: &PropertyMap,
) -> Result<String, GatewayError> {
    let from = endpoint(from_id)?;
    let to = endpoint(to_id)?;
    Ok(format!(
        "CREATE EDGE {} FROM {} TO {}{}",
        identifier(class_name),
        from,
        to,
        content(properties)
    ))
}

/// A class or property name, backquoted unless it is a plain identifier.
pub fn identifier(name: &str) -> String {
    let bare = name.strip_prefix('@').unwrap_or(name);
    let mut chars = bare.chars();
    let plain = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

    if plain {
        name.to_string()
    } else {
        format!("`{}`", name.replace('`', "\\`"))
    }
}

/// A value literal.
pub fn literal(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
        other => other.to_string(),
    }
}

fn condition(key: &str, value: &Value) -> String {
    if value.is_null() {
        return format!("{} IS NULL", identifier(key));
    }
    let rendered = match value.as_str() {
        Some(s) if key == RID_FIELD && RecordId::is_valid(s) => s.to_string(),
        _ => literal(value),
    };
    format!("{} = {}", identifier(key), rendered)
}

fn content(properties: &PropertyMap) -> String {
    if properties.is_empty() {
        return String::new();
    }
    let object: serde_json::Map<String, Value> = properties
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    format!(" CONTENT {}", Value::Object(object))
}

fn endpoint(id: &str) -> Result<RecordId, GatewayError> {
    id.parse::<RecordId>()
        .map_err(|e| GatewayError::Query(e.to_string()))
}
