//! Decoding envelopes into result sets.

use serde_json::json;
use orient_rust::{Envelope, OrmError, ResultSet, TRUNCATION_MARKER};

fn decode(body: &str) -> Result<ResultSet, OrmError> {
    ResultSet::from_envelope(Envelope::ok(body))
}

#[test]
fn single_record_round_trip() {
    let set = decode(r##"{"result":[{"@rid":"#12:2","@class":"Person","name":"A"}]}"##).unwrap();
    assert_eq!(set.len(), 1);
    assert_eq!(set[0].id(), Some("#12:2"));
    assert_eq!(set[0].class_name(), "Person");
    assert_eq!(set[0].get("name"), Some(&json!("A")));
}

#[test]
fn edge_keys_are_renamed() {
    let set = decode(r##"{"result":[{"in":"#9:1","out":"#9:2","@class":"Knows"}]}"##).unwrap();
    assert_eq!(set[0].in_vertex(), Some("#9:1"));
    assert_eq!(set[0].out_vertex(), Some("#9:2"));
    assert!(set[0].get("in").is_none());
    assert!(set[0].get("out").is_none());
}

#[test]
fn absent_results_are_empty() {
    assert!(decode("").unwrap().is_empty());
    assert!(decode(r#"{"elapsed":3}"#).unwrap().is_empty());
}

#[test]
fn unauthorized_ignores_the_body() {
    let err = ResultSet::from_envelope(Envelope::new("401", "{not json")).unwrap_err();
    assert!(matches!(err, OrmError::Authorization));
}

#[test]
fn untagged_records_are_dropped() {
    let set = decode(r##"{"result":[{"@rid":"#1:1","name":"no class"}]}"##).unwrap();
    assert!(set.is_empty());
}

#[test]
fn malformed_bodies_are_reported_with_the_body() {
    let err = decode("{\"result\": [").unwrap_err();
    assert!(err.to_string().contains("{\"result\": ["));
}

#[test]
fn eleven_records_display_ten_and_a_marker() {
    let elements: Vec<String> = (0..11)
        .map(|i| format!(r##"{{"@rid":"#3:{i}","@class":"V"}}"##))
        .collect();
    let set = decode(&format!(r#"{{"result":[{}]}}"#, elements.join(","))).unwrap();

    let shown = set.to_string();
    assert_eq!(shown.matches("V(#3:").count(), 10);
    assert_eq!(shown.matches(TRUNCATION_MARKER).count(), 1);
    assert_eq!(set.len(), 11);
    assert_eq!(set.raw_json(), format!(r#"{{"result":[{}]}}"#, elements.join(",")));
}

#[test]
#[should_panic]
fn out_of_range_index_panics() {
    let set = decode(r#"{"result":[]}"#).unwrap();
    let _ = &set[0];
}
