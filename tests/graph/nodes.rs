//! Vertex creation and queries through the in-memory gateway.

use serde_json::json;
use orient_rust::{GraphClient, InMemoryGateway, OrmError};

use crate::support::{CountingGateway, OfflineGateway, Person, Place};

#[test]
fn create_returns_the_stored_record() {
    let client = GraphClient::new(InMemoryGateway::new());

    let ada = client
        .nodes::<Person>()
        .create([("name", json!("Ada")), ("age", json!("36"))])
        .unwrap();

    assert_eq!(ada.id(), Some("#10:0"));
    assert_eq!(ada.class_name(), "Person");
    assert_eq!(ada.get("name"), Some(&json!("Ada")));
    assert_eq!(ada.get("age"), Some(&json!(36)));
}

#[test]
fn create_issues_exactly_one_insert() {
    let client = GraphClient::new(CountingGateway::new());

    client.nodes::<Person>().create([("name", "Ada")]).unwrap();
    assert_eq!(client.gateway().calls(), 1);
    assert_eq!(client.gateway().inner.len(), 1);
}

#[test]
fn unknown_properties_make_no_calls() {
    let client = GraphClient::new(CountingGateway::new());
    let people = client.nodes::<Person>();

    let err = people.create([("name", "Ada"), ("email", "ada@example.com")]).unwrap_err();
    assert!(matches!(err, OrmError::UnknownProperty { .. }));
    assert_eq!(
        err.to_string(),
        "the property email is not a part of the class Person"
    );

    let err = people.filter([("email", "ada@example.com")]).unwrap_err();
    assert!(matches!(err, OrmError::UnknownProperty { .. }));
    assert_eq!(client.gateway().calls(), 0);
}

#[test]
fn invalid_values_make_no_calls() {
    let client = GraphClient::new(CountingGateway::new());

    let err = client
        .nodes::<Person>()
        .create([("born", "the day before yesterday")])
        .unwrap_err();
    assert!(matches!(err, OrmError::TypeValidation(_)));
    assert_eq!(client.gateway().calls(), 0);
}

#[test]
fn filter_combines_criteria_with_and() {
    let client = GraphClient::new(InMemoryGateway::new());
    let people = client.nodes::<Person>();
    people.create([("name", json!("Ada")), ("age", json!(36))]).unwrap();
    people.create([("name", json!("Bob")), ("age", json!(36))]).unwrap();
    people.create([("name", json!("Ada")), ("age", json!(20))]).unwrap();

    assert_eq!(people.filter([("age", 36)]).unwrap().len(), 2);
    let both = people.filter([("name", json!("Ada")), ("age", json!(36))]).unwrap();
    assert_eq!(both.len(), 1);
    assert_eq!(both[0].id(), Some("#10:0"));
}

#[test]
fn get_by_id_equals_filter_on_id() {
    let client = GraphClient::new(InMemoryGateway::new());
    let people = client.nodes::<Person>();
    let ada = people.create([("name", "Ada")]).unwrap();
    let id = ada.id().unwrap();

    let by_id = people.get_by_id(id).unwrap().unwrap();
    let filtered = people.filter([("id", id)]).unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(by_id, filtered[0]);
    assert_eq!(by_id, ada);
}

#[test]
fn get_by_id_miss_is_none() {
    let client = GraphClient::new(InMemoryGateway::new());
    assert!(client.nodes::<Person>().get_by_id("#10:42").unwrap().is_none());
}

#[test]
fn all_scans_only_the_class() {
    let client = GraphClient::new(InMemoryGateway::new());
    client.nodes::<Person>().create([("name", "Ada")]).unwrap();
    client
        .nodes::<Place>()
        .create([("name", json!("London")), ("tags", json!(["capital"]))])
        .unwrap();

    let people = client.nodes::<Person>().all().unwrap();
    assert_eq!(people.len(), 1);
    let places = client.nodes::<Place>().all().unwrap();
    assert_eq!(places[0].class_name(), "City");
    assert_eq!(places[0].get("tags"), Some(&json!(["capital"])));
}

#[test]
fn records_decode_into_the_model() {
    let client = GraphClient::new(InMemoryGateway::new());
    let people = client.nodes::<Person>();

    let mut ada = Person::new("Ada");
    ada.born = Some("1815-12-10".into());
    let stored = people.create_from(&ada).unwrap();

    let decoded: Person = stored.decode().unwrap();
    assert_eq!(decoded.id.as_deref(), Some("#10:0"));
    assert_eq!(decoded.name, "Ada");
    assert_eq!(decoded.born.as_deref(), Some("1815-12-10"));
    assert_eq!(decoded.age, None);

    let all: Vec<Person> = people.all().unwrap().decode().unwrap();
    assert_eq!(all, vec![decoded]);
}

#[test]
fn unauthorized_store_fails_every_call() {
    let client = GraphClient::new(InMemoryGateway::unauthorized());
    let people = client.nodes::<Person>();

    assert!(matches!(people.all(), Err(OrmError::Authorization)));
    assert!(matches!(people.create([("name", "Ada")]), Err(OrmError::Authorization)));
    assert!(matches!(people.get_by_id("#10:0"), Err(OrmError::Authorization)));
}

#[test]
fn transport_errors_propagate() {
    let client = GraphClient::new(OfflineGateway);
    let err = client.nodes::<Person>().all().unwrap_err();
    assert!(matches!(err, OrmError::Gateway(_)));
}

#[test]
fn managers_work_from_many_threads() {
    let gateway = InMemoryGateway::new();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let gateway = gateway.clone();
            std::thread::spawn(move || {
                let client = GraphClient::new(gateway);
                client
                    .nodes::<Person>()
                    .create([("name", json!(format!("p{i}"))), ("age", json!(i))])
                    .unwrap()
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let client = GraphClient::new(gateway);
    assert_eq!(client.nodes::<Person>().all().unwrap().len(), 4);
}
