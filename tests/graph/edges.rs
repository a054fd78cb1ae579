//! Edge creation between stored vertices.

use serde_json::json;
use orient_rust::{GraphClient, InMemoryGateway, OrmError, PropertyMap, Record};

use crate::support::{CountingGateway, Knows, LivesIn, Person, Place};

#[test]
fn create_connects_two_vertices() {
    let client = GraphClient::new(InMemoryGateway::new());
    let people = client.nodes::<Person>();
    let ada = people.create([("name", "Ada")]).unwrap();
    let bob = people.create([("name", "Bob")]).unwrap();

    let knows = client
        .edges::<Knows>()
        .create(&ada, &bob, [("since", "1843")])
        .unwrap();

    assert_eq!(knows.class_name(), "Knows");
    assert_eq!(knows.out_vertex(), ada.id());
    assert_eq!(knows.in_vertex(), bob.id());
    assert_eq!(knows.get("since"), Some(&json!(1843)));
    assert!(!knows.contains("in"));
    assert!(!knows.contains("out"));

    let decoded: Knows = knows.decode().unwrap();
    assert_eq!(decoded.out_vertex.as_deref(), ada.id());
    assert_eq!(decoded.since, 1843);
}

#[test]
fn vertices_list_their_edges_after_linking() {
    let client = GraphClient::new(InMemoryGateway::new());
    let ada = client.nodes::<Person>().create([("name", "Ada")]).unwrap();
    let london = client.nodes::<Place>().create([("name", "London")]).unwrap();

    let lived = client
        .edges::<LivesIn>()
        .create(&ada, &london, [("moved", "1833-06-05T00:00:00Z")])
        .unwrap();
    assert_eq!(lived.get("moved"), Some(&json!("1833-06-05 00:00:00")));

    let ada = client.nodes::<Person>().get_by_id(ada.id().unwrap()).unwrap().unwrap();
    assert_eq!(ada.get("out_LivesIn"), Some(&json!([lived.id().unwrap()])));
}

#[test]
fn endpoint_without_id_makes_no_calls() {
    let client = GraphClient::new(CountingGateway::new());
    let ada = client.nodes::<Person>().create([("name", "Ada")]).unwrap();
    let calls_before = client.gateway().calls();

    let unsaved = Record::new("Person");
    let err = client
        .edges::<Knows>()
        .create(&ada, &unsaved, PropertyMap::new())
        .unwrap_err();

    match err {
        OrmError::InvalidEndpoint { argument, .. } => assert_eq!(argument, "to"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(client.gateway().calls(), calls_before);
}

#[test]
fn edges_to_missing_vertices_return_no_record() {
    let client = GraphClient::new(InMemoryGateway::new());
    let ada = client.nodes::<Person>().create([("name", "Ada")]).unwrap();
    let ghost = Record::new("Person").with_id("#10:99");

    let err = client
        .edges::<Knows>()
        .create(&ada, &ghost, [("since", 1)])
        .unwrap_err();
    assert!(matches!(err, OrmError::EmptyResponse { .. }));
}

#[test]
fn edges_are_queryable_by_property() {
    let client = GraphClient::new(InMemoryGateway::new());
    let people = client.nodes::<Person>();
    let ada = people.create([("name", "Ada")]).unwrap();
    let bob = people.create([("name", "Bob")]).unwrap();
    let eve = people.create([("name", "Eve")]).unwrap();

    let knows = client.edges::<Knows>();
    knows.create(&ada, &bob, [("since", 1)]).unwrap();
    knows.create(&ada, &eve, [("since", 2)]).unwrap();

    let recent = knows.filter([("since", 2)]).unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].in_vertex(), eve.id());
    assert_eq!(knows.all().unwrap().len(), 2);
}

#[test]
fn create_from_uses_the_edge_model() {
    let client = GraphClient::new(InMemoryGateway::new());
    let people = client.nodes::<Person>();
    let ada = people.create([("name", "Ada")]).unwrap();
    let bob = people.create([("name", "Bob")]).unwrap();

    let model = Knows {
        id: None,
        out_vertex: None,
        in_vertex: None,
        since: 1850,
    };
    let stored = client.edges::<Knows>().create_from(&ada, &bob, &model).unwrap();
    assert_eq!(stored.get("since"), Some(&json!(1850)));
    assert_eq!(stored.out_vertex(), ada.id());
}
