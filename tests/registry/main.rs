//! Integration tests for the process-wide schema registry.
//!
//! The registry installs once per process, so everything that depends on
//! install order lives in a single test.

use serde::{Deserialize, Serialize};
use orient_rust::{
    ClassKind, Edge, GraphClient, InMemoryGateway, Node, OrmError, SchemaError, SchemaRegistry,
};

#[derive(Debug, Serialize, Deserialize, Node)]
#[orient(class = "Account")]
struct Account {
    id: Option<String>,
    owner: String,
    balance: f64,
}

#[derive(Debug, Serialize, Deserialize, Edge)]
struct Transfer {
    out_vertex: Option<String>,
    in_vertex: Option<String>,
    amount: f64,
}

#[test]
fn registry_drives_managers_by_class_name() {
    let client = GraphClient::new(InMemoryGateway::new());

    // Nothing installed yet.
    assert!(SchemaRegistry::global().is_none());
    assert!(matches!(
        client.registered_nodes("Account").err(),
        Some(OrmError::UnregisteredClass(name)) if name == "Account"
    ));

    let installed = SchemaRegistry::builder()
        .register_class::<Account>()
        .unwrap()
        .register_class::<Transfer>()
        .unwrap()
        .build()
        .install()
        .unwrap();
    assert_eq!(installed.len(), 2);
    assert_eq!(installed.get("Transfer").map(|s| s.kind()), Some(ClassKind::Edge));

    let second = SchemaRegistry::builder().build().install();
    assert!(matches!(second, Err(SchemaError::AlreadyInstalled)));
    assert_eq!(SchemaRegistry::global().map(SchemaRegistry::len), Some(2));

    let accounts = client.registered_nodes("Account").unwrap();
    let alice = accounts
        .create([("owner", "alice"), ("balance", "10.5")])
        .unwrap();
    let bob = accounts.create([("owner", "bob"), ("balance", "0")]).unwrap();
    assert_eq!(alice.get("balance"), Some(&serde_json::json!(10.5)));

    let transfer = client
        .registered_edges("Transfer")
        .unwrap()
        .create(&alice, &bob, [("amount", 2.5)])
        .unwrap();
    assert_eq!(transfer.out_vertex(), alice.id());

    let decoded: Account = accounts.get_by_id(bob.id().unwrap()).unwrap().unwrap().decode().unwrap();
    assert_eq!(decoded.owner, "bob");
    assert_eq!(decoded.id.as_deref(), bob.id());

    assert!(matches!(
        client.registered_edges("Account").err(),
        Some(OrmError::ClassKindMismatch { expected: ClassKind::Edge, .. })
    ));
    assert!(matches!(
        client.registered_nodes("Invoice").err(),
        Some(OrmError::UnregisteredClass(_))
    ));
}
