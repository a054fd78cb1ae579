use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use orient_rust::{Edge, GraphClient, InMemoryGateway, Node, OrmError};

#[derive(Debug, Serialize, Deserialize, Node)]
struct Person {
    id: Option<String>,
    name: String,
    #[orient(type = "date")]
    born: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Edge)]
struct Knows {
    out_vertex: Option<String>,
    in_vertex: Option<String>,
    since: i32,
}

fn main() -> Result<(), OrmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("orient_rust=debug".parse().unwrap()))
        .init();

    // Swap in HttpGateway::from_env() (feature "http") to talk to a live server
    let client = GraphClient::new(InMemoryGateway::new());
    let people = client.nodes::<Person>();

    let ada = people.create([("name", "Ada Lovelace"), ("born", "1815-12-10")])?;
    let charles = people.create([("name", "Charles Babbage"), ("born", "1791-12-26")])?;
    for i in 0..12 {
        people.create([("name", format!("Student {i}"))])?;
    }

    client.edges::<Knows>().create(&ada, &charles, [("since", 1833)])?;

    let everyone = people.all()?;
    println!("{} people: {}", everyone.len(), everyone);

    if let Some(found) = people.get_by_id(ada.id().unwrap_or_default())? {
        let person: Person = found.decode()?;
        println!("decoded: {:?}", person);
    }

    let knows = client.edges::<Knows>().filter([("since", 1833)])?;
    for edge in &knows {
        println!("{} -> {}", edge.out_vertex().unwrap_or("?"), edge.in_vertex().unwrap_or("?"));
    }

    Ok(())
}
