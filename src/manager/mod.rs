//! Managers - per-class entry points for queries and inserts.
//!
//! A manager is bound to one class schema. It checks every caller-supplied
//! property name against the schema and converts values through the type
//! registry before the gateway is called, so invalid input never reaches
//! the store.
//!
//! ## Example
//!
//! ```ignore
//! let client = GraphClient::new(InMemoryGateway::new());
//!
//! let ada = client.nodes::<Person>().create([("name", "Ada")])?;
//! let bob = client.nodes::<Person>().create([("name", "Bob")])?;
//! client.edges::<Knows>().create(&ada, &bob, [("since", 1843)])?;
//!
//! let found = client.nodes::<Person>().get_by_id(ada.id().unwrap())?;
//! ```

mod base;
mod edge;
mod node;

pub use base::{BaseManager, ID_KEY};
pub use edge::EdgeManager;
pub use node::NodeManager;
