mod graph_class;

use proc_macro::TokenStream;

use graph_class::Kind;

// ============================================================================
// #[derive(Node)] derive macro
// ============================================================================

/// Derive macro declaring a vertex class.
///
/// # Usage
///
/// ```ignore
/// #[derive(Serialize, Deserialize, Node)]
/// #[orient(class = "Person")]
/// struct Person {
///     id: Option<String>,
///     name: String,
///     #[orient(type = "date")]
///     born: String,
///     #[orient(skip)]
///     cached_score: u32,
/// }
/// ```
///
/// - `#[orient(class = "...")]` sets the class name.
///   If omitted, defaults to the struct name.
/// - Property types are inferred from the field type (`String`, `bool`,
///   integers, floats, `Vec`, maps, chrono dates, `RecordId`, and `Option`
///   of any of these); `#[orient(type = "...")]` overrides the inference.
/// - `id` and `class_name` fields, and fields marked `#[orient(skip)]`,
///   are not properties.
/// - A field's `#[serde(rename = "...")]` becomes its property name.
///   Container-level `rename_all` is not applied; rename fields one by one.
/// - Property names must be ASCII identifiers other than `in`, `out`,
///   `in_vertex` and `out_vertex`. Anything else fails to compile.
#[proc_macro_derive(Node, attributes(orient))]
pub fn derive_node(input: TokenStream) -> TokenStream {
    graph_class::derive_graph_class(input, Kind::Node)
}

// ============================================================================
// #[derive(Edge)] derive macro
// ============================================================================

/// Derive macro declaring an edge class.
///
/// Same attributes as `Node`. `in_vertex` and `out_vertex` fields hold the
/// decoded endpoints and are not properties.
///
/// ```ignore
/// #[derive(Serialize, Deserialize, Edge)]
/// struct Knows {
///     out_vertex: Option<String>,
///     in_vertex: Option<String>,
///     since: i32,
/// }
/// ```
#[proc_macro_derive(Edge, attributes(orient))]
pub fn derive_edge(input: TokenStream) -> TokenStream {
    graph_class::derive_graph_class(input, Kind::Edge)
}
