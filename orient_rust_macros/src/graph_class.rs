use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{
    Attribute, Data, DeriveInput, Expr, ExprLit, Fields, GenericArgument, Lit, LitStr, Meta,
    PathArguments, Token, Type,
};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Node,
    Edge,
}

/// Fields that never become properties: the record's synthesized attributes.
const SYNTHESIZED: [&str; 2] = ["id", "class_name"];

/// Edge endpoint fields, decoded from the store's `out`/`in`.
const ENDPOINTS: [&str; 2] = ["in_vertex", "out_vertex"];

/// Names decoding renames on every record.
const NATIVE_ENDPOINTS: [&str; 2] = ["in", "out"];

/// Lowercase type names and the `PropertyType` variant each maps to.
const TYPE_NAMES: [(&str, &str); 12] = [
    ("boolean", "Boolean"),
    ("short", "Short"),
    ("integer", "Integer"),
    ("long", "Long"),
    ("float", "Float"),
    ("double", "Double"),
    ("string", "String"),
    ("date", "Date"),
    ("datetime", "DateTime"),
    ("link", "Link"),
    ("embeddedlist", "EmbeddedList"),
    ("embeddedmap", "EmbeddedMap"),
];

struct Property {
    name: String,
    variant: &'static str,
}

pub fn derive_graph_class(input: TokenStream, kind: Kind) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input, kind) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput, kind: Kind) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "graph classes cannot be generic",
        ));
    }

    // Extract #[orient(class = "...")] or default to the struct name
    let class = extract_class(input)?;
    let properties = extract_properties(input, kind)?;

    let names = properties.iter().map(|p| &p.name);
    let variants = properties.iter().map(|p| format_ident!("{}", p.variant));
    let (builder, marker) = match kind {
        Kind::Node => (format_ident!("node"), quote! { orient_rust::NodeClass }),
        Kind::Edge => (format_ident!("edge"), quote! { orient_rust::EdgeClass }),
    };

    Ok(quote! {
        impl orient_rust::GraphClass for #name {
            const CLASS_NAME: &'static str = #class;

            fn schema() -> &'static orient_rust::ClassSchema {
                static SCHEMA: ::std::sync::OnceLock<orient_rust::ClassSchema> =
                    ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    orient_rust::ClassSchema::#builder(#class)
                        #(.property(#names, orient_rust::PropertyType::#variants))*
                        .build()
                        .expect("property names are validated when the derive expands")
                })
            }
        }

        impl #marker for #name {}
    })
}

fn extract_class(input: &DeriveInput) -> syn::Result<String> {
    for attr in &input.attrs {
        if !attr.path().is_ident("orient") {
            continue;
        }

        let mut class = None;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("class") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().trim().is_empty() {
                    return Err(meta.error("class name must not be empty"));
                }
                class = Some(value.value());
                Ok(())
            } else {
                Err(meta.error("expected `class = \"...\"`"))
            }
        })?;

        if let Some(c) = class {
            return Ok(c);
        }
    }

    Ok(input.ident.unraw().to_string())
}

fn extract_properties(input: &DeriveInput, kind: Kind) -> syn::Result<Vec<Property>> {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    &input.ident,
                    "graph classes need named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "graph classes must be structs",
            ))
        }
    };

    let mut properties = Vec::new();
    for field in fields {
        let Some(ident) = &field.ident else { continue };
        let name = ident.unraw().to_string();

        let mut skip = false;
        let mut declared = None;
        for attr in &field.attrs {
            if !attr.path().is_ident("orient") {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("skip") {
                    skip = true;
                    Ok(())
                } else if meta.path.is_ident("type") {
                    let value: LitStr = meta.value()?.parse()?;
                    let variant = variant_for(&value.value())
                        .ok_or_else(|| meta.error(format!("unknown property type {:?}", value.value())))?;
                    declared = Some(variant);
                    Ok(())
                } else {
                    Err(meta.error("expected `skip` or `type = \"...\"`"))
                }
            })?;
        }

        if skip {
            continue;
        }
        // Properties travel under their serialized name.
        let name = serde_rename(&field.attrs)?.unwrap_or(name);
        if SYNTHESIZED.contains(&name.as_str()) {
            continue;
        }
        if ENDPOINTS.contains(&name.as_str()) {
            if kind == Kind::Edge {
                continue;
            }
            return Err(syn::Error::new_spanned(
                ident,
                format!("`{name}` holds an edge endpoint and cannot be a vertex property"),
            ));
        }
        if NATIVE_ENDPOINTS.contains(&name.as_str()) {
            return Err(syn::Error::new_spanned(
                ident,
                "`in` and `out` are edge endpoints; name the field in_vertex or out_vertex",
            ));
        }
        if !is_identifier(&name) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("property name `{name}` must be an ASCII identifier"),
            ));
        }
        if properties.iter().any(|p: &Property| p.name == name) {
            return Err(syn::Error::new_spanned(
                ident,
                format!("property `{name}` is declared twice"),
            ));
        }

        let variant = match declared {
            Some(variant) => variant,
            None => infer(&field.ty).ok_or_else(|| {
                syn::Error::new_spanned(
                    &field.ty,
                    "cannot infer the property type; add #[orient(type = \"...\")]",
                )
            })?,
        };
        properties.push(Property { name, variant });
    }

    Ok(properties)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The name from `#[serde(rename = "...")]` or `#[serde(rename(serialize = "..."))]`.
fn serde_rename(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    let mut renamed = None;
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        let items = attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
        for item in items {
            match item {
                Meta::NameValue(pair) if pair.path.is_ident("rename") => {
                    renamed = Some(string_value(&pair.value)?);
                }
                Meta::List(list) if list.path.is_ident("rename") => {
                    let parts = list.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)?;
                    for part in parts {
                        if let Meta::NameValue(pair) = part {
                            if pair.path.is_ident("serialize") {
                                renamed = Some(string_value(&pair.value)?);
                            }
                        }
                    }
                }
                _ => {}
            }
        }
    }
    Ok(renamed)
}

fn string_value(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(value),
            ..
        }) => Ok(value.value()),
        _ => Err(syn::Error::new_spanned(expr, "expected a string literal")),
    }
}

fn variant_for(type_name: &str) -> Option<&'static str> {
    let lower = type_name.to_ascii_lowercase();
    TYPE_NAMES
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, variant)| *variant)
}

/// Property type for a Rust field type, looking through `Option`.
fn infer(ty: &Type) -> Option<&'static str> {
    match ty {
        Type::Reference(reference) => infer(&reference.elem),
        Type::Path(path) => {
            let segment = path.path.segments.last()?;
            let variant = match segment.ident.to_string().as_str() {
                "Option" => return first_type_argument(&segment.arguments).and_then(infer),
                "String" | "str" => "String",
                "bool" => "Boolean",
                "i8" | "i16" | "u8" => "Short",
                "i32" | "u16" => "Integer",
                "i64" | "u32" | "u64" | "isize" | "usize" => "Long",
                "f32" => "Float",
                "f64" => "Double",
                "Vec" | "VecDeque" | "HashSet" | "BTreeSet" => "EmbeddedList",
                "HashMap" | "BTreeMap" => "EmbeddedMap",
                "NaiveDate" => "Date",
                "NaiveDateTime" | "DateTime" => "DateTime",
                "RecordId" => "Link",
                _ => return None,
            };
            Some(variant)
        }
        _ => None,
    }
}

fn first_type_argument(arguments: &PathArguments) -> Option<&Type> {
    match arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
            GenericArgument::Type(ty) => Some(ty),
            _ => None,
        }),
        _ => None,
    }
}
