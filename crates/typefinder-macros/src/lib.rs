//! Macros for TypeFinder type registries.

use proc_macro::TokenStream;
use syn::{parse_macro_input, Attribute, DeriveInput};

mod discoverable;

/// Derives `Discoverable`, describing the type for discovery queries.
///
/// Options go in `#[discover(...)]`:
/// - `extends = Path`: a `Discoverable` parent whose ancestry is inherited
/// - `implements(dyn A, dyn B)`: implemented traits
/// - `generic_base = "path"`: a generic definition among the ancestors
/// - `generic_definition = "path"`: the definition this type is a form of
/// - `namespace = "path"`: overrides the module path
/// - `default`: the type has a public zero-argument constructor
/// - `abstract_type`: the type is not instantiable
#[proc_macro_derive(Discoverable, attributes(discover))]
pub fn derive_discoverable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    discoverable::expand_derive(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

fn get_attributes<'a>(attrs: &'a [Attribute], name: &str) -> impl Iterator<Item = &'a Attribute> {
    let name = name.to_string();
    attrs.iter().filter(move |attr| attr.path().is_ident(&name))
}
