#![doc = include_str!("../README.md")]

use proc_macro::TokenStream;

mod attrs;
mod derive;

/// Derives `kdebug::Inspect`.
///
/// Structs dump with their fields in declaration order, tuple structs with
/// fields named `0`, `1`, ... and enums as a struct named after the active
/// variant, e.g. `Shape::Circle`.
///
/// # Field attributes
///
/// - `#[inspect(skip)]` leaves the field out of dumps and projections.
/// - `#[inspect(tag(json = "id", db = "row_id"))]` declares `key = value`
///   tags, used by `kdebug::project` to rename fields.
///
/// # Example
///
/// ```ignore
/// #[derive(Inspect)]
/// struct User {
///     #[inspect(tag(json = "user_name"))]
///     name: String,
///     #[inspect(skip)]
///     password: String,
/// }
/// ```
#[proc_macro_derive(Inspect, attributes(inspect))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
