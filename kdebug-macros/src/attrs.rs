//! Parsing of `#[inspect(...)]` field attributes.

use syn::{Attribute, LitStr};

/// What a field's `#[inspect(...)]` attributes ask for.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    pub skip: bool,
    pub tags: Vec<(String, String)>,
}

pub fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut parsed = FieldAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("inspect") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                parsed.skip = true;
                Ok(())
            } else if meta.path.is_ident("tag") {
                meta.parse_nested_meta(|tag| {
                    let key = tag
                        .path
                        .get_ident()
                        .ok_or_else(|| tag.error("tag keys must be plain identifiers"))?
                        .to_string();
                    let value: LitStr = tag.value()?.parse()?;
                    parsed.tags.push((key, value.value()));
                    Ok(())
                })
            } else {
                Err(meta.error("unknown inspect attribute, expected `skip` or `tag(...)`"))
            }
        })?;
    }

    Ok(parsed)
}

/// Rejects `#[inspect(...)]` where it has no meaning (on the type itself or
/// on enum variants).
pub fn reject_inspect_attrs(attrs: &[Attribute], place: &str) -> syn::Result<()> {
    match attrs.iter().find(|attr| attr.path().is_ident("inspect")) {
        Some(attr) => Err(syn::Error::new_spanned(
            attr,
            format!("#[inspect(...)] is not supported on {place}"),
        )),
        None => Ok(()),
    }
}
