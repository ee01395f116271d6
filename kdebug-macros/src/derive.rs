//! Expansion of `#[derive(Inspect)]`.

use proc_macro2::{Span, TokenStream};
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, GenericParam, Ident, Index, parse_quote};

use crate::attrs::{parse_field_attrs, reject_inspect_attrs};

pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    reject_inspect_attrs(&input.attrs, "the type itself, only on fields")?;

    let body = match &input.data {
        Data::Struct(data) => {
            let (pattern, fields) = destructure(quote!(Self), &data.fields)?;
            quote! {
                let #pattern = self;
                ::kdebug::ValueHandle::structure(
                    ::kdebug::type_name_of::<Self>(),
                    ::std::vec![#(#fields),*],
                )
            }
        }
        Data::Enum(data) => {
            let mut arms = Vec::with_capacity(data.variants.len());
            for variant in &data.variants {
                reject_inspect_attrs(&variant.attrs, "enum variants, only on fields")?;
                let ident = &variant.ident;
                let (pattern, fields) = destructure(quote!(Self::#ident), &variant.fields)?;
                let suffix = format!("::{ident}");
                arms.push(quote! {
                    #pattern => ::kdebug::ValueHandle::structure(
                        ::std::format!("{}{}", ::kdebug::type_name_of::<Self>(), #suffix),
                        ::std::vec![#(#fields),*],
                    ),
                });
            }
            if arms.is_empty() {
                quote!(match *self {})
            } else {
                quote! {
                    match self {
                        #(#arms)*
                    }
                }
            }
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "Inspect cannot be derived for unions: the active field is unknown",
            ));
        }
    };

    let mut generics = input.generics.clone();
    for param in &mut generics.params {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!(::kdebug::Inspect));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
    let name = &input.ident;

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::kdebug::Inspect for #name #ty_generics #where_clause {
            fn inspect(&self) -> ::kdebug::ValueHandle<'_> {
                #body
            }
        }
    })
}

/// Builds a pattern binding every kept field of `path` by reference, and the
/// `FieldHandle` expressions for those bindings.
fn destructure(path: TokenStream, fields: &Fields) -> syn::Result<(TokenStream, Vec<TokenStream>)> {
    let mut bindings = Vec::new();
    let mut handles = Vec::new();

    for (index, field) in fields.iter().enumerate() {
        let attrs = parse_field_attrs(&field.attrs)?;
        let member = match &field.ident {
            Some(ident) => quote!(#ident),
            None => {
                let index = Index {
                    index: index as u32,
                    span: Span::call_site(),
                };
                quote!(#index)
            }
        };
        if attrs.skip {
            continue;
        }

        let binding = format_ident!("__field{}", index);
        let name = match &field.ident {
            Some(ident) => ident_name(ident),
            None => index.to_string(),
        };
        bindings.push(quote!(#member: #binding));

        let handle = quote!(::kdebug::FieldHandle::new(#name, #binding));
        if attrs.tags.is_empty() {
            handles.push(handle);
        } else {
            let tags = attrs.tags.iter().map(|(key, value)| quote!((#key, #value)));
            handles.push(quote!(#handle.with_tags(&[#(#tags),*])));
        }
    }

    let pattern = match fields {
        Fields::Unit => path,
        Fields::Named(_) | Fields::Unnamed(_) => quote!(#path { #(#bindings,)* .. }),
    };
    Ok((pattern, handles))
}

/// Field name as written, without a raw identifier prefix.
fn ident_name(ident: &Ident) -> String {
    let name = ident.to_string();
    match name.strip_prefix("r#") {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
