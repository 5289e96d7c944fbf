//! Expansion of `#[api_model]` and `#[api_handler]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, ItemFn, ItemStruct};

/// JSON DTO wire format: camelCase fields, unknown fields rejected.
///
/// Derives and serde settings already present on the struct are left alone.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    if !args.is_empty() {
        return syn::Error::new_spanned(args, "api_model takes no arguments").to_compile_error();
    }

    let attrs = ModelAttrs::scan(&input.attrs);

    let mut derives = Vec::new();
    if !attrs.derives("Debug") {
        derives.push(quote!(Debug));
    }
    if !attrs.derives("Serialize") {
        derives.push(quote!(::serde::Serialize));
    }
    if !attrs.derives("Deserialize") {
        derives.push(quote!(::serde::Deserialize));
    }
    let derive = (!derives.is_empty()).then(|| quote!(#[derive(#(#derives),*)]));

    let schema = (!attrs.derives("ToSchema"))
        .then(|| quote!(#[cfg_attr(feature = "server", derive(::utoipa::ToSchema))]));
    let rename = (!attrs.serde_rename_all).then(|| quote!(#[serde(rename_all = "camelCase")]));
    let deny = (!attrs.serde_deny_unknown).then(|| quote!(#[serde(deny_unknown_fields)]));

    quote! {
        #derive
        #schema
        #rename
        #deny
        #input
    }
}

/// Wraps a handler with `utoipa::path`, emitted only under the consumer's `server` feature.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = &input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

#[derive(Default)]
struct ModelAttrs {
    derived: Vec<String>,
    serde_rename_all: bool,
    serde_deny_unknown: bool,
}

impl ModelAttrs {
    fn scan(attrs: &[Attribute]) -> Self {
        let mut found = Self::default();

        for attr in attrs {
            if attr.path().is_ident("derive") {
                let _ = attr.parse_nested_meta(|meta| {
                    if let Some(segment) = meta.path.segments.last() {
                        found.derived.push(segment.ident.to_string());
                    }
                    Ok(())
                });
            } else if attr.path().is_ident("serde") {
                let _ = attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename_all") {
                        found.serde_rename_all = true;
                        let _ = meta.value()?.parse::<syn::LitStr>()?;
                    } else if meta.path.is_ident("deny_unknown_fields") {
                        found.serde_deny_unknown = true;
                    } else if meta.input.peek(syn::Token![=]) {
                        let _ = meta.value()?.parse::<syn::Expr>()?;
                    }
                    Ok(())
                });
            }
        }

        found
    }

    fn derives(&self, name: &str) -> bool {
        self.derived.iter().any(|derived| derived == name)
    }
}
