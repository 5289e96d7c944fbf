use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ItemStruct;

pub fn expand_slice(input: ItemStruct) -> TokenStream {
    let ItemStruct { attrs, vis, ident: wrapper_ident, fields, .. } = &input;
    let inner_ident = format_ident!("{wrapper_ident}Inner");

    // Unit structs keep their trailing semicolon.
    let semi = matches!(fields, syn::Fields::Unit | syn::Fields::Unnamed(_)).then(|| quote!(;));

    quote! {
        #(#attrs)*
        #[derive(Debug)]
        #vis struct #inner_ident #fields #semi

        #[derive(Debug, Clone)]
        #vis struct #wrapper_ident {
            inner: ::std::sync::Arc<#inner_ident>,
        }

        impl #wrapper_ident {
            pub fn new(inner: #inner_ident) -> Self {
                Self { inner: ::std::sync::Arc::new(inner) }
            }
        }

        impl ::std::convert::From<#inner_ident> for #wrapper_ident {
            fn from(inner: #inner_ident) -> Self {
                Self::new(inner)
            }
        }

        impl ::std::ops::Deref for #wrapper_ident {
            type Target = #inner_ident;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::arcade_kernel::domain::registry::FeatureSlice for #wrapper_ident {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    }
}
