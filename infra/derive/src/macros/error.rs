//! Expansion of `#[arcade_error]`.

use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::punctuated::Punctuated;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, Path, Token, Type};

const INTERNAL: &str = "Internal";

/// One enum variant, reduced to what the generated impls need.
struct ErrorVariant<'a> {
    ident: &'a Ident,
    /// Field name and type of the wrapped error, if any.
    source: Option<(&'a Ident, &'a Type)>,
    has_context: bool,
    has_message: bool,
}

struct ErrorEnum<'a> {
    name: &'a Ident,
    ext: Ident,
    variants: Vec<ErrorVariant<'a>>,
    missing_derives: Vec<TokenStream>,
}

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    match ErrorEnum::parse(&input) {
        Ok(error_enum) => error_enum.expand(&input),
        Err(err) => err.to_compile_error(),
    }
}

impl<'a> ErrorEnum<'a> {
    fn parse(input: &'a DeriveInput) -> syn::Result<Self> {
        let Data::Enum(data) = &input.data else {
            return Err(syn::Error::new_spanned(&input.ident, "arcade_error only supports enums"));
        };

        let variants =
            data.variants.iter().map(ErrorVariant::parse).collect::<syn::Result<Vec<_>>>()?;

        let derived = derived_names(&input.attrs)?;
        let mut missing_derives = Vec::new();
        if !derived.iter().any(|name| name == "Debug") {
            missing_derives.push(quote!(Debug));
        }
        if !derived.iter().any(|name| name == "Error") {
            missing_derives.push(quote!(::thiserror::Error));
        }

        Ok(Self {
            name: &input.ident,
            ext: format_ident!("{}Ext", input.ident),
            variants,
            missing_derives,
        })
    }

    fn expand(&self, input: &DeriveInput) -> TokenStream {
        let derives = if self.missing_derives.is_empty() {
            TokenStream::new()
        } else {
            let missing = &self.missing_derives;
            quote!(#[derive(#(#missing),*)])
        };
        let ext_trait = self.ext_trait();
        let source_impls = self.variants.iter().filter_map(|v| self.source_impls(v));
        let message_impls = self.message_impls();
        let kind = self.kind_impl();

        quote! {
            #[allow(non_shorthand_field_patterns)]
            #derives
            #input

            #ext_trait
            #(#source_impls)*
            #message_impls
            #kind

            #[allow(dead_code)]
            fn format_context(
                context: &Option<::std::borrow::Cow<'static, str>>,
            ) -> ::std::borrow::Cow<'static, str> {
                match context {
                    Some(c) => ::std::borrow::Cow::Owned(format!(" ({c})")),
                    None => ::std::borrow::Cow::Borrowed(""),
                }
            }
        }
    }

    /// `<Name>Ext::context` for `Result<T, Name>`: fills the variant's context slot.
    fn ext_trait(&self) -> TokenStream {
        let Self { name, ext, .. } = self;
        let arms = self.variants.iter().filter(|v| v.has_context).map(|v| {
            let ident = v.ident;
            quote!(Self::#ident { context: slot, .. } => *slot = Some(context.into()),)
        });

        quote! {
            pub trait #ext<T> {
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::std::result::Result<T, #name>;
            }

            #[automatically_derived]
            impl #name {
                #[allow(unreachable_patterns)]
                fn set_context(&mut self, context: impl Into<::std::borrow::Cow<'static, str>>) {
                    match self {
                        #(#arms)*
                        _ => {
                            let _ = context;
                        }
                    }
                }
            }

            #[automatically_derived]
            impl<T> #ext<T> for ::std::result::Result<T, #name> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::std::result::Result<T, #name> {
                    self.map_err(|mut err| {
                        err.set_context(context);
                        err
                    })
                }
            }
        }
    }

    /// `From<Source>` plus `<Name>Ext` for `Result<T, Source>`.
    fn source_impls(&self, variant: &ErrorVariant<'_>) -> Option<TokenStream> {
        let (field, ty) = variant.source?;
        let Self { name, ext, .. } = self;
        let ident = variant.ident;

        Some(quote! {
            #[automatically_derived]
            impl ::std::convert::From<#ty> for #name {
                #[inline]
                fn from(#field: #ty) -> Self {
                    Self::#ident { #field, context: None }
                }
            }

            #[automatically_derived]
            impl<T> #ext<T> for ::std::result::Result<T, #ty> {
                #[inline]
                fn context(
                    self,
                    context: impl Into<::std::borrow::Cow<'static, str>>,
                ) -> ::std::result::Result<T, #name> {
                    self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
                }
            }
        })
    }

    /// Plain strings convert into the `Internal { message, .. }` variant, when there is one.
    fn message_impls(&self) -> TokenStream {
        let name = self.name;
        let has_internal = self
            .variants
            .iter()
            .any(|v| v.ident == INTERNAL && v.has_message && v.has_context && v.source.is_none());
        if !has_internal {
            return TokenStream::new();
        }

        quote! {
            #[automatically_derived]
            impl ::std::convert::From<&'static str> for #name {
                fn from(message: &'static str) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Borrowed(message), context: None }
                }
            }

            #[automatically_derived]
            impl ::std::convert::From<String> for #name {
                fn from(message: String) -> Self {
                    Self::Internal { message: ::std::borrow::Cow::Owned(message), context: None }
                }
            }
        }
    }

    fn kind_impl(&self) -> TokenStream {
        let name = self.name;
        let arms = self.variants.iter().map(|v| {
            let ident = v.ident;
            let label = ident.to_string();
            quote!(Self::#ident { .. } => #label,)
        });

        quote! {
            #[automatically_derived]
            impl #name {
                /// Variant name, for structured log fields.
                #[must_use]
                pub const fn kind(&self) -> &'static str {
                    match self {
                        #(#arms)*
                    }
                }
            }
        }
    }
}

impl<'a> ErrorVariant<'a> {
    fn parse(variant: &'a syn::Variant) -> syn::Result<Self> {
        let Fields::Named(fields) = &variant.fields else {
            return Err(syn::Error::new_spanned(
                variant,
                "arcade_error variants must use named fields",
            ));
        };

        let mut source = None;
        let mut has_context = false;
        let mut has_message = false;

        for field in &fields.named {
            let Some(ident) = &field.ident else { continue };
            if ident == "context" {
                if !is_context_type(&field.ty) {
                    return Err(syn::Error::new_spanned(
                        &field.ty,
                        "context field must be Option<Cow<'static, str>>",
                    ));
                }
                has_context = true;
            } else if ident == "message" {
                has_message = true;
            } else if ident == "source"
                || has_attr(&field.attrs, "source")
                || has_attr(&field.attrs, "from")
            {
                source = Some((ident, &field.ty));
            }
        }

        if source.is_some() && !has_context {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "variants wrapping a source need `context: Option<Cow<'static, str>>`",
            ));
        }

        Ok(Self { ident: &variant.ident, source, has_context, has_message })
    }
}

fn has_attr(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}

/// Last path segment of every trait listed in `#[derive(...)]`.
fn derived_names(attrs: &[Attribute]) -> syn::Result<Vec<String>> {
    let mut names = Vec::new();
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let paths = attr.parse_args_with(Punctuated::<Path, Token![,]>::parse_terminated)?;
        names.extend(
            paths.iter().filter_map(|path| path.segments.last()).map(|seg| seg.ident.to_string()),
        );
    }
    Ok(names)
}

/// Accepts `Option<Cow<'static, str>>`, with or without leading paths.
fn is_context_type(ty: &Type) -> bool {
    let rendered: String =
        ty.to_token_stream().to_string().chars().filter(|c| !c.is_whitespace()).collect();
    let option = rendered.starts_with("Option<") || rendered.contains("::Option<");
    option && rendered.ends_with("Cow<'static,str>>")
}
