#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the arcade workspace: error enums, feature slices,
//! API models/handlers, and the runtime entry point.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its own
//! macros in doctests; see the consuming crates for live usage.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the Tokio runtime from `arcade-runtime`.
///
/// Turns an `async fn main` into a plain `fn main` that builds a runtime from the
/// selected profile and blocks on the body.
///
/// # Arguments
///
/// * `high_performance` - Server profile (larger stacks, longer keep-alive).
/// * `memory_efficient` - Half the worker threads, smaller stacks.
/// * `default` - Auto-detected worker threads.
///
/// # Examples
///
/// ```rust,ignore
/// #[arcade_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro for JSON data transfer objects.
///
/// * Adds `Debug`, `Serialize`, and `Deserialize` when missing.
/// * Adds `utoipa::ToSchema` behind the consumer's `server` feature.
/// * Applies `rename_all = "camelCase"` and `deny_unknown_fields` unless the struct
///   already carries its own `#[serde(...)]` setting.
///
/// ```rust,ignore
/// #[api_model]
/// pub struct DomainSummary {
///     pub number: u32,
///     pub title: String,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro that documents an Axum handler with `utoipa::path`.
///
/// Accepts the usual `utoipa::path` arguments (`get`, `path = "..."`, `responses(...)`,
/// `tag = ...`). The path attribute is only emitted with the consumer's `server` feature.
///
/// ```rust,ignore
/// #[api_handler(get, path = "/health", responses((status = OK, body = HealthResponse)))]
/// pub async fn health_handler() -> impl IntoResponse { /* ... */ }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for crate error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` when not already derived.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and for
///   `Result<T, SourceError>` of every variant carrying a source.
/// * `From<SourceError>` for variants with a `source` (or `#[source]`/`#[from]`) field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant exists.
/// * A private `format_context` helper for use in `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. Variants with a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// ```rust,ignore
/// #[arcade_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
/// }
/// ```
#[proc_macro_attribute]
pub fn arcade_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro for a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` wraps it in an `Arc`, derefs
/// to it, and implements `arcade_kernel::domain::registry::FeatureSlice` so it can be
/// registered in the server state.
///
/// ```rust,ignore
/// #[arcade_derive::arcade_slice]
/// pub struct Navigator {
///     catalog: Catalog,
/// }
///
/// let navigator = Navigator::new(NavigatorInner { catalog });
/// ```
#[proc_macro_attribute]
pub fn arcade_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
