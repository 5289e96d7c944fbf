use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Ident, ItemFn, ReturnType, Type};

enum Profile {
    Default,
    HighPerformance,
    MemoryEfficient,
}

impl Profile {
    fn parse(args: TokenStream) -> Result<Self, TokenStream> {
        if args.is_empty() {
            return Ok(Self::Default);
        }

        let ident: Ident = syn::parse2(args).map_err(|err| err.to_compile_error())?;
        match ident.to_string().as_str() {
            "default" => Ok(Self::Default),
            "high_performance" => Ok(Self::HighPerformance),
            "memory_efficient" => Ok(Self::MemoryEfficient),
            _ => Err(Error::new_spanned(
                ident,
                "Unknown runtime profile. Use: high_performance, memory_efficient, or default",
            )
            .to_compile_error()),
        }
    }

    fn constructor(&self) -> TokenStream {
        match self {
            Self::Default => quote! { ::arcade_runtime::RuntimeConfig::default() },
            Self::HighPerformance => quote! { ::arcade_runtime::RuntimeConfig::high_performance() },
            Self::MemoryEfficient => quote! { ::arcade_runtime::RuntimeConfig::memory_efficient() },
        }
    }
}

/// Expands the `#[arcade_runtime::main]` attribute macro.
#[must_use]
pub fn expand_main(args: TokenStream, input: ItemFn) -> TokenStream {
    if input.sig.asyncness.is_none() {
        return Error::new_spanned(
            &input.sig.ident,
            "The #[arcade_runtime::main] attribute can only be used on async functions",
        )
        .to_compile_error();
    }

    if !returns_result(&input.sig.output) {
        return Error::new_spanned(
            &input.sig.output,
            "The #[arcade_runtime::main] attribute requires a Result return type",
        )
        .to_compile_error();
    }

    let profile = match Profile::parse(args) {
        Ok(profile) => profile,
        Err(err) => return err,
    };
    let config = profile.constructor();

    let ItemFn { attrs, vis, sig, block } = &input;
    let name = &sig.ident;
    let output = &sig.output;

    quote! {
        #(#attrs)*
        #vis fn #name() #output {
            let config = #config;
            let rt = ::arcade_runtime::build_runtime_with_config(&config)?;
            rt.block_on(async #block)
        }
    }
}

fn returns_result(output: &ReturnType) -> bool {
    let ReturnType::Type(_, ty) = output else {
        return false;
    };
    let Type::Path(path) = &**ty else {
        return false;
    };
    path.path.segments.last().is_some_and(|seg| seg.ident == "Result")
}
