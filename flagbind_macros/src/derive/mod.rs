//! Expansion pipeline for `#[derive(FieldBinder)]`.
//!
//! Parsing validates the input and collects attribute metadata; generation
//! turns the result into the trait implementation.

pub(crate) mod crate_path;
pub(crate) mod generate;
pub(crate) mod parse;

use proc_macro2::TokenStream;

/// Expands a derive input into a `FieldBinder` implementation.
pub(crate) fn expand(input: &syn::DeriveInput) -> syn::Result<TokenStream> {
    let binder = parse::parse_input(input)?;
    Ok(generate::generate_impl(&binder))
}
