//! Procedural macros for `flagbind`.
//!
//! `#[derive(FieldBinder)]` emits the static descriptor table and the slot
//! accessor that let `flagbind` bind command-line flags onto a struct's
//! fields by name.
//!
//! Field attributes:
//!
//! - `#[flagbind(name = "...")]` binds the field under a different flag name.
//! - `#[flagbind(skip)]` leaves the field out of the table entirely.
//!
//! Struct attributes:
//!
//! - `#[flagbind(crate = "path")]` points generated code at an aliased
//!   `flagbind` dependency.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `flagbind::FieldBinder`.
///
/// Every field that is not skipped must implement `flagbind::Bindable`.
#[proc_macro_derive(FieldBinder, attributes(flagbind))]
pub fn derive_field_binder(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

#[cfg(test)]
mod tests;
