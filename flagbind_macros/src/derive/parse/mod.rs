//! Parsing utilities for the `FieldBinder` derive macro.

use syn::meta::ParseNestedMeta;
use syn::parenthesized;
use syn::{Attribute, Token};

mod input;
mod literals;

pub(crate) use input::{BinderInput, BoundField, binding_key, parse_input};
use literals::lit_str;

#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[flagbind(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `flagbind::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(FieldBinder)]`.
///
/// - `name` binds the field under a different flag name.
/// - `skip` omits the field from the descriptor table.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub name: Option<syn::LitStr>,
    pub skip: bool,
}

/// Iterate all `#[flagbind(...)]` attributes once and apply a callback.
fn parse_flagbind<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("flagbind")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

/// Extracts `#[flagbind(...)]` metadata applied to a struct.
///
/// Only the `crate` key is recognised. Unknown keys are ignored so callers
/// keep compiling when new attributes appear, at the cost of allowing
/// silent typos.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_flagbind(attrs, |meta| {
        if meta.path.is_ident("crate") {
            let s = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            Ok(())
        } else {
            discard_unknown(meta)
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[flagbind(...)]` attributes.
///
/// Recognised keys are `name = "..."` and `skip`. Unknown keys are ignored,
/// matching [`parse_struct_attrs`].
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_flagbind(attrs, |meta| {
        if meta.path.is_ident("name") {
            let s = lit_str(meta, "name")?;
            if s.value().is_empty() {
                return Err(syn::Error::new(s.span(), "name must not be empty"));
            }
            out.name = Some(s);
            Ok(())
        } else if meta.path.is_ident("skip") {
            out.skip = true;
            Ok(())
        } else {
            discard_unknown(meta)
        }
    })?;
    Ok(out)
}
