//! Input parsing for the `FieldBinder` derive macro.
//!
//! This module gathers the struct identifier, the bindable fields, and the
//! attribute metadata in one pass so expansion can fail fast with useful
//! errors.

use std::collections::HashMap;

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields};

use super::{parse_field_attrs, parse_struct_attrs};

/// A field that appears in the descriptor table.
pub(crate) struct BoundField {
    /// Identifier used to access the field, raw prefix included.
    pub member: syn::Ident,
    pub ty: syn::Type,
    /// Name flags bind to.
    pub name: String,
    /// Rust field name without a raw prefix.
    pub field: String,
}

/// Everything generation needs from the user-provided struct.
pub(crate) struct BinderInput {
    pub ident: syn::Ident,
    pub crate_path: Option<syn::Path>,
    pub fields: Vec<BoundField>,
}

/// Key two binding names collide on: the name with its first letter
/// upper-cased.
pub(crate) fn binding_key(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Gathers information from the user-provided struct.
///
/// Rejects enums, unions, tuple structs and generic structs, skips fields
/// marked `#[flagbind(skip)]`, and reports binding names that collide after
/// first-letter capitalization.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<BinderInput> {
    let ident = input.ident.clone();
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "FieldBinder requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "FieldBinder can only be derived for structs",
            ));
        }
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "FieldBinder cannot be derived for generic structs",
        ));
    }

    let mut fields = Vec::new();
    let mut seen: HashMap<String, String> = HashMap::new();
    for f in named {
        let attrs = parse_field_attrs(&f.attrs)?;
        if attrs.skip {
            continue;
        }
        let Some(member) = f.ident.clone() else {
            return Err(syn::Error::new_spanned(f, "FieldBinder requires named fields"));
        };
        let field = member.unraw().to_string();
        let name = attrs.name.as_ref().map_or_else(|| field.clone(), syn::LitStr::value);
        if let Some(previous) = seen.insert(binding_key(&name), field.clone()) {
            return Err(syn::Error::new_spanned(
                &member,
                format!("binding name '{name}' collides with field '{previous}'"),
            ));
        }
        fields.push(BoundField {
            member,
            ty: f.ty.clone(),
            name,
            field,
        });
    }

    Ok(BinderInput {
        ident,
        crate_path: struct_attrs.crate_path,
        fields,
    })
}
