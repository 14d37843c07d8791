//! Code generation for the `FieldBinder` implementation.
//!
//! The descriptor table is a `const` slice so it is built once per type at
//! compile time. `slot` maps each table index back to its field.

use proc_macro2::TokenStream;
use quote::quote;

use super::crate_path;
use super::parse::{BinderInput, BoundField};

/// One `FieldDescriptor::new(...)` entry.
fn descriptor_entry(krate: &TokenStream, field: &BoundField) -> TokenStream {
    let BoundField {
        ty,
        name,
        field: rust_name,
        ..
    } = field;
    quote! {
        #krate::FieldDescriptor::new(#name, #rust_name, <#ty as #krate::Bindable>::KIND)
    }
}

/// One `index => Some(slot)` arm of the `slot` accessor.
fn slot_arm(krate: &TokenStream, index: usize, field: &BoundField) -> TokenStream {
    let member = &field.member;
    quote! {
        #index => ::core::option::Option::Some(#krate::Bindable::slot(&mut self.#member))
    }
}

/// Generate the complete `FieldBinder` implementation.
pub(crate) fn generate_impl(binder: &BinderInput) -> TokenStream {
    let BinderInput {
        ident,
        crate_path: path,
        fields,
    } = binder;
    let krate = crate_path::resolve(path.as_ref());
    let entries = fields.iter().map(|field| descriptor_entry(&krate, field));
    let arms = fields
        .iter()
        .enumerate()
        .map(|(index, field)| slot_arm(&krate, index, field));

    quote! {
        #[automatically_derived]
        impl #krate::FieldBinder for #ident {
            fn descriptors() -> &'static [#krate::FieldDescriptor] {
                const DESCRIPTORS: &[#krate::FieldDescriptor] = &[
                    #( #entries, )*
                ];
                DESCRIPTORS
            }

            fn slot(
                &mut self,
                handle: #krate::FieldHandle,
            ) -> ::core::option::Option<#krate::FieldSlot<'_>> {
                match handle.index() {
                    #( #arms, )*
                    _ => ::core::option::Option::None,
                }
            }
        }
    }
}
