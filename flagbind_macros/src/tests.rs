//! Unit tests for the generated `FieldBinder` implementation.

use crate::derive::expand;
use crate::derive::generate::generate_impl;
use crate::derive::parse::parse_input;
use anyhow::{Result, anyhow, ensure};
use quote::quote;
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

fn render(input: &DeriveInput) -> Result<String> {
    let binder = parse_input(input).map_err(|err| anyhow!(err))?;
    Ok(generate_impl(&binder).to_string())
}

#[rstest]
fn generates_descriptor_table_and_slots() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            name: String,
            #[flagbind(name = "port")]
            ports: Vec<u16>,
        }
    };
    let expected = quote! {
        #[automatically_derived]
        impl flagbind::FieldBinder for Demo {
            fn descriptors() -> &'static [flagbind::FieldDescriptor] {
                const DESCRIPTORS: &[flagbind::FieldDescriptor] = &[
                    flagbind::FieldDescriptor::new("name", "name", <String as flagbind::Bindable>::KIND),
                    flagbind::FieldDescriptor::new("port", "ports", <Vec<u16> as flagbind::Bindable>::KIND),
                ];
                DESCRIPTORS
            }

            fn slot(
                &mut self,
                handle: flagbind::FieldHandle,
            ) -> ::core::option::Option<flagbind::FieldSlot<'_>> {
                match handle.index() {
                    0usize => ::core::option::Option::Some(flagbind::Bindable::slot(&mut self.name)),
                    1usize => ::core::option::Option::Some(flagbind::Bindable::slot(&mut self.ports)),
                    _ => ::core::option::Option::None,
                }
            }
        }
    };
    let tokens = render(&input)?;
    ensure!(
        tokens == expected.to_string(),
        "generated tokens differ: {tokens} != {expected}"
    );
    Ok(())
}

#[rstest]
fn empty_structs_have_an_empty_table() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Empty {}
    };
    let tokens = render(&input)?;
    ensure!(
        tokens.contains("const DESCRIPTORS : & [flagbind :: FieldDescriptor] = & [] ;"),
        "expected empty table: {tokens}"
    );
    ensure!(
        tokens.contains("match handle . index () { _ => :: core :: option :: Option :: None , }"),
        "expected fallback-only match: {tokens}"
    );
    Ok(())
}

#[rstest]
fn crate_override_replaces_paths() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[flagbind(crate = "my_alias")]
        struct Demo {
            name: String,
        }
    };
    let tokens = render(&input)?;
    ensure!(
        tokens.contains("impl my_alias :: FieldBinder for Demo"),
        "crate alias not applied: {tokens}"
    );
    ensure!(
        !tokens.contains("flagbind ::"),
        "default path leaked: {tokens}"
    );
    Ok(())
}

#[rstest]
fn raw_identifiers_keep_member_access() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Demo {
            r#type: String,
        }
    };
    let tokens = render(&input)?;
    ensure!(
        tokens.contains("FieldDescriptor :: new (\"type\" , \"type\""),
        "binding name should drop the raw prefix: {tokens}"
    );
    ensure!(
        tokens.contains("& mut self . r#type"),
        "member access should keep the raw prefix: {tokens}"
    );
    Ok(())
}

#[rstest]
fn expand_surfaces_parse_errors() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        enum Demo { A }
    };
    let Err(err) = expand(&input) else {
        return Err(anyhow!("expected expansion to fail"));
    };
    ensure!(
        err.to_string() == "FieldBinder can only be derived for structs",
        "unexpected error: {err}"
    );
    Ok(())
}
