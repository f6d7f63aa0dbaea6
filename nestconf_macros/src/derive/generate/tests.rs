//! Tests for the token generators.
//!
//! Generated output is compared as token text, so the assertions look for
//! the fragments that carry behaviour rather than whole impls.

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use syn::{DeriveInput, parse_quote};

use super::generate;
use crate::derive::model::ConfigurableInput;
use crate::derive::parse::parse_input;

fn model(input: &DeriveInput) -> Result<ConfigurableInput> {
    parse_input(input).map_err(|err| anyhow!(err))
}

fn expand(input: &DeriveInput) -> Result<String> {
    Ok(generate(&model(input)?).to_string())
}

#[fixture]
fn person() -> DeriveInput {
    parse_quote! {
        pub struct Person {
            name: Option<String>,
            #[nestconf(default = 30)]
            age: Option<u8>,
            #[nestconf(default_factory = Vec::new)]
            tags: Option<Vec<String>>,
            #[nestconf(nested)]
            address: Option<Address>,
            #[nestconf(skip)]
            people_root_path: String,
        }
    }
}

#[rstest]
fn record_struct_uses_declared_visibility(person: DeriveInput) -> Result<()> {
    let out = expand(&person)?;
    ensure!(out.contains("pub struct PersonConfig"), "record missing: {out}");
    ensure!(
        out.contains("address : :: core :: option :: Option")
            && out.contains("Address as nestconf :: HasConfig > :: Config >"),
        "nested field should store the nested record"
    );
    ensure!(!out.contains("pub address :"), "record fields must stay private");
    ensure!(
        !out.contains("people_root_path : :: core :: option"),
        "skipped fields must not reach the record"
    );
    Ok(())
}

#[rstest]
fn fields_are_read_through_const_accessors(person: DeriveInput) -> Result<()> {
    let out = expand(&person)?;
    for name in ["name", "age", "tags", "address"] {
        ensure!(
            out.contains(&format!("pub const fn {name} (& self)")),
            "missing accessor for {name}"
        );
    }
    ensure!(out.contains("self . age . as_ref ()"));
    ensure!(!out.contains("fn people_root_path"));
    Ok(())
}

#[rstest]
fn defaults_are_expanded_per_kind(person: DeriveInput) -> Result<()> {
    let out = expand(&person)?;
    ensure!(out.contains("age : :: core :: option :: Option :: Some ((30))"));
    ensure!(out.contains("tags : :: core :: option :: Option :: Some ((Vec :: new) ())"));
    ensure!(out.contains("name : :: core :: option :: Option :: None"));
    Ok(())
}

#[rstest]
fn descriptors_record_type_tags_and_defaults(person: DeriveInput) -> Result<()> {
    let out = expand(&person)?;
    ensure!(out.contains(r#"FieldDescriptor :: new ("tags" , "Vec<String>" , nestconf :: FieldDefault :: Factory ("Vec::new") , false)"#));
    ensure!(out.contains(r#"FieldDescriptor :: new ("age" , "u8" , nestconf :: FieldDefault :: Literal ("30") , false)"#));
    ensure!(out.contains(r#"FieldDescriptor :: new ("address" , "Address" , nestconf :: FieldDefault :: Null , true)"#));
    Ok(())
}

#[rstest]
fn nested_fields_decode_as_records(person: DeriveInput) -> Result<()> {
    let out = expand(&person)?;
    ensure!(out.contains("self . address = nestconf :: __private :: decode_record (name , value) ?"));
    ensure!(out.contains("self . name = nestconf :: __private :: decode (name , value) ?"));
    ensure!(out.contains("FieldEntry :: nested (\"address\" , self . address . as_ref ())"));
    Ok(())
}

#[rstest]
fn skipped_fields_take_their_default_on_restore(person: DeriveInput) -> Result<()> {
    let out = expand(&person)?;
    ensure!(out.contains("people_root_path : :: core :: default :: Default :: default ()"));
    ensure!(out.contains("impl nestconf :: Configurable for Person { }"));
    Ok(())
}

#[test]
fn ancestors_are_delegated_to() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Resident {
            #[nestconf(extends)]
            person: Person,
            country: Option<String>,
        }
    };
    let out = expand(&input)?;
    ensure!(out.contains(
        "fields . extend_from_slice (< < Person as nestconf :: HasConfig > :: Config as nestconf :: RecordType > :: fields ())"
    ));
    ensure!(out.contains(
        "_ if < < Person as nestconf :: HasConfig > :: Config as nestconf :: RecordType > :: declares (name) => nestconf :: RecordType :: set_field (& mut self . person , name , value)"
    ));
    ensure!(out.contains("entries . extend (nestconf :: Record :: entries (& self . person))"));
    Ok(())
}

#[test]
fn crate_override_rewrites_paths() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[nestconf(crate = "sweep_cfg", rename = "Settings")]
        struct App {
            port: Option<u16>,
        }
    };
    let out = expand(&input)?;
    ensure!(out.contains("impl sweep_cfg :: RecordType for Settings"));
    ensure!(out.contains("const NAME : & 'static str = \"Settings\""));
    ensure!(!out.contains("nestconf ::"), "default path leaked: {out}");
    Ok(())
}

#[test]
fn empty_structs_expand_without_unused_bindings() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Marker {}
    };
    let out = expand(&input)?;
    ensure!(out.contains("fn fields () -> & 'static [nestconf :: FieldDescriptor] { & [] }"));
    ensure!(out.contains("let _ = value ;"));
    ensure!(out.contains("let _ = config ;"));
    Ok(())
}
