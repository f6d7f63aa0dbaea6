//! Parsing utilities for the `Configurable` derive macro.
//!
//! Unknown `#[nestconf(...)]` keys are a compile error.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, Ident};

mod input;
mod literals;
#[cfg(test)]
mod tests;
mod type_utils;

pub(crate) use input::parse_input;
use literals::lit_str;
pub(crate) use type_utils::option_inner;

#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Overrides the generated record name (`<Name>Config` by default).
    pub rename: Option<Ident>,
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[nestconf(crate = "sweep_cfg")]`, generated code
    /// references types through `sweep_cfg::` instead of `nestconf::`.
    pub crate_path: Option<syn::Path>,
}

/// Field-level attributes recognised by `#[derive(Configurable)]`.
///
/// - `default` supplies an expression of the field's inner type.
/// - `default_factory` names a zero-argument function called afresh for every
///   instance that leaves the field unset.
/// - `nested` marks an `Option<T>` field whose `T` is itself configurable.
/// - `extends` splices the fields of an ancestor configurable in first.
/// - `skip` excludes the field from the record.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub default: Option<Expr>,
    pub default_factory: Option<Expr>,
    pub nested: bool,
    pub extends: bool,
    pub skip: bool,
}

/// Iterate all `#[nestconf(...)]` attributes once and apply a callback.
fn parse_nestconf<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("nestconf")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn unknown_key(meta: &ParseNestedMeta, allowed: &str) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| "<path>".to_owned(), ToString::to_string);
    meta.error(format!(
        "unknown nestconf attribute `{key}`; expected one of {allowed}"
    ))
}

fn set_flag(flag: &mut bool, meta: &ParseNestedMeta, key: &str) -> syn::Result<()> {
    if *flag {
        return Err(meta.error(format!("`{key}` given more than once")));
    }
    *flag = true;
    Ok(())
}

fn set_expr(slot: &mut Option<Expr>, meta: &ParseNestedMeta, key: &str) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("`{key}` given more than once")));
    }
    *slot = Some(meta.value()?.parse()?);
    Ok(())
}

/// Extracts `#[nestconf(...)]` metadata applied to a struct.
///
/// Recognised keys are `rename` and `crate`.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> Result<StructAttrs, syn::Error> {
    let mut out = StructAttrs::default();
    parse_nestconf(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("rename") => {
                let s = lit_str(meta, "rename")?;
                let ident: Ident = syn::parse_str(&s.value()).map_err(|_| {
                    syn::Error::new(s.span(), "rename must be a valid identifier")
                })?;
                out.rename = Some(ident);
                Ok(())
            }
            Some("crate") => {
                let s = lit_str(meta, "crate")?;
                let path: syn::Path =
                    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
                out.crate_path = Some(path);
                Ok(())
            }
            _ => Err(unknown_key(meta, "`rename`, `crate`")),
        }
    })?;
    Ok(out)
}

/// Parses field-level `#[nestconf(...)]` attributes.
///
/// Only the keys themselves are checked here; combinations are validated by
/// [`parse_input`] once the field type is known.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs, syn::Error> {
    let mut out = FieldAttrs::default();
    parse_nestconf(attrs, |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("default") => set_expr(&mut out.default, meta, "default"),
            Some("default_factory") => {
                set_expr(&mut out.default_factory, meta, "default_factory")
            }
            Some("nested") => set_flag(&mut out.nested, meta, "nested"),
            Some("extends") => set_flag(&mut out.extends, meta, "extends"),
            Some("skip") => set_flag(&mut out.skip, meta, "skip"),
            _ => Err(unknown_key(
                meta,
                "`default`, `default_factory`, `nested`, `extends`, `skip`",
            )),
        }
    })?;
    Ok(out)
}
