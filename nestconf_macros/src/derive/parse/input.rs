//! Input parsing for the `Configurable` derive macro.
//!
//! This module validates the struct shape and every field's attribute
//! combination in one pass so macro expansion can fail fast, pointing at the
//! offending field.

use quote::format_ident;
use syn::{Attribute, Data, DeriveInput, Field, Fields};

use super::{FieldAttrs, option_inner, parse_field_attrs, parse_struct_attrs};
use crate::derive::model::{ConfigField, ConfigurableInput, DefaultKind, FieldRole};

/// Either a record field or extra state excluded from the record.
enum ParsedField {
    Config(ConfigField),
    Skipped(syn::Ident),
}

/// Gathers and validates information from the user-provided struct.
pub(crate) fn parse_input(input: &DeriveInput) -> Result<ConfigurableInput, syn::Error> {
    let ident = input.ident.clone();
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    if !input.generics.params.is_empty() || input.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Configurable cannot be derived for generic structs",
        ));
    }
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "Configurable requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &ident,
                "Configurable can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::new();
    let mut skipped = Vec::new();
    for field in named {
        match parse_field(field)? {
            ParsedField::Config(config) => fields.push(config),
            ParsedField::Skipped(name) => skipped.push(name),
        }
    }

    let record_ident = struct_attrs
        .rename
        .unwrap_or_else(|| format_ident!("{}Config", ident));
    Ok(ConfigurableInput {
        ident,
        vis: input.vis.clone(),
        record_ident,
        crate_path: struct_attrs.crate_path,
        fields,
        skipped,
    })
}

fn parse_field(field: &Field) -> Result<ParsedField, syn::Error> {
    let attrs = parse_field_attrs(&field.attrs)?;
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(field, "expected a named field"));
    };

    if attrs.skip {
        if attrs.default.is_some()
            || attrs.default_factory.is_some()
            || attrs.nested
            || attrs.extends
        {
            return Err(syn::Error::new_spanned(
                field,
                "`skip` cannot be combined with other nestconf attributes",
            ));
        }
        return Ok(ParsedField::Skipped(ident));
    }

    let default = default_kind(field, &attrs)?;
    let role = field_role(field, &attrs, &default)?;
    Ok(ParsedField::Config(ConfigField {
        ident,
        role,
        default,
        docs: doc_attrs(&field.attrs),
    }))
}

fn default_kind(field: &Field, attrs: &FieldAttrs) -> Result<DefaultKind, syn::Error> {
    match (&attrs.default, &attrs.default_factory) {
        (Some(_), Some(_)) => Err(syn::Error::new_spanned(
            field,
            "`default` and `default_factory` are mutually exclusive",
        )),
        (Some(expr), None) => Ok(DefaultKind::Literal(expr.clone())),
        (None, Some(path)) => Ok(DefaultKind::Factory(path.clone())),
        (None, None) => Ok(DefaultKind::Null),
    }
}

fn field_role(
    field: &Field,
    attrs: &FieldAttrs,
    default: &DefaultKind,
) -> Result<FieldRole, syn::Error> {
    if attrs.extends {
        if attrs.nested || !matches!(default, DefaultKind::Null) {
            return Err(syn::Error::new_spanned(
                field,
                "`extends` cannot be combined with `nested` or a default",
            ));
        }
        if option_inner(&field.ty).is_some() {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "an `extends` field holds the ancestor directly, not `Option<_>`",
            ));
        }
        return Ok(FieldRole::Extends {
            ty: field.ty.clone(),
        });
    }

    let inner = option_inner(&field.ty).cloned().ok_or_else(|| {
        syn::Error::new_spanned(
            &field.ty,
            "configurable fields must be declared as `Option<_>`; use `#[nestconf(skip)]` for extra state",
        )
    })?;
    if attrs.nested {
        Ok(FieldRole::Nested { inner })
    } else {
        Ok(FieldRole::Plain { inner })
    }
}

fn doc_attrs(attrs: &[Attribute]) -> Vec<Attribute> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .cloned()
        .collect()
}
