//! Validated description of a declaring struct.

use syn::{Attribute, Expr, Ident, Path, Type, Visibility};

/// How an unset field is resolved.
#[derive(Clone)]
pub(crate) enum DefaultKind {
    Null,
    Literal(Expr),
    Factory(Expr),
}

/// What a declared field contributes to the record.
#[derive(Clone)]
pub(crate) enum FieldRole {
    /// `Option<inner>` stored as-is.
    Plain { inner: Type },
    /// `Option<inner>` where `inner: HasConfig`; the record stores
    /// `inner::Config`.
    Nested { inner: Type },
    /// An ancestor configurable whose fields are spliced in first.
    Extends { ty: Type },
}

#[derive(Clone)]
pub(crate) struct ConfigField {
    pub ident: Ident,
    pub role: FieldRole,
    pub default: DefaultKind,
    /// `#[doc]` attributes copied onto the record field.
    pub docs: Vec<Attribute>,
}

impl ConfigField {
    pub(crate) const fn is_ancestor(&self) -> bool {
        matches!(self.role, FieldRole::Extends { .. })
    }
}

#[derive(Clone)]
pub(crate) struct ConfigurableInput {
    pub ident: Ident,
    pub vis: Visibility,
    pub record_ident: Ident,
    pub crate_path: Option<Path>,
    /// Record fields in source order; see [`ConfigurableInput::ordered`].
    pub fields: Vec<ConfigField>,
    /// Extra state excluded from the record.
    pub skipped: Vec<Ident>,
}

impl ConfigurableInput {
    /// Ancestor fields first, then the struct's own fields, each group in
    /// source order.
    pub(crate) fn ordered(&self) -> impl Iterator<Item = &ConfigField> {
        let ancestors = self.fields.iter().filter(|field| field.is_ancestor());
        let own = self.fields.iter().filter(|field| !field.is_ancestor());
        ancestors.chain(own)
    }

    pub(crate) fn ancestors(&self) -> impl Iterator<Item = &ConfigField> {
        self.fields.iter().filter(|field| field.is_ancestor())
    }

    pub(crate) fn own(&self) -> impl Iterator<Item = &ConfigField> {
        self.fields.iter().filter(|field| !field.is_ancestor())
    }
}
