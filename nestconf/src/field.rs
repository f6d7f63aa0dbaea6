//! Static descriptions of the fields a declaring type contributes to its
//! record.
//!
//! Descriptors are emitted by `#[derive(Configurable)]` and are available
//! through [`crate::RecordType::fields`]. They carry metadata only: values are
//! always read through the generated record itself.

/// How an unset field is filled in when an instance is built without a record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FieldDefault {
    /// No default was declared; the field resolves to null.
    Null,
    /// `#[nestconf(default = ...)]`; carries the source text of the
    /// expression, which is evaluated afresh for every construction.
    Literal(&'static str),
    /// `#[nestconf(default_factory = ...)]`; carries the factory path, which
    /// is invoked afresh for every construction.
    Factory(&'static str),
}

impl FieldDefault {
    /// Returns `true` when the field resolves to null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// Metadata describing one configurable field.
///
/// # Examples
///
/// ```
/// use nestconf::{FieldDefault, FieldDescriptor};
///
/// let age = FieldDescriptor::new("age", "u32", FieldDefault::Null, false);
/// assert_eq!(age.name(), "age");
/// assert!(age.default().is_null());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldDescriptor {
    name: &'static str,
    type_tag: &'static str,
    default: FieldDefault,
    nested: bool,
}

impl FieldDescriptor {
    /// Describe a field.
    #[must_use]
    pub const fn new(
        name: &'static str,
        type_tag: &'static str,
        default: FieldDefault,
        nested: bool,
    ) -> Self {
        Self {
            name,
            type_tag,
            default,
            nested,
        }
    }

    /// Field name, unique within the declaring type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Declared value type as written in source, with whitespace removed.
    ///
    /// Used for introspection only; nothing is enforced against it.
    #[must_use]
    pub const fn type_tag(&self) -> &'static str {
        self.type_tag
    }

    /// Default resolution strategy.
    #[must_use]
    pub const fn default(&self) -> FieldDefault {
        self.default
    }

    /// Whether the field holds another record-bearing value.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        self.nested
    }
}

/// Returns the first field name that appears more than once in `fields`.
pub(crate) fn find_duplicate(fields: &[FieldDescriptor]) -> Option<&'static str> {
    fields.iter().enumerate().find_map(|(idx, field)| {
        fields
            .iter()
            .skip(idx + 1)
            .any(|other| other.name == field.name)
            .then_some(field.name)
    })
}
