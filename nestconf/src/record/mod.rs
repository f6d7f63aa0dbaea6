//! Records: immutable, serializable snapshots of a declaring type's fields.
//!
//! [`Record`] is the object-safe half: mapping conversion, canonical JSON,
//! digests and path suffixes, all derived from [`Record::entries`].
//! [`RecordType`] adds the static, per-type surface the binder needs to build
//! records field by field. Both are implemented by `#[derive(Configurable)]`
//! for the generated `<Name>Config` type.
//!
//! Equality of generated records is digest equality: two records are equal
//! exactly when their canonical JSON renderings hash to the same SHA-256
//! digest. Canonical JSON keeps declaration order and is stable across calls,
//! which is what makes this sound.

mod canonical;
mod entry;
mod path;

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};

use crate::field::find_duplicate;
use crate::{FieldDescriptor, Kwargs, NestconfError, NestconfResult, NestconfResultExt};

pub use entry::{FieldEntry, FieldValue};

/// Services shared by every configuration record.
pub trait Record: Any + fmt::Debug {
    /// Name of the concrete record type, for example `PersonConfig`.
    fn record_name(&self) -> &'static str;

    /// Fields in declaration order, inherited fields first.
    fn entries(&self) -> Vec<FieldEntry<'_>>;

    /// Upcast used for checked downcasts to the concrete record type.
    fn as_any(&self) -> &dyn Any;

    /// Ordered mapping from field name to JSON value.
    ///
    /// Nested records are converted recursively, so the result only contains
    /// scalars, arrays and objects.
    fn to_mapping(&self) -> Map<String, Value> {
        entry::to_mapping(self.entries())
    }

    /// Deterministic JSON rendering with 4-space indentation and keys in
    /// declaration order.
    ///
    /// Values that cannot be JSON-encoded are recorded as their `Debug`
    /// string rather than failing.
    fn to_canonical_json(&self) -> String {
        canonical::render(&self.to_mapping())
    }

    /// Lowercase hex SHA-256 digest of [`Record::to_canonical_json`].
    fn digest(&self) -> String {
        canonical::digest(&self.to_canonical_json())
    }

    /// Join `name=value` segments (or nested suffixes) with the platform path
    /// separator.
    ///
    /// With `stop_at_none`, the first unset field and everything after it are
    /// left out.
    fn to_path_suffix(&self, stop_at_none: bool) -> String {
        path::suffix(&self.entries(), stop_at_none)
    }

    /// `root` joined with [`Record::to_path_suffix`].
    fn to_path(&self, root: &Utf8Path, stop_at_none: bool) -> Utf8PathBuf {
        root.join(self.to_path_suffix(stop_at_none))
    }

    /// Write the canonical JSON to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`NestconfError::Io`] when the file cannot be written.
    fn write_json(&self, path: &Utf8Path) -> NestconfResult<()> {
        std::fs::write(path, self.to_canonical_json())
            .map_err(|source| Arc::new(NestconfError::io(path, source)))?;
        tracing::debug!(record = self.record_name(), %path, "wrote record JSON");
        Ok(())
    }

    /// Compare against a record of any type.
    ///
    /// # Errors
    ///
    /// Returns [`NestconfError::TypeMismatch`] when `other` is a different
    /// record type; records of different types are never comparable.
    fn eq_dyn(&self, other: &dyn Record) -> NestconfResult<bool> {
        if self.as_any().type_id() != other.as_any().type_id() {
            return Err(Arc::new(NestconfError::type_mismatch(
                self.record_name(),
                other.record_name(),
            )));
        }
        Ok(self.digest() == other.digest())
    }
}

/// Static surface of a generated record type.
///
/// The binder drives construction through these field-addressed methods, so
/// no reflection is needed at run time.
pub trait RecordType: Record + Clone + Default {
    /// Record type name, `<DeclaringTypeName>Config` unless renamed.
    const NAME: &'static str;

    /// Field descriptors in declaration order, inherited fields first.
    fn fields() -> &'static [FieldDescriptor];

    /// A record with every field unset, ignoring declared defaults.
    #[must_use]
    fn empty() -> Self;

    /// Decode `value` into the field called `name`.
    ///
    /// Returns `Ok(false)` when the record has no such field.
    ///
    /// # Errors
    ///
    /// Returns [`NestconfError::InvalidValue`] when `value` does not decode
    /// into the field's type.
    fn set_field(&mut self, name: &str, value: Value) -> NestconfResult<bool>;

    /// Move the field called `name` out of `source` into `self`.
    ///
    /// Returns `false` when the record has no such field.
    fn take_field(&mut self, source: &mut Self, name: &str) -> bool;

    /// Reset the field called `name` to its declared default.
    ///
    /// Literal expressions and factories are evaluated afresh on each call.
    /// Returns `false` when the record has no such field.
    fn reset_field(&mut self, name: &str) -> bool;

    /// Returns `true` when `name` is one of [`RecordType::fields`].
    #[must_use]
    fn declares(name: &str) -> bool {
        Self::fields().iter().any(|field| field.name() == name)
    }

    /// Check that no field name is declared twice across inherited records.
    ///
    /// # Errors
    ///
    /// Returns [`NestconfError::DuplicateField`] naming the first repeated
    /// field.
    fn check_layout() -> NestconfResult<()> {
        find_duplicate(Self::fields()).map_or(Ok(()), |field| {
            Err(Arc::new(NestconfError::DuplicateField {
                record: Self::NAME,
                field,
            }))
        })
    }

    /// Build a record from a JSON object.
    ///
    /// Missing keys take their declared defaults.
    ///
    /// # Errors
    ///
    /// Returns [`NestconfError::DuplicateField`] when the record type
    /// redeclares an inherited field, [`NestconfError::ExpectedObject`] for
    /// non-object input, [`NestconfError::UnknownField`] for undeclared keys
    /// and [`NestconfError::InvalidValue`] for values of the wrong type.
    fn from_mapping(value: Value) -> NestconfResult<Self> {
        Self::check_layout()?;
        let map = match value {
            Value::Object(map) => map,
            other => return Err(Arc::new(NestconfError::expected_object(&other))),
        };
        let mut record = Self::default();
        for (name, field_value) in map {
            if !record.set_field(&name, field_value)? {
                return Err(Arc::new(NestconfError::unknown_field(Self::NAME, name)));
            }
        }
        Ok(record)
    }

    /// Build a record from keyword arguments; see [`RecordType::from_mapping`].
    ///
    /// # Errors
    ///
    /// Same as [`RecordType::from_mapping`].
    fn from_kwargs(kwargs: Kwargs) -> NestconfResult<Self> {
        Self::from_mapping(Value::Object(kwargs.into_map()))
    }

    /// Parse a record from its canonical JSON.
    ///
    /// # Errors
    ///
    /// Returns [`NestconfError::Json`] for malformed JSON, otherwise the
    /// errors of [`RecordType::from_mapping`].
    fn from_json_str(text: &str) -> NestconfResult<Self> {
        let value: Value = serde_json::from_str(text).into_nestconf()?;
        Self::from_mapping(value)
    }
}
