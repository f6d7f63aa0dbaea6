//! Borrowed views over a record's fields in declaration order.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use super::Record;

/// The value held by one record field.
pub enum FieldValue<'a> {
    /// The field is unset.
    Null,
    /// A plain value, already encoded as JSON.
    Plain(Value),
    /// A nested record.
    Nested(&'a dyn Record),
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Plain(value) => f.debug_tuple("Plain").field(value).finish(),
            Self::Nested(record) => f.debug_tuple("Nested").field(record).finish(),
        }
    }
}

/// One field of a record, as produced by [`Record::entries`].
#[derive(Debug)]
pub struct FieldEntry<'a> {
    name: &'static str,
    value: FieldValue<'a>,
}

impl<'a> FieldEntry<'a> {
    /// Describe a plain field.
    ///
    /// Values that cannot be JSON-encoded are recorded as their `Debug`
    /// string and a warning is emitted; encoding never fails. A set value is
    /// never reported as [`FieldValue::Null`].
    #[must_use]
    pub fn plain<T>(name: &'static str, value: Option<&T>) -> Self
    where
        T: Serialize + fmt::Debug,
    {
        let value = value.map_or(FieldValue::Null, |inner| FieldValue::Plain(encode(name, inner)));
        Self { name, value }
    }

    /// Describe a field holding a nested record.
    #[must_use]
    pub fn nested<R: Record>(name: &'static str, value: Option<&'a R>) -> Self {
        let value = value.map_or(FieldValue::Null, |record| FieldValue::Nested(record));
        Self { name, value }
    }

    /// Field name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Field value.
    #[must_use]
    pub const fn value(&self) -> &FieldValue<'a> {
        &self.value
    }

    /// Returns `true` when the field is unset.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.value, FieldValue::Null)
    }

    /// Normalised JSON form of the value; nested records become objects.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match &self.value {
            FieldValue::Null => Value::Null,
            FieldValue::Plain(value) => value.clone(),
            FieldValue::Nested(record) => Value::Object(record.to_mapping()),
        }
    }

    pub(crate) fn into_pair(self) -> (String, Value) {
        let value = self.to_json();
        (self.name.to_owned(), value)
    }
}

/// Collect entries into an ordered JSON object.
pub(crate) fn to_mapping(entries: Vec<FieldEntry<'_>>) -> Map<String, Value> {
    entries.into_iter().map(FieldEntry::into_pair).collect()
}

/// JSON form of a set value.
///
/// `serde_json` maps non-finite floats to `null`, which would read as an
/// unset field, so that case takes the `Debug` fallback as well.
fn encode<T>(name: &str, value: &T) -> Value
where
    T: Serialize + fmt::Debug,
{
    match serde_json::to_value(value) {
        Ok(Value::Null) => debug_text(name, value, &"value encodes as JSON null"),
        Ok(encoded) => encoded,
        Err(err) => debug_text(name, value, &err),
    }
}

fn debug_text<T: fmt::Debug>(name: &str, value: &T, reason: &dyn fmt::Display) -> Value {
    tracing::warn!(
        field = name,
        error = %reason,
        "value is not JSON-encodable; recording its Debug form instead"
    );
    Value::String(format!("{value:?}"))
}
