//! Keyword arguments passed to [`crate::Configurable::construct`].
//!
//! Values travel as [`serde_json::Value`] so one bag can address fields of
//! any type by name; the generated record decodes each entry into the
//! declared field type during construction.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{NestconfError, NestconfResult};

/// Ordered bag of named field values.
///
/// Insertion order is preserved. Inserting a name twice keeps the last
/// value.
///
/// # Examples
///
/// ```
/// use nestconf::Kwargs;
///
/// let kwargs = Kwargs::new().with("name", "John").with("age", 30);
/// assert_eq!(kwargs.names().collect::<Vec<_>>(), ["name", "age"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Kwargs {
    values: Map<String, Value>,
}

impl Kwargs {
    /// Create an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Add `value` under `name`, returning the updated bag.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Serialize `value` and add it under `name`.
    ///
    /// Use this for values without an `Into<Value>` conversion, such as
    /// nested records.
    ///
    /// # Errors
    ///
    /// Returns [`NestconfError::InvalidValue`] when `value` cannot be
    /// serialized.
    pub fn with_serialized<T>(mut self, name: impl Into<String>, value: &T) -> NestconfResult<Self>
    where
        T: Serialize + ?Sized,
    {
        let name = name.into();
        let encoded = serde_json::to_value(value)
            .map_err(|source| Arc::new(NestconfError::invalid_value(name.clone(), source)))?;
        self.values.insert(name, encoded);
        Ok(self)
    }

    /// Insert `value` under `name`, returning any value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.into(), value.into())
    }

    /// Look up the value stored under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Iterate over the supplied names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of supplied arguments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when no arguments were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Consume the bag, returning the underlying JSON object.
    #[must_use]
    pub fn into_map(self) -> Map<String, Value> {
        self.values
    }
}

impl From<Map<String, Value>> for Kwargs {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

impl TryFrom<Value> for Kwargs {
    type Error = Arc<NestconfError>;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(Arc::new(NestconfError::expected_object(&other))),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Kwargs
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

impl IntoIterator for Kwargs {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
