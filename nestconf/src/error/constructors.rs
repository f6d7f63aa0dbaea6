//! Constructors for `NestconfError` used across the binder and records.

use camino::Utf8Path;
use serde_json::Value;

use super::NestconfError;

impl NestconfError {
    /// Construct a type mismatch between the bound and the supplied record.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestconf::NestconfError;
    /// let err = NestconfError::type_mismatch("PersonConfig", "CityConfig");
    /// assert!(matches!(err, NestconfError::TypeMismatch { .. }));
    /// assert_eq!(
    ///     err.to_string(),
    ///     "expected a `PersonConfig` record, got `CityConfig`"
    /// );
    /// ```
    #[must_use]
    pub const fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }

    /// Construct a conflict between a record value and a keyword argument.
    #[must_use]
    pub fn conflicting(field: impl Into<String>, record: Value, kwarg: Value) -> Self {
        Self::ConflictingValues {
            field: field.into(),
            record,
            kwarg,
        }
    }

    /// Construct an unknown-field error for `record`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nestconf::NestconfError;
    /// let err = NestconfError::unknown_field("PersonConfig", "agee");
    /// assert_eq!(err.to_string(), "'PersonConfig' has no declared field 'agee'");
    /// ```
    #[must_use]
    pub fn unknown_field(record: &'static str, field: impl Into<String>) -> Self {
        Self::UnknownField {
            record,
            field: field.into(),
        }
    }

    /// Construct a decoding failure for a single field.
    #[must_use]
    pub fn invalid_value(field: impl Into<String>, source: serde_json::Error) -> Self {
        Self::InvalidValue {
            field: field.into(),
            source,
        }
    }

    /// Construct an error for a value that should have been a JSON object.
    #[must_use]
    pub const fn expected_object(found: &Value) -> Self {
        let found = match found {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        };
        Self::ExpectedObject { found }
    }

    /// Construct an I/O failure for `path`.
    #[must_use]
    pub fn io(path: &Utf8Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_owned(),
            source,
        }
    }
}
