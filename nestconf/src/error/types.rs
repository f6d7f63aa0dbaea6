//! Primary error enum for record construction and serialization.

use camino::Utf8PathBuf;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur while building configurables or records.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NestconfError {
    /// A pre-built record is not an instance of the bound record type.
    #[error("expected a `{expected}` record, got `{found}`")]
    TypeMismatch {
        /// Name of the record type bound to the target declaring type.
        expected: &'static str,
        /// Name of the record type that was supplied.
        found: &'static str,
    },

    /// A keyword argument disagrees with the supplied record.
    #[error(
        "conflicting values for '{field}': record has {record}, keyword argument has {kwarg}"
    )]
    ConflictingValues {
        /// Field on which the two inputs disagree.
        field: String,
        /// Normalised value held by the record.
        record: Value,
        /// Normalised value passed as a keyword argument.
        kwarg: Value,
    },

    /// A keyword argument names a field the declaring type does not declare.
    #[error("'{record}' has no declared field '{field}'")]
    UnknownField {
        /// Record type that was being built.
        record: &'static str,
        /// Offending keyword name.
        field: String,
    },

    /// A keyword value could not be decoded into the field's declared type.
    #[error("invalid value for '{field}': {source}")]
    InvalidValue {
        /// Field whose value failed to decode.
        field: String,
        /// Underlying decoder failure.
        #[source]
        source: serde_json::Error,
    },

    /// A JSON object was required but another kind of value was supplied.
    #[error("expected a JSON object, got {found}")]
    ExpectedObject {
        /// Human-readable kind of the value that was supplied.
        found: &'static str,
    },

    /// The same field name is declared more than once, usually through
    /// inherited records.
    #[error("'{record}' declares field '{field}' more than once")]
    DuplicateField {
        /// Record type carrying the duplicate declaration.
        record: &'static str,
        /// Field name declared twice.
        field: &'static str,
    },

    /// Writing a record to disk failed.
    #[error("failed to write record to '{path}': {source}")]
    Io {
        /// Destination that could not be written.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Canonical JSON could not be decoded.
    #[error("failed to decode record JSON: {0}")]
    Json(#[from] serde_json::Error),
}
