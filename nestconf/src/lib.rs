//! Declarative configuration records for Rust structs.
//!
//! Deriving [`Configurable`] on a struct generates a companion
//! `<Name>Config` record with one field per configurable field. Instances are
//! built from keyword arguments, from a record, or from both (with conflict
//! detection), and can snapshot their current values back into a record.
//! Records render deterministic JSON, compare by content digest and derive
//! path suffixes such as `lr=0.1/epochs=10` for naming output directories.
//!
//! ```rust
//! use nestconf::{Configurable, HasConfig, Kwargs, Record};
//!
//! #[derive(Debug, Configurable)]
//! struct Run {
//!     lr: Option<f64>,
//!     #[nestconf(default = 10)]
//!     epochs: Option<u32>,
//! }
//!
//! let run = Run::from_kwargs(Kwargs::new().with("lr", 0.1))?;
//! assert_eq!(run.epochs, Some(10));
//!
//! let snapshot: RunConfig = run.config();
//! assert!(snapshot.to_canonical_json().starts_with("{\n    \"lr\": 0.1,"));
//! assert_eq!(Run::construct(Some(snapshot.clone()), Kwargs::new())?.config(), snapshot);
//! # Ok::<_, std::sync::Arc<nestconf::NestconfError>>(())
//! ```

pub use nestconf_macros::Configurable;

pub mod binder;
mod configurable;
mod error;
mod field;
mod kwargs;
mod record;
mod result_ext;

pub use configurable::{Configurable, HasConfig};
pub use error::NestconfError;
pub use field::{FieldDefault, FieldDescriptor};
pub use kwargs::Kwargs;
pub use record::{FieldEntry, FieldValue, Record, RecordType};
pub use result_ext::NestconfResultExt;

pub use camino;
pub use serde;
pub use serde_json;

/// Result alias with a shared error, cheap to clone and forward.
pub type NestconfResult<T> = Result<T, std::sync::Arc<NestconfError>>;

/// Support items referenced by `#[derive(Configurable)]` output.
#[doc(hidden)]
pub mod __private {
    use std::sync::Arc;

    use serde::de::DeserializeOwned;
    use serde_json::Value;

    use crate::{NestconfError, NestconfResult, RecordType};

    pub use std::sync::LazyLock;

    /// Decode a plain field value; null decodes to `None`.
    pub fn decode<T: DeserializeOwned>(field: &str, value: Value) -> NestconfResult<Option<T>> {
        serde_json::from_value(value)
            .map_err(|source| Arc::new(NestconfError::invalid_value(field, source)))
    }

    /// Decode a nested record value; null decodes to `None`.
    pub fn decode_record<R: RecordType>(field: &str, value: Value) -> NestconfResult<Option<R>> {
        if value.is_null() {
            return Ok(None);
        }
        R::from_mapping(value).map(Some).map_err(|err| {
            tracing::debug!(field, error = %err, "nested record failed to decode");
            err
        })
    }
}
