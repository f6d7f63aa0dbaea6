//! Traits binding a declaring type to its record type.

use crate::{Kwargs, NestconfResult, Record, RecordType, binder};

/// Capability of exposing a record snapshot.
///
/// Implemented by every generated configurable and, through a blanket impl,
/// by every record (which is its own snapshot). Fields marked
/// `#[nestconf(nested)]` hold values of this capability.
pub trait HasConfig {
    /// Record type bound to the implementor.
    type Config: RecordType;

    /// Snapshot the current field values into a fresh record.
    ///
    /// The snapshot is independent of `self`: later mutation of either side is
    /// not observed by the other.
    fn config(&self) -> Self::Config;

    /// Build a value from a record without further validation.
    ///
    /// Extra fields that are not part of the record take their `Default`
    /// value.
    fn from_config(config: Self::Config) -> Self;
}

impl<R: RecordType> HasConfig for R {
    type Config = Self;

    fn config(&self) -> Self {
        self.clone()
    }

    fn from_config(config: Self) -> Self {
        config
    }
}

/// A declaring type whose instances are built by merging a record with
/// keyword arguments.
///
/// Implemented by `#[derive(Configurable)]`.
///
/// # Examples
///
/// ```
/// use nestconf::{Configurable, HasConfig, Kwargs, Record, RecordType};
///
/// #[derive(Debug, Configurable)]
/// struct Person {
///     name: Option<String>,
///     age: Option<u32>,
///     #[nestconf(skip)]
///     people_root_path: Option<String>,
/// }
///
/// let record = PersonConfig::from_kwargs(Kwargs::new().with("name", "John"))?;
/// assert_eq!(record.name().map(String::as_str), Some("John"));
/// let person = Person::construct(Some(record), Kwargs::new().with("age", 30))?;
/// assert_eq!(person.age, Some(30));
/// assert_eq!(person.config().to_path_suffix(false), format!(
///     "name=John{}age=30",
///     std::path::MAIN_SEPARATOR
/// ));
/// # Ok::<_, std::sync::Arc<nestconf::NestconfError>>(())
/// ```
pub trait Configurable: HasConfig + Sized {
    /// Build an instance from an optional record and keyword arguments.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NestconfError::ConflictingValues`] when a keyword
    /// argument and the record disagree on a non-null value,
    /// [`crate::NestconfError::UnknownField`] for undeclared keyword names,
    /// [`crate::NestconfError::InvalidValue`] for keyword values of the wrong
    /// type and [`crate::NestconfError::DuplicateField`] for records that
    /// declare a field twice.
    fn construct(config: Option<Self::Config>, kwargs: Kwargs) -> NestconfResult<Self> {
        binder::construct(config, kwargs)
    }

    /// Like [`Configurable::construct`], accepting a record of any type.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NestconfError::TypeMismatch`] when `config` is not the
    /// record type bound to `Self`, otherwise the errors of
    /// [`Configurable::construct`].
    fn construct_dyn(config: Option<&dyn Record>, kwargs: Kwargs) -> NestconfResult<Self> {
        binder::construct_dyn(config, kwargs)
    }

    /// Build an instance from keyword arguments alone.
    ///
    /// # Errors
    ///
    /// Same as [`Configurable::construct`].
    fn from_kwargs(kwargs: Kwargs) -> NestconfResult<Self> {
        Self::construct(None, kwargs)
    }
}
