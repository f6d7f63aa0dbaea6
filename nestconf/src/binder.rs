//! Instance construction: merging a record with keyword arguments.
//!
//! Keyword arguments are decoded into an overlay record first, so both sides
//! can be compared in their normalised JSON form. A field is in conflict only
//! when both sides hold different non-null values; null on either side means
//! "unset" and the other side wins.

use std::sync::Arc;

use crate::{Configurable, Kwargs, NestconfError, NestconfResult, Record, RecordType};

/// Build `C` from an optional record and keyword arguments.
///
/// # Errors
///
/// See [`Configurable::construct`].
pub fn construct<C: Configurable>(config: Option<C::Config>, kwargs: Kwargs) -> NestconfResult<C> {
    let record = merge(config, kwargs)?;
    Ok(C::from_config(record))
}

/// Build `C` from a record of unknown type.
///
/// # Errors
///
/// See [`Configurable::construct_dyn`].
pub fn construct_dyn<C: Configurable>(
    config: Option<&dyn Record>,
    kwargs: Kwargs,
) -> NestconfResult<C> {
    let typed = config
        .map(|record| {
            record
                .as_any()
                .downcast_ref::<C::Config>()
                .cloned()
                .ok_or_else(|| {
                    Arc::new(NestconfError::type_mismatch(
                        <C::Config as RecordType>::NAME,
                        record.record_name(),
                    ))
                })
        })
        .transpose()?;
    construct(typed, kwargs)
}

/// Merge `config` and `kwargs` into a complete record.
///
/// Without a record, fields not named in `kwargs` take their declared
/// defaults. With a record, they keep the record's values.
///
/// # Errors
///
/// See [`Configurable::construct`].
pub fn merge<R: RecordType>(config: Option<R>, kwargs: Kwargs) -> NestconfResult<R> {
    R::check_layout()?;

    let mut overlay = R::empty();
    let mut assigned = Vec::with_capacity(kwargs.len());
    let mut unknown = None;
    for (name, value) in kwargs {
        if overlay.set_field(&name, value)? {
            assigned.push(name);
        } else if unknown.is_none() {
            unknown = Some(name);
        }
    }

    let incoming = overlay.to_mapping();
    if let Some(record) = &config {
        let existing = record.to_mapping();
        for name in &assigned {
            let (Some(held), Some(given)) = (existing.get(name), incoming.get(name)) else {
                continue;
            };
            if held != given && !held.is_null() && !given.is_null() {
                tracing::debug!(record = R::NAME, field = %name, "record and keyword argument conflict");
                return Err(Arc::new(NestconfError::conflicting(
                    name.as_str(),
                    held.clone(),
                    given.clone(),
                )));
            }
        }
    }
    if let Some(field) = unknown {
        return Err(Arc::new(NestconfError::unknown_field(R::NAME, field)));
    }

    let from_record = config.is_some();
    let mut merged = config.unwrap_or_else(R::empty);
    for name in &assigned {
        let given_null = incoming.get(name).is_none_or(serde_json::Value::is_null);
        if from_record && given_null {
            continue;
        }
        merged.take_field(&mut overlay, name);
    }
    if !from_record {
        for field in R::fields() {
            if !assigned.iter().any(|name| name == field.name()) {
                merged.reset_field(field.name());
            }
        }
    }

    tracing::debug!(
        record = R::NAME,
        kwargs = assigned.len(),
        from_record,
        "merged configuration inputs"
    );
    Ok(merged)
}
