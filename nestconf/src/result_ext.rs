//! Extensions for mapping errors to `NestconfResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| Arc::new(e.into()))`
//! patterns when converting external error types into the crate's
//! `NestconfResult<T>` alias (`Result<T, Arc<NestconfError>>`).
//!
//! # Examples
//!
//! ```
//! use nestconf::{NestconfResult, NestconfResultExt};
//!
//! fn parse() -> NestconfResult<serde_json::Value> {
//!     // serde_json::Error implements Into<NestconfError>
//!     serde_json::from_str("{\"age\": 30}").into_nestconf()
//! }
//! # assert!(parse().is_ok());
//! ```

use std::sync::Arc;

use crate::{NestconfError, NestconfResult};

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<NestconfError>` into a `NestconfResult<T>`.
pub trait NestconfResultExt<T, E> {
    /// Convert `Result<T, E>` into `NestconfResult<T>` using
    /// `Into<NestconfError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into
    /// `Arc<NestconfError>`.
    fn into_nestconf(self) -> NestconfResult<T>;
}

impl<T, E> NestconfResultExt<T, E> for Result<T, E>
where
    E: Into<NestconfError>,
{
    fn into_nestconf(self) -> NestconfResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
