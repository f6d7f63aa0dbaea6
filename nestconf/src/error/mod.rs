//! Error types produced while binding and serializing records.

mod constructors;
mod types;

pub use types::NestconfError;
