//! Procedural macros for `nestconf`.
//!
//! `#[derive(Configurable)]` reads the field list of a struct at build time
//! and emits the companion `<Name>Config` record type together with the
//! `Record`, `RecordType`, `HasConfig` and `Configurable` implementations
//! that bind the two.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `nestconf::Configurable`.
///
/// Configurable fields must be declared as `Option<T>`. Recognised
/// `#[nestconf(...)]` keys:
///
/// - struct: `rename = "Name"` overrides the generated record name,
///   `crate = "path"` overrides the runtime crate path.
/// - field: `default = expr`, `default_factory = path`, `nested` (the field
///   holds another configurable or record), `extends` (splice an ancestor
///   configurable's fields in first) and `skip` (extra state that is not part
///   of the record; must implement `Default`).
#[proc_macro_derive(Configurable, attributes(nestconf))]
pub fn derive_configurable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
