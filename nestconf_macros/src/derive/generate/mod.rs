//! Code generation for `#[derive(Configurable)]`.
//!
//! [`record`] emits the `<Name>Config` type with its trait surface;
//! [`binding`] ties the declaring struct to it.

mod binding;
mod record;
#[cfg(test)]
mod tests;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::crate_path;
use super::model::ConfigurableInput;

/// Emit every item the derive produces for `model`.
pub(crate) fn generate(model: &ConfigurableInput) -> TokenStream {
    let krate = crate_path::resolve(model.crate_path.as_ref());
    let record = record::generate_record(model, &krate);
    let binding = binding::generate_binding(model, &krate);
    quote! {
        #record
        #binding
    }
}

/// Source text of `tokens` with whitespace removed, for descriptors and
/// docs.
fn compact_text<T: ToTokens>(tokens: &T) -> String {
    tokens
        .to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}
