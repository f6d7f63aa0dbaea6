//! Expansion pipeline for `#[derive(Configurable)]`.
//!
//! Parsing turns the struct into a [`model::ConfigurableInput`]; generation
//! turns the model into tokens. Keeping the two apart lets the unit tests
//! exercise each half on `syn::parse_quote!` input.

mod crate_path;
mod generate;
mod model;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Expand the derive for `input`.
pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let model = parse::parse_input(input)?;
    Ok(generate::generate(&model))
}
