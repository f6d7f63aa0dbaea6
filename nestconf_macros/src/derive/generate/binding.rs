//! Emits `HasConfig` and `Configurable` for the declaring struct.

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive::model::{ConfigField, ConfigurableInput, FieldRole};

/// Expression copying `self.<field>` into its record form.
fn snapshot(field: &ConfigField, krate: &TokenStream) -> TokenStream {
    let ident = &field.ident;
    match &field.role {
        FieldRole::Plain { .. } => quote! { ::core::clone::Clone::clone(&self.#ident) },
        FieldRole::Nested { inner } => quote! {
            self.#ident.as_ref().map(<#inner as #krate::HasConfig>::config)
        },
        FieldRole::Extends { ty } => quote! {
            <#ty as #krate::HasConfig>::config(&self.#ident)
        },
    }
}

/// Expression moving `config.<field>` back into the declaring struct.
fn restore(field: &ConfigField, krate: &TokenStream) -> TokenStream {
    let ident = &field.ident;
    match &field.role {
        FieldRole::Plain { .. } => quote! { config.#ident },
        FieldRole::Nested { inner } => quote! {
            config.#ident.map(<#inner as #krate::HasConfig>::from_config)
        },
        FieldRole::Extends { ty } => quote! {
            <#ty as #krate::HasConfig>::from_config(config.#ident)
        },
    }
}

pub(super) fn generate_binding(model: &ConfigurableInput, krate: &TokenStream) -> TokenStream {
    let ident = &model.ident;
    let record = &model.record_ident;
    let snapshots = model.fields.iter().map(|field| {
        let name = &field.ident;
        let value = snapshot(field, krate);
        quote! { #name: #value, }
    });
    let restores = model.fields.iter().map(|field| {
        let name = &field.ident;
        let value = restore(field, krate);
        quote! { #name: #value, }
    });
    let extras = model.skipped.iter().map(|name| {
        quote! { #name: ::core::default::Default::default(), }
    });
    let unused = model
        .fields
        .is_empty()
        .then(|| quote! { let _ = config; });
    quote! {
        #[automatically_derived]
        impl #krate::HasConfig for #ident {
            type Config = #record;

            fn config(&self) -> #record {
                #record {
                    #(#snapshots)*
                }
            }

            fn from_config(config: #record) -> Self {
                #unused
                Self {
                    #(#restores)*
                    #(#extras)*
                }
            }
        }

        #[automatically_derived]
        impl #krate::Configurable for #ident {}
    }
}
