//! Emits the record struct and its `Record`/`RecordType` implementations.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::LitStr;

use super::compact_text;
use crate::derive::model::{ConfigField, ConfigurableInput, DefaultKind, FieldRole};

/// Type of `field` as stored in the record.
fn stored_type(field: &ConfigField, krate: &TokenStream) -> TokenStream {
    match &field.role {
        FieldRole::Plain { inner } => quote! { ::core::option::Option<#inner> },
        FieldRole::Nested { inner } => {
            quote! { ::core::option::Option<<#inner as #krate::HasConfig>::Config> }
        }
        FieldRole::Extends { ty } => quote! { <#ty as #krate::HasConfig>::Config },
    }
}

/// Expression producing the declared default of `field`.
///
/// Nested defaults are written as values of the declaring type and are
/// snapshotted into its record.
fn default_value(field: &ConfigField, krate: &TokenStream) -> TokenStream {
    let produce = match &field.default {
        DefaultKind::Null => None,
        DefaultKind::Literal(expr) => Some(quote! { (#expr) }),
        DefaultKind::Factory(path) => Some(quote! { (#path)() }),
    };
    match (&field.role, produce) {
        (FieldRole::Extends { .. }, _) => quote! { ::core::default::Default::default() },
        (_, None) => quote! { ::core::option::Option::None },
        (FieldRole::Plain { .. }, Some(value)) => quote! { ::core::option::Option::Some(#value) },
        (FieldRole::Nested { inner }, Some(value)) => quote! {
            ::core::option::Option::Some(<#inner as #krate::HasConfig>::config(&#value))
        },
    }
}

fn ancestor_config(field: &ConfigField, krate: &TokenStream) -> TokenStream {
    let ty = match &field.role {
        FieldRole::Extends { ty } => ty.to_token_stream(),
        FieldRole::Plain { inner } | FieldRole::Nested { inner } => inner.to_token_stream(),
    };
    quote! { <#ty as #krate::HasConfig>::Config }
}

fn name_lit(field: &ConfigField) -> LitStr {
    LitStr::new(&field.ident.to_string(), field.ident.span())
}

fn field_docs(field: &ConfigField) -> TokenStream {
    if !field.docs.is_empty() {
        let docs = &field.docs;
        return quote! { #(#docs)* };
    }
    let text = match &field.role {
        FieldRole::Extends { ty } => format!("Fields inherited from `{}`.", compact_text(ty)),
        FieldRole::Plain { .. } | FieldRole::Nested { .. } => {
            format!("Value of `{}`.", field.ident)
        }
    };
    quote! { #[doc = #text] }
}

fn record_struct(model: &ConfigurableInput, krate: &TokenStream) -> TokenStream {
    let vis = &model.vis;
    let record = &model.record_ident;
    let doc = format!("Configuration record derived from `{}`.", model.ident);
    let fields = model.ordered().map(|field| {
        let ident = &field.ident;
        let docs = field_docs(field);
        let ty = stored_type(field, krate);
        quote! {
            #docs
            #ident: #ty,
        }
    });
    let defaults = model.ordered().map(|field| {
        let ident = &field.ident;
        let value = default_value(field, krate);
        quote! { #ident: #value, }
    });
    quote! {
        #[doc = #doc]
        #[derive(::core::clone::Clone, ::core::fmt::Debug)]
        #vis struct #record {
            #(#fields)*
        }

        #[automatically_derived]
        impl ::core::default::Default for #record {
            fn default() -> Self {
                Self {
                    #(#defaults)*
                }
            }
        }
    }
}

/// Read-only accessors; record fields are private and never reassigned.
fn accessors(model: &ConfigurableInput, krate: &TokenStream) -> TokenStream {
    let record = &model.record_ident;
    let methods = model.ordered().map(|field| {
        let ident = &field.ident;
        let docs = field_docs(field);
        let (ty, body) = match &field.role {
            FieldRole::Plain { inner } => (
                quote! { ::core::option::Option<&#inner> },
                quote! { self.#ident.as_ref() },
            ),
            FieldRole::Nested { inner } => (
                quote! { ::core::option::Option<&<#inner as #krate::HasConfig>::Config> },
                quote! { self.#ident.as_ref() },
            ),
            FieldRole::Extends { ty } => (
                quote! { &<#ty as #krate::HasConfig>::Config },
                quote! { &self.#ident },
            ),
        };
        quote! {
            #docs
            #[must_use]
            pub const fn #ident(&self) -> #ty {
                #body
            }
        }
    });
    quote! {
        #[automatically_derived]
        impl #record {
            #(#methods)*
        }
    }
}

fn record_impl(model: &ConfigurableInput, krate: &TokenStream) -> TokenStream {
    let record = &model.record_ident;
    let entries = if model.fields.is_empty() {
        quote! { ::std::vec::Vec::new() }
    } else {
        let inherited = model.ancestors().map(|field| {
            let ident = &field.ident;
            quote! { entries.extend(#krate::Record::entries(&self.#ident)); }
        });
        let own = model.own().map(|field| {
            let ident = &field.ident;
            let name = name_lit(field);
            let constructor = if matches!(field.role, FieldRole::Nested { .. }) {
                quote! { nested }
            } else {
                quote! { plain }
            };
            quote! {
                entries.push(#krate::FieldEntry::#constructor(#name, self.#ident.as_ref()));
            }
        });
        quote! {
            let mut entries = ::std::vec::Vec::new();
            #(#inherited)*
            #(#own)*
            entries
        }
    };
    quote! {
        #[automatically_derived]
        impl #krate::Record for #record {
            fn record_name(&self) -> &'static str {
                <Self as #krate::RecordType>::NAME
            }

            fn entries(&self) -> ::std::vec::Vec<#krate::FieldEntry<'_>> {
                #entries
            }

            fn as_any(&self) -> &dyn ::core::any::Any {
                self
            }
        }
    }
}

fn descriptor(field: &ConfigField, krate: &TokenStream) -> TokenStream {
    let name = name_lit(field);
    let (type_tag, nested) = match &field.role {
        FieldRole::Plain { inner } => (compact_text(inner), false),
        FieldRole::Nested { inner } => (compact_text(inner), true),
        FieldRole::Extends { ty } => (compact_text(ty), false),
    };
    let default = match &field.default {
        DefaultKind::Null => quote! { #krate::FieldDefault::Null },
        DefaultKind::Literal(expr) => {
            let text = expr.to_token_stream().to_string();
            quote! { #krate::FieldDefault::Literal(#text) }
        }
        DefaultKind::Factory(path) => {
            let text = compact_text(path);
            quote! { #krate::FieldDefault::Factory(#text) }
        }
    };
    quote! { #krate::FieldDescriptor::new(#name, #type_tag, #default, #nested) }
}

fn fields_fn(model: &ConfigurableInput, krate: &TokenStream) -> TokenStream {
    if model.fields.is_empty() {
        return quote! {
            fn fields() -> &'static [#krate::FieldDescriptor] {
                &[]
            }
        };
    }
    let inherited = model.ancestors().map(|field| {
        let ancestor = ancestor_config(field, krate);
        quote! { fields.extend_from_slice(<#ancestor as #krate::RecordType>::fields()); }
    });
    let own = model.own().map(|field| {
        let descriptor = descriptor(field, krate);
        quote! { fields.push(#descriptor); }
    });
    quote! {
        fn fields() -> &'static [#krate::FieldDescriptor] {
            static FIELDS: #krate::__private::LazyLock<::std::vec::Vec<#krate::FieldDescriptor>> =
                #krate::__private::LazyLock::new(|| {
                    let mut fields = ::std::vec::Vec::new();
                    #(#inherited)*
                    #(#own)*
                    fields
                });
            FIELDS.as_slice()
        }
    }
}

/// Match arms delegating unclaimed names to ancestor records.
fn ancestor_arms<F>(model: &ConfigurableInput, krate: &TokenStream, call: F) -> Vec<TokenStream>
where
    F: Fn(&syn::Ident) -> TokenStream,
{
    model
        .ancestors()
        .map(|field| {
            let ancestor = ancestor_config(field, krate);
            let body = call(&field.ident);
            quote! { _ if <#ancestor as #krate::RecordType>::declares(name) => #body, }
        })
        .collect()
}

fn set_field_fn(model: &ConfigurableInput, krate: &TokenStream) -> TokenStream {
    let own = model.own().map(|field| {
        let ident = &field.ident;
        let name = name_lit(field);
        let decode = if matches!(field.role, FieldRole::Nested { .. }) {
            quote! { decode_record }
        } else {
            quote! { decode }
        };
        quote! {
            #name => {
                self.#ident = #krate::__private::#decode(name, value)?;
                ::core::result::Result::Ok(true)
            }
        }
    });
    let inherited = ancestor_arms(model, krate, |ident| {
        quote! { #krate::RecordType::set_field(&mut self.#ident, name, value) }
    });
    let unused = model
        .fields
        .is_empty()
        .then(|| quote! { let _ = value; });
    quote! {
        fn set_field(
            &mut self,
            name: &str,
            value: #krate::serde_json::Value,
        ) -> #krate::NestconfResult<bool> {
            #unused
            match name {
                #(#own)*
                #(#inherited)*
                _ => ::core::result::Result::Ok(false),
            }
        }
    }
}

fn take_field_fn(model: &ConfigurableInput, krate: &TokenStream) -> TokenStream {
    let own = model.own().map(|field| {
        let ident = &field.ident;
        let name = name_lit(field);
        quote! {
            #name => {
                self.#ident = source.#ident.take();
                true
            }
        }
    });
    let inherited = ancestor_arms(model, krate, |ident| {
        quote! { #krate::RecordType::take_field(&mut self.#ident, &mut source.#ident, name) }
    });
    let unused = model
        .fields
        .is_empty()
        .then(|| quote! { let _ = source; });
    quote! {
        fn take_field(&mut self, source: &mut Self, name: &str) -> bool {
            #unused
            match name {
                #(#own)*
                #(#inherited)*
                _ => false,
            }
        }
    }
}

fn reset_field_fn(model: &ConfigurableInput, krate: &TokenStream) -> TokenStream {
    let own = model.own().map(|field| {
        let ident = &field.ident;
        let name = name_lit(field);
        let value = default_value(field, krate);
        quote! {
            #name => {
                self.#ident = #value;
                true
            }
        }
    });
    let inherited = ancestor_arms(model, krate, |ident| {
        quote! { #krate::RecordType::reset_field(&mut self.#ident, name) }
    });
    quote! {
        fn reset_field(&mut self, name: &str) -> bool {
            match name {
                #(#own)*
                #(#inherited)*
                _ => false,
            }
        }
    }
}

fn record_type_impl(model: &ConfigurableInput, krate: &TokenStream) -> TokenStream {
    let record = &model.record_ident;
    let name = record.to_string();
    let empty = model.ordered().map(|field| {
        let ident = &field.ident;
        let value = if field.is_ancestor() {
            let ancestor = ancestor_config(field, krate);
            quote! { <#ancestor as #krate::RecordType>::empty() }
        } else {
            quote! { ::core::option::Option::None }
        };
        quote! { #ident: #value, }
    });
    let fields = fields_fn(model, krate);
    let set_field = set_field_fn(model, krate);
    let take_field = take_field_fn(model, krate);
    let reset_field = reset_field_fn(model, krate);
    quote! {
        #[automatically_derived]
        impl #krate::RecordType for #record {
            const NAME: &'static str = #name;

            #fields

            fn empty() -> Self {
                Self {
                    #(#empty)*
                }
            }

            #set_field
            #take_field
            #reset_field
        }
    }
}

/// Digest equality, canonical JSON display and serde support.
fn std_impls(model: &ConfigurableInput, krate: &TokenStream) -> TokenStream {
    let record = &model.record_ident;
    quote! {
        #[automatically_derived]
        impl ::core::cmp::PartialEq for #record {
            fn eq(&self, other: &Self) -> bool {
                #krate::Record::digest(self) == #krate::Record::digest(other)
            }
        }

        #[automatically_derived]
        impl ::core::cmp::Eq for #record {}

        #[automatically_derived]
        impl ::core::hash::Hash for #record {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash(&#krate::Record::digest(self), state);
            }
        }

        #[automatically_derived]
        impl ::core::fmt::Display for #record {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&#krate::Record::to_canonical_json(self))
            }
        }

        #[automatically_derived]
        impl #krate::serde::Serialize for #record {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: #krate::serde::Serializer,
            {
                #krate::serde::Serialize::serialize(&#krate::Record::to_mapping(self), serializer)
            }
        }

        #[automatically_derived]
        impl<'de> #krate::serde::Deserialize<'de> for #record {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: #krate::serde::Deserializer<'de>,
            {
                let value =
                    <#krate::serde_json::Value as #krate::serde::Deserialize>::deserialize(deserializer)?;
                <Self as #krate::RecordType>::from_mapping(value)
                    .map_err(<D::Error as #krate::serde::de::Error>::custom)
            }
        }
    }
}

/// Emit the record type and every trait implementation it carries.
pub(super) fn generate_record(model: &ConfigurableInput, krate: &TokenStream) -> TokenStream {
    let definition = record_struct(model, krate);
    let getters = accessors(model, krate);
    let record = record_impl(model, krate);
    let record_type = record_type_impl(model, krate);
    let std = std_impls(model, krate);
    quote! {
        #definition
        #getters
        #record
        #record_type
        #std
    }
}
