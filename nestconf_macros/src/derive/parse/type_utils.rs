//! Type introspection helpers.
//!
//! Declared fields are written as `Option<T>`; these helpers recognise that
//! wrapper on the outermost layer of a `syn::Type`.

use syn::{GenericArgument, PathArguments, Type};

/// Extract the first type argument from a `PathArguments` container.
fn extract_first_type_argument(args: &PathArguments) -> Option<&Type> {
    let PathArguments::AngleBracketed(angle_args) = args else {
        return None;
    };
    let first = angle_args.args.first()?;
    let GenericArgument::Type(inner) = first else {
        return None;
    };
    Some(inner)
}

/// Returns the inner type if `ty` is `Option<T>`.
///
/// The check is shallow: only the final path segment is inspected, so
/// `std::option::Option<T>` and `core::option::Option<T>` match while
/// `Option<Vec<T>>` yields `Vec<T>` rather than `T`.
pub(crate) fn option_inner(ty: &Type) -> Option<&Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    if p.qself.is_some() {
        return None;
    }
    let last = p.path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    extract_first_type_argument(&last.arguments)
}
