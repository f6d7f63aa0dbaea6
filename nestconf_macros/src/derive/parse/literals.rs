//! Literal parsing helpers for derive attributes.

use syn::{Lit, LitStr};

/// Parses a literal from an attribute using `extractor`.
///
/// The error names the attribute key and the expected literal kind so a
/// `rename = 3` points straight at the offending value.
fn parse_lit<T, F>(
    meta: &syn::meta::ParseNestedMeta,
    key: &str,
    expected: &str,
    extractor: F,
) -> Result<T, syn::Error>
where
    F: FnOnce(Lit) -> Option<T>,
{
    let literal = meta.value()?.parse::<Lit>()?;
    let span = literal.span();
    extractor(literal).ok_or_else(|| syn::Error::new(span, format!("{key} must be a {expected}")))
}

/// Parses a string literal from an attribute.
///
/// # Examples
///
/// ```rust,ignore
/// use syn::Attribute;
/// let attr: Attribute = syn::parse_quote!(#[nestconf(rename = "RunConfig")]);
/// attr.parse_nested_meta(|meta| {
///     let s = lit_str(&meta, "rename")?;
///     assert_eq!(s.value(), "RunConfig");
///     Ok(())
/// }).unwrap();
/// ```
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> Result<LitStr, syn::Error> {
    parse_lit(meta, key, "string", |lit| match lit {
        Lit::Str(s) => Some(s),
        _ => None,
    })
}
