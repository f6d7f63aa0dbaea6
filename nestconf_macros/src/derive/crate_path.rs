//! Runtime crate path used by generated records.
//!
//! Every trait impl, descriptor and `__private` decoding helper emitted for a
//! record is reached through this path. `#[nestconf(crate = "...")]` swaps it
//! for projects that depend on the runtime under another name or reach it
//! through a facade crate.

use proc_macro2::TokenStream;
use quote::quote;

/// Path to the runtime crate, `nestconf` unless overridden.
///
/// The runtime's own unit tests derive records with `crate = "crate"`.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { nestconf }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    //! Resolution of the default, local and facade runtime paths.

    use super::*;
    use anyhow::{Result, anyhow, ensure};
    use rstest::rstest;

    fn path(text: &str) -> Result<syn::Path> {
        syn::parse_str(text).map_err(|err| anyhow!("{text}: {err}"))
    }

    #[rstest]
    #[case::runtime_tests("crate", "crate")]
    #[case::facade("sweeps::config::nestconf", "sweeps :: config :: nestconf")]
    #[case::absolute("::nestconf", ":: nestconf")]
    fn overrides_replace_the_runtime_path(
        #[case] input: &str,
        #[case] expected: &str,
    ) -> Result<()> {
        let parsed = path(input)?;
        let tokens = resolve(Some(&parsed));
        ensure!(tokens.to_string() == expected, "got {tokens}");
        Ok(())
    }

    #[test]
    fn generated_helpers_hang_off_the_default_path() {
        let krate = resolve(None);
        let helper = quote! { #krate::__private::decode_record };
        assert_eq!(helper.to_string(), "nestconf :: __private :: decode_record");
    }
}
