//! trybuild coverage for `#[derive(Configurable)]` expansion.
//!
//! Each case is compiled as its own crate, so these check that generated code
//! stands alone outside the test harness: with the crate imported under
//! another name, with a renamed record and with records nested across
//! modules.

#[test]
fn derive_expansions_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/crate_alias.rs");
    t.pass("tests/trybuild/renamed_record.rs");
    t.pass("tests/trybuild/nested_modules.rs");
}
