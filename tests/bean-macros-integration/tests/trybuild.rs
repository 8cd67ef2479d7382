//! trybuild compile-time tests for bean_macros

#[test]
fn trybuild_bean_macros() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/ok_bean.rs");
    t.pass("tests/trybuild/ok_generic_bean.rs");
}
