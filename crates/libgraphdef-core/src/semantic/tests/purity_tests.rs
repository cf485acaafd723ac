//! Tests for struct field and parameter purity.

use crate::test_utils::error_codes;
use crate::test_utils::parse_err;
use crate::test_utils::parse_ok;
use crate::ErrorCode;

/// Verifies that a resolver nested in containers makes a field impure.
#[test]
fn nested_resolver_field() {
    let diagnostics = parse_err("schema t\nresolver R { x Int32 }\nstruct S { f ?[]R }\nquery q S");
    let diagnostic = diagnostics.iter().next().unwrap();

    assert_eq!(diagnostics.codes(), vec![ErrorCode::StructFieldImpure]);
    assert!(diagnostic.message.contains("`S.f`"));
    assert!(diagnostic.message.contains("`?[]R`"));
}

/// Verifies that the same field is pure when it holds a struct.
#[test]
fn nested_struct_field() {
    parse_ok("schema t\nstruct R { x Int32 }\nstruct S { f ?[]R }\nquery q S");
}

/// Verifies that `None` is impure as a field type.
#[test]
fn none_field() {
    assert_eq!(
        error_codes("schema t\nstruct S { f None }\nquery q S"),
        vec![ErrorCode::StructFieldImpure],
    );
}

/// Verifies that an alias of a resolver is impure.
#[test]
fn alias_of_resolver_field() {
    assert_eq!(
        error_codes("schema t\nresolver R { x Int32 }\nalias RA = R\nstruct S { f RA }\nquery q S"),
        vec![ErrorCode::StructFieldImpure],
    );
}

/// Verifies that parameters must be pure.
#[test]
fn impure_parameters() {
    let text = "\
schema t
resolver R { x Int32 }
query q(r R) Int32
mutation m(n ?None) Int32";

    assert_eq!(
        error_codes(text),
        vec![ErrorCode::ParamImpure, ErrorCode::ParamImpure],
    );
}

/// Verifies that resolver properties and endpoints may be impure.
#[test]
fn properties_and_endpoints_may_be_impure() {
    parse_ok(
        "schema t\nresolver R { x Int32 }\nresolver Q { r R n None }\nquery q Q\nmutation m None",
    );
}
