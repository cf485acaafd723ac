//! Tests for union declarations: option counting, redundancy,
//! self-reference and `None`.

use crate::test_utils::error_codes;
use crate::test_utils::parse_err;
use crate::test_utils::parse_ok;
use crate::types::PrimitiveType;
use crate::ErrorCode;

/// Verifies that options resolve in declaration order.
#[test]
fn options_resolve_in_order() {
    let model = parse_ok("schema t\nunion Value { String ?Int32 Item }\nstruct Item { a Int32 }\nquery v Value");

    let value = model.union_types().next().unwrap();
    let item = model.type_by_name("Item").unwrap().id();
    let optional_int = model.anonymous_type("?Int32").unwrap().id();
    let options: Vec<_> = value.option_type_ids().collect();
    assert_eq!(options, vec![PrimitiveType::String.id(), optional_int, item]);
    assert_eq!(value.options()[1].designation().canonical(), "?Int32");
}

/// Verifies that a union needs at least two options.
#[test]
fn too_few_options() {
    assert_eq!(
        error_codes("schema t\nunion U { String }\nquery q Int32"),
        vec![ErrorCode::UnionMissingOpts],
    );
    assert_eq!(
        error_codes("schema t\nunion U { }\nquery q Int32"),
        vec![ErrorCode::UnionMissingOpts],
    );
}

/// Verifies that repeating an option is redundant, and that the repeat
/// still counts toward the minimum.
#[test]
fn redundant_option() {
    assert_eq!(
        error_codes("schema t\nunion U { String String }\nquery q Int32"),
        vec![ErrorCode::UnionRedund],
    );
}

/// Verifies that redundancy compares whole designations and is reported
/// at the repeat.
#[test]
fn redundant_designation() {
    let diagnostics = parse_err("schema t\nunion U { []Int32 Int32 []Int32 }\nquery q Int32");
    let diagnostic = diagnostics.iter().next().unwrap();

    assert_eq!(diagnostics.codes(), vec![ErrorCode::UnionRedund]);
    assert_eq!(diagnostic.position.column(), 25);
    assert_eq!(diagnostic.notes[0].position.as_ref().unwrap().column(), 11);
}

/// Verifies that an alias and its target are distinct options.
#[test]
fn alias_and_target_are_distinct() {
    parse_ok("schema t\nalias Name = String\nunion U { Name String }\nquery q U");
}

/// Verifies that a union may not list itself.
#[test]
fn self_reference() {
    assert_eq!(
        error_codes("schema t\nunion U { Int32 U }\nquery q Int32"),
        vec![ErrorCode::UnionRecurs],
    );
}

/// Verifies that a container of the union itself is a different option.
#[test]
fn list_of_self_is_allowed() {
    parse_ok("schema t\nunion U { Int32 []U }\nquery q U");
}

/// Verifies that `None` is not a valid option.
#[test]
fn none_option() {
    assert_eq!(
        error_codes("schema t\nunion U { Int32 None }\nquery q Int32"),
        vec![ErrorCode::UnionIncludesNone],
    );
}

/// Verifies that a union with a resolver option is impure as a struct
/// field.
#[test]
fn union_purity_follows_options() {
    assert_eq!(
        error_codes(
            "schema t\nresolver R { x Int32 }\nunion U { Int32 R }\nstruct S { u U }\nquery q S",
        ),
        vec![ErrorCode::StructFieldImpure],
    );
}

/// Verifies that an alias of the union is still the union itself, even
/// when the alias is declared after the union.
#[test]
fn self_reference_through_alias() {
    assert_eq!(
        error_codes("schema t\nalias X = U\nunion U { Int32 X }\nquery q U"),
        vec![ErrorCode::UnionRecurs],
    );
    assert_eq!(
        error_codes("schema t\nunion U { Int32 Y }\nalias X = U\nalias Y = X\nquery q U"),
        vec![ErrorCode::UnionRecurs],
    );
}

/// Verifies that an alias of `None` is not a valid option, and is
/// reported at the option.
#[test]
fn none_through_alias() {
    let diagnostics = parse_err("schema t\nalias N = None\nunion U { Int32 N }\nquery q U");
    let diagnostic = diagnostics.iter().next().unwrap();

    assert_eq!(diagnostics.codes(), vec![ErrorCode::UnionIncludesNone]);
    assert_eq!(diagnostic.position.line(), 3);
    assert_eq!(diagnostic.position.column(), 17);
}
