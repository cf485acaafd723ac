//! Tests for declaration-level diagnostics: redeclarations, empty bodies
//! and undefined types.

use crate::test_utils::error_codes;
use crate::test_utils::parse_err;
use crate::ErrorCode;

// =============================================================================
// Redeclarations
// =============================================================================

/// Verifies that two types may not share a name, across kinds.
#[test]
fn type_redeclaration_across_kinds() {
    assert_eq!(
        error_codes("schema t\nstruct A { a Int32 }\nresolver A { b Int32 }\nquery q A"),
        vec![ErrorCode::TypeRedecl],
    );
}

/// Verifies that a primitive name cannot be declared.
#[test]
fn primitive_redeclaration() {
    assert_eq!(
        error_codes("schema t\nenum Time { now }\nquery q Int32"),
        vec![ErrorCode::TypeRedecl],
    );
}

/// Verifies that a duplicated enum value is reported at the duplicate.
#[test]
fn enum_value_redeclaration() {
    let diagnostics = parse_err("schema t\nenum E { a b a }\nquery q E");
    let diagnostic = diagnostics.iter().next().unwrap();

    assert_eq!(diagnostics.codes(), vec![ErrorCode::EnumValRedecl]);
    assert_eq!(diagnostic.position.line(), 2);
    assert_eq!(diagnostic.position.column(), 14);
}

/// Verifies that a duplicated struct field is reported.
#[test]
fn struct_field_redeclaration() {
    assert_eq!(
        error_codes("schema t\nstruct S { a Int32 a String }\nquery q S"),
        vec![ErrorCode::StructFieldRedecl],
    );
}

/// Verifies that a duplicated resolver property is reported.
#[test]
fn resolver_property_redeclaration() {
    assert_eq!(
        error_codes("schema t\nresolver R { a Int32 a(x Int32) Int32 }\nquery q R"),
        vec![ErrorCode::ResolverPropRedecl],
    );
}

/// Verifies that queries and mutations share one namespace.
#[test]
fn root_node_redeclaration_across_endpoint_kinds() {
    assert_eq!(
        error_codes("schema t\nquery q String\nmutation q Int32"),
        vec![ErrorCode::GraphRootNodeRedecl],
    );
}

/// Verifies that a root node may share its name with a struct field.
#[test]
fn root_names_do_not_clash_with_fields() {
    crate::test_utils::parse_ok("schema t\nstruct S { q Int32 }\nquery q S");
}

/// Verifies that a duplicated parameter is reported.
#[test]
fn parameter_redeclaration() {
    assert_eq!(
        error_codes("schema t\nquery q(a Int32, a Int32) Int32"),
        vec![ErrorCode::ParamRedecl],
    );
}

/// Verifies that parameters of a rejected endpoint are still checked for
/// duplicates.
#[test]
fn parameters_of_rejected_endpoint() {
    assert_eq!(
        error_codes("schema t\nquery q Int32\nquery q(a Int32, a Int32) Int32"),
        vec![ErrorCode::GraphRootNodeRedecl, ErrorCode::ParamRedecl],
    );
}

// =============================================================================
// Empty bodies
// =============================================================================

/// Verifies that empty bodies are reported at the type name.
#[test]
fn empty_bodies() {
    let diagnostics = parse_err(
        "schema t\nstruct S { }\nenum E { }\nresolver R { }\nquery q Int32",
    );

    assert_eq!(
        diagnostics.codes(),
        vec![
            ErrorCode::StructNoFields,
            ErrorCode::EnumNoVal,
            ErrorCode::ResolverNoProps,
        ],
    );
    let first = diagnostics.iter().next().unwrap();
    assert_eq!(first.position.line(), 2);
    assert_eq!(first.position.column(), 8);
}

// =============================================================================
// Undefined types
// =============================================================================

/// Verifies that an undefined terminal is reported at the terminal, not at
/// the start of the designation.
#[test]
fn undefined_type_at_terminal() {
    let diagnostics = parse_err("schema t\nquery q ?[]Nope");
    let diagnostic = diagnostics.iter().next().unwrap();

    assert_eq!(diagnostics.codes(), vec![ErrorCode::TypeUndef]);
    assert_eq!(diagnostic.position.column(), 12);
    assert_eq!(diagnostic.message, "undefined type `Nope`");
}

/// Verifies that every unresolved reference is reported, including alias
/// targets and parameter types.
#[test]
fn undefined_types_everywhere() {
    assert_eq!(
        error_codes("schema t\nalias A = Missing\nstruct S { a Gone }\nquery q(p Lost) S"),
        vec![ErrorCode::TypeUndef, ErrorCode::TypeUndef, ErrorCode::TypeUndef],
    );
}
