//! Tests for struct containment cycle detection.

use crate::test_utils::error_codes;
use crate::test_utils::parse_err;
use crate::test_utils::parse_ok;
use crate::ErrorCode;

/// Verifies that two structs containing each other form one cycle,
/// rendered from the alphabetically first struct with each field's site.
#[test]
fn mutual_structs() {
    let diagnostics = parse_err("schema t\nstruct B { a A }\nstruct A { b B }\nquery q A");
    let diagnostic = diagnostics.iter().next().unwrap();

    assert_eq!(diagnostics.codes(), vec![ErrorCode::StructRecurs]);
    assert_eq!(
        diagnostic.message,
        "struct cycle: A.b (test.gdef:3:12) -> B.a (test.gdef:2:12) -> A",
    );
    assert_eq!(diagnostic.position.line(), 3);
}

/// Verifies that optional and list containers do not break a cycle.
#[test]
fn self_containment_through_containers() {
    let diagnostics = parse_err("schema t\nstruct Node { next ?[]Node }\nquery q Node");

    assert_eq!(diagnostics.codes(), vec![ErrorCode::StructRecurs]);
    assert_eq!(
        diagnostics.iter().next().unwrap().message,
        "struct cycle: Node.next (test.gdef:2:15) -> Node",
    );
}

/// Verifies that aliases are followed when looking for cycles.
#[test]
fn cycle_through_alias() {
    assert_eq!(
        error_codes(
            "schema t\nalias BRef = B\nstruct A { b []BRef }\nstruct B { a A }\nquery q A",
        ),
        vec![ErrorCode::StructRecurs],
    );
}

/// Verifies that separate cycles are each reported once.
#[test]
fn disjoint_cycles() {
    let text = "\
schema t
struct A { b B }
struct B { a A }
struct C { c C }
query q A";

    assert_eq!(error_codes(text), vec![ErrorCode::StructRecurs; 2]);
}

/// Verifies that a struct reachable along several paths is not a cycle.
#[test]
fn diamond_is_acyclic() {
    parse_ok(
        "\
schema t
struct Top { left Left right Right }
struct Left { leaf Leaf }
struct Right { leaf Leaf }
struct Leaf { value Int32 }
query q Top",
    );
}

/// Verifies that a resolver in between does not count as containment.
#[test]
fn resolvers_break_containment() {
    parse_ok(
        "\
schema t
resolver Children { list []Node }
struct Node { name String }
resolver Tree { root Node children Children }
query tree Tree",
    );
}
