use std::fmt::Write;

pub const SHOP_SCHEMA: &str = include_str!("shop.gdef");

/// Generates a schema with `count` groups of related declarations.
///
/// Each group declares an alias, a struct, a resolver, a query and a
/// mutation, so every token kind appears in realistic proportions.
pub fn synthetic_schema(count: usize) -> String {
    let mut out = String::with_capacity(count * 400);
    out.push_str("schema bench\n\nenum Status { active inactive archived }\n\n");
    for i in 0..count {
        writeln!(out, "alias Id{i} = String").unwrap();
        writeln!(out, "struct Record{i} {{").unwrap();
        writeln!(out, "    id Id{i}").unwrap();
        writeln!(out, "    status Status").unwrap();
        writeln!(out, "    tags []String").unwrap();
        if i > 0 {
            writeln!(out, "    parent ?Record{}", i - 1).unwrap();
        }
        writeln!(out, "}}").unwrap();
        writeln!(out, "resolver Records{i} {{").unwrap();
        writeln!(out, "    byId(id Id{i}) ?Record{i}").unwrap();
        writeln!(out, "    list(limit ?Int32, after ?String) []Record{i}").unwrap();
        writeln!(out, "}}").unwrap();
        writeln!(out, "query records{i}(scope String) Records{i}").unwrap();
        writeln!(out, "mutation touch{i}(id Id{i}) Bool\n").unwrap();
    }
    out
}
