//! The graphdef schema compiler front end.
//!
//! [`parse()`] turns one [`SourceFile`] into a validated, immutable
//! [`SchemaModel`], or into the full list of [`Diagnostics`] explaining why
//! it was rejected. A model is returned only when no diagnostic at all was
//! recorded.
//!
//! ```
//! use libgraphdef_core::SourceFile;
//!
//! let source = SourceFile::new(
//!     "test.gdef",
//!     "schema test\nstruct Foo { foo String }\nquery getFoo Foo",
//! );
//! let model = libgraphdef_core::parse(&source).unwrap();
//!
//! assert_eq!(model.name(), "test");
//! assert_eq!(model.struct_types().count(), 1);
//! assert_eq!(model.queries().next().unwrap().name(), "getFoo");
//! ```

pub mod diagnostics;
pub mod graph;
pub mod parser;
mod schema;
mod semantic;
mod source_file;
pub mod types;

pub use diagnostics::Diagnostics;
pub use diagnostics::ErrorCode;
pub use libgraphdef_parser::Cursor;
pub use libgraphdef_parser::FileRef;
pub use schema::SchemaModel;
pub use source_file::SourceFile;

/// Parses, resolves and validates `source_file`.
pub fn parse(source_file: &SourceFile) -> Result<SchemaModel, Diagnostics> {
    parser::SchemaParser::new(source_file).parse().into_result()
}

#[cfg(test)]
mod test_utils;
