mod declaration_tests;
mod union_tests;
