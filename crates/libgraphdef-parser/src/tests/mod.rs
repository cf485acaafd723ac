mod cursor_tests;
mod fragment_tests;
mod lexer_error_tests;
mod lexer_tests;
mod utils;
