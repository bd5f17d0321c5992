pub mod query_parser;
pub use query_parser::*;

pub mod ast;
pub use ast::*;

pub mod parse_error;
pub use parse_error::*;

pub mod query_comparers;
pub use query_comparers::*;
