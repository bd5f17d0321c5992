pub mod query;
pub use query::*;

pub mod operators;
pub use operators::*;

pub mod predicate;
pub use predicate::*;

pub mod projection_parser;
pub use projection_parser::*;

pub mod where_parser;
pub use where_parser::*;
