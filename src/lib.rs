pub mod parser;
pub use parser::{ParseError, ParsedQuery, QueryParser};

pub mod config;
pub use config::Config;

pub mod document;

pub mod console;
pub use console::{Session, SessionError};
