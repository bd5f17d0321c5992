use std::fmt::Display;

use crate::parser::ParseError;

#[derive(Debug)]
pub enum SessionError {
    Parse(ParseError),
    Io(std::io::Error),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionError::Parse(err) => write!(f, "{}", err),
            SessionError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Parse(err) => Some(err),
            SessionError::Io(err) => Some(err),
        }
    }
}

impl From<ParseError> for SessionError {
    fn from(err: ParseError) -> Self {
        SessionError::Parse(err)
    }
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Io(err)
    }
}
