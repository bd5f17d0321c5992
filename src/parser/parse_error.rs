use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No `SELECT ... FROM` shape anywhere in the text.
    MalformedSelect,
    /// A WHERE segment that does not split into field, operator and value.
    MalformedPredicate { segment: String },
}

impl ParseError {
    pub fn malformed_predicate(segment: &str) -> Self {
        Self::MalformedPredicate { segment: segment.trim().to_string() }
    }

    pub fn err<T>(self) -> Result<T, ParseError> {
        Err(self)
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MalformedSelect => write!(
                f,
                "Invalid query format. Please provide a valid SELECT query."
            ),
            ParseError::MalformedPredicate { segment } => write!(
                f,
                "Invalid filter function format. Please provide a valid filter function.\n  at -> '{}'",
                segment
            ),
        }
    }
}

impl std::error::Error for ParseError {}
