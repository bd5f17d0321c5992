use tracing::debug;

use crate::parser::{ParseError, QueryComparers};

pub struct ProjectionParser;

impl ProjectionParser {
    /// Columns between the first `SELECT` and the following `FROM`, in
    /// written order. Identifiers are not validated.
    pub fn parse(query: &str) -> Result<Vec<String>, ParseError> {
        let comparers = QueryComparers::global();

        let Some(captures) = comparers.select.captures(query) else {
            return ParseError::MalformedSelect.err();
        };

        let columns = captures
            .get(1)
            .map_or("", |m| m.as_str())
            .split(',')
            .map(|column| column.trim().to_string())
            .collect::<Vec<_>>();

        debug!(?columns, "projection");

        Ok(columns)
    }
}
