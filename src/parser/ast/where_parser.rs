use tracing::debug;

use crate::parser::{JoinOperator, ParseError, Predicate, QueryComparers};

/// The pieces of a WHERE clause: its trimmed text, the predicates and the
/// operators joining them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criteria {
    pub raw_condition: String,
    pub predicates: Vec<Predicate>,
    pub join_operators: Vec<JoinOperator>,
}

pub struct WhereParser;

impl WhereParser {
    /// Returns `None` when the query carries no WHERE clause.
    pub fn parse(query: &str) -> Result<Option<Criteria>, ParseError> {
        let comparers = QueryComparers::global();

        let Some(captures) = comparers.r#where.captures(query) else {
            return Ok(None);
        };

        let raw_condition = captures.get(1).map_or("", |m| m.as_str()).trim();
        debug!(raw_condition, "criteria");

        let mut predicates = vec![];
        let mut join_operators = vec![];

        for piece in Self::split(raw_condition) {
            let piece = piece.trim();
            match JoinOperator::check(piece) {
                Some(join) => join_operators.push(join),
                None => predicates.push(Predicate::parse(piece)?),
            }
        }

        if join_operators.len() + 1 != predicates.len() {
            return ParseError::malformed_predicate(raw_condition).err();
        }

        Ok(Some(Criteria {
            raw_condition: raw_condition.to_string(),
            predicates,
            join_operators,
        }))
    }

    /// Splits on every `AND` / `OR`, keeping each delimiter as its own piece.
    pub fn split(condition: &str) -> Vec<&str> {
        let comparers = QueryComparers::global();
        let mut pieces = vec![];
        let mut pivot = 0;

        for delimiter in comparers.join.find_iter(condition) {
            pieces.push(&condition[pivot..delimiter.start()]);
            pieces.push(delimiter.as_str());
            pivot = delimiter.end();
        }
        pieces.push(&condition[pivot..]);

        pieces
    }
}
