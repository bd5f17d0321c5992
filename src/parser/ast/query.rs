use crate::parser::{Criteria, JoinOperator, ParseError, Predicate, QueryParser};

/// Table name reported for every filtered query.
pub const TABLE_NAME: &str = "PAR_DATA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub output: Vec<String>,
    pub table_name: String,
    pub raw_condition: String,
    pub predicates: Vec<Predicate>,
    pub join_operators: Vec<JoinOperator>,
}

impl Filter {
    pub fn new(output: Vec<String>, criteria: Criteria) -> Self {
        Self {
            output,
            table_name: TABLE_NAME.to_string(),
            raw_condition: criteria.raw_condition,
            predicates: criteria.predicates,
            join_operators: criteria.join_operators,
        }
    }

    /// Pairs every predicate with the operator joining it to the next one,
    /// `None` for the last.
    pub fn chain(&self) -> impl Iterator<Item = (&Predicate, Option<JoinOperator>)> {
        self.predicates
            .iter()
            .enumerate()
            .map(|(i, predicate)| (predicate, self.join_operators.get(i).copied()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedQuery {
    SelectOnly { output: Vec<String> },
    SelectWithFilter(Filter),
}

impl ParsedQuery {
    pub fn output(&self) -> &[String] {
        match self {
            ParsedQuery::SelectOnly { output } => output,
            ParsedQuery::SelectWithFilter(filter) => &filter.output,
        }
    }

    pub fn filter(&self) -> Option<&Filter> {
        match self {
            ParsedQuery::SelectOnly { .. } => None,
            ParsedQuery::SelectWithFilter(filter) => Some(filter),
        }
    }
}

impl TryFrom<&str> for ParsedQuery {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        QueryParser::parse(value)
    }
}
