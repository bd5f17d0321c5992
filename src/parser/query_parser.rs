use tracing::{debug, warn};

use crate::parser::{Filter, ParseError, ParsedQuery, ProjectionParser, WhereParser};

/// Entry point of the parser. Holds no state; each call works on its own
/// input only.
#[derive(Debug, Default, Clone, Copy)]
pub struct QueryParser;

impl QueryParser {
    pub fn parse(query: &str) -> Result<ParsedQuery, ParseError> {
        debug!(query, "parsing query");

        let result = Self::parse_clauses(query);
        if let Err(err) = &result {
            warn!(query, error = %err, "query rejected");
        }

        result
    }

    fn parse_clauses(query: &str) -> Result<ParsedQuery, ParseError> {
        let output = ProjectionParser::parse(query)?;

        match WhereParser::parse(query)? {
            Some(criteria) => Ok(ParsedQuery::SelectWithFilter(Filter::new(output, criteria))),
            None => Ok(ParsedQuery::SelectOnly { output }),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::*;

    #[test]
    pub fn test_select_only() {
        let result = QueryParser::parse("SELECT a, b FROM t").expect("Failed to parse query");
        assert_eq!(result, ParsedQuery::SelectOnly { output: vec!["a".into(), "b".into()] });
    }

    #[test]
    pub fn test_select_with_filter() {
        let result = QueryParser::parse("SELECT a FROM t WHERE a > 1 AND b < 2").expect("Failed to parse query");

        match result {
            ParsedQuery::SelectWithFilter(filter) => {
                assert_eq!(filter.output, vec!["a"]);
                assert_eq!(filter.table_name, TABLE_NAME);
                assert_eq!(filter.raw_condition, "a > 1 AND b < 2");
                assert_eq!(filter.predicates, vec![
                    Predicate::new("a", ComparatorOp::Gt, "1"),
                    Predicate::new("b", ComparatorOp::Lt, "2"),
                ]);
                assert_eq!(filter.join_operators, vec![JoinOperator::And]);
            },
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_single_predicate() {
        let result = QueryParser::parse("SELECT id FROM users WHERE age >= 18").expect("Failed to parse query");

        match result {
            ParsedQuery::SelectWithFilter(filter) => {
                assert_eq!(filter.output, vec!["id"]);
                assert_eq!(filter.table_name, "PAR_DATA");
                assert_eq!(filter.predicates, vec![Predicate::new("age", ComparatorOp::GtEq, "18")]);
                assert!(filter.join_operators.is_empty());
            },
            _ => panic!(),
        }
    }

    #[test]
    pub fn test_string_constant_is_opaque() {
        let result = QueryParser::parse("SELECT name FROM people WHERE age > 30 AND city = 'Boston'")
            .expect("Failed to parse query");
        let filter = result.filter().expect("Missing filter");

        assert_eq!(filter.predicates[1].value, "'Boston'");
        assert_eq!(filter.predicates.len(), filter.join_operators.len() + 1);
    }

    #[test]
    pub fn test_missing_from() {
        assert_eq!(QueryParser::parse("SELECT a"), Err(ParseError::MalformedSelect));
    }

    #[test]
    pub fn test_select_checked_before_where() {
        assert_eq!(QueryParser::parse("DELETE x WHERE a"), Err(ParseError::MalformedSelect));
    }

    #[test]
    pub fn test_bad_predicate_aborts_whole_parse() {
        match QueryParser::parse("SELECT a FROM t WHERE a > 1 AND b") {
            Ok(_) => panic!(),
            Err(err) => assert_eq!(err, ParseError::MalformedPredicate { segment: "b".into() }),
        }
    }

    #[test]
    pub fn test_parse_is_repeatable() {
        let query = "SELECT a, b FROM t WHERE a != 2 OR b <= 3";
        let first = QueryParser::parse(query).expect("Failed to parse query");
        let second = QueryParser::parse(query).expect("Failed to parse query");
        assert_eq!(first, second);
    }
}
