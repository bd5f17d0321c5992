use tracing::debug;

use crate::parser::{ComparatorOp, ParseError, QueryComparers};

/// One `field <op> value` comparison. Both operands are kept as opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Predicate {
    pub field: String,
    pub operator: ComparatorOp,
    pub value: String,
}

impl Predicate {
    pub fn new(field: &str, operator: ComparatorOp, value: &str) -> Self {
        Self {
            field: field.to_string(),
            operator,
            value: value.to_string(),
        }
    }

    /// Splits a segment at its comparison symbol. The symbol must occur
    /// exactly once, otherwise the segment is rejected.
    pub fn parse(segment: &str) -> Result<Self, ParseError> {
        let comparers = QueryComparers::global();
        let mut symbols = comparers.comparison.find_iter(segment);

        let (Some(symbol), None) = (symbols.next(), symbols.next()) else {
            return ParseError::malformed_predicate(segment).err();
        };

        let operator = ComparatorOp::try_from(symbol.as_str())?;
        let field = segment[..symbol.start()].trim();
        let value = segment[symbol.end()..].trim();

        debug!(field, %operator, value, "predicate");

        Ok(Self::new(field, operator, value))
    }
}
