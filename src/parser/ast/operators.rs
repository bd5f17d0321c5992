use std::fmt;

use crate::parser::ParseError;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ComparatorOp {
    GtEq,
    LtEq,
    NotEq,
    Gt,
    Lt,
    Eq,
}

impl ComparatorOp {
    /// Scan order used when splitting a predicate segment.
    pub const ALL: [ComparatorOp; 6] = [
        ComparatorOp::GtEq,
        ComparatorOp::LtEq,
        ComparatorOp::NotEq,
        ComparatorOp::Gt,
        ComparatorOp::Lt,
        ComparatorOp::Eq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComparatorOp::GtEq => ">=",
            ComparatorOp::LtEq => "<=",
            ComparatorOp::NotEq => "!=",
            ComparatorOp::Gt => ">",
            ComparatorOp::Lt => "<",
            ComparatorOp::Eq => "=",
        }
    }
}

impl TryFrom<&str> for ComparatorOp {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ComparatorOp::ALL
            .into_iter()
            .find(|op| op.as_str() == value)
            .ok_or_else(|| ParseError::malformed_predicate(value))
    }
}

impl fmt::Display for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Debug for ComparatorOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComparatorOp({})", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOperator {
    And,
    Or,
}

impl JoinOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinOperator::And => "AND",
            JoinOperator::Or => "OR",
        }
    }

    /// Exact, case-sensitive match on an already trimmed piece.
    pub fn check(piece: &str) -> Option<JoinOperator> {
        match piece {
            "AND" => Some(JoinOperator::And),
            "OR" => Some(JoinOperator::Or),
            _ => None,
        }
    }
}

impl fmt::Display for JoinOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
