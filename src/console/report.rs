use std::fmt::{self, Display};

use crate::parser::ParsedQuery;

/// Plain-text view of a parse result, one `Key: value` per line.
pub struct Report<'a>(pub &'a ParsedQuery);

impl Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Output: {}", self.0.output().join(", "))?;

        let Some(filter) = self.0.filter() else {
            return Ok(());
        };

        writeln!(f, "TableName: {}", filter.table_name)?;
        writeln!(f, "Function: {}", filter.raw_condition)?;
        writeln!(f, "Subfunctions: {}", filter.predicates.len())?;

        for (i, (predicate, join)) in filter.chain().enumerate() {
            let n = i + 1;
            writeln!(f, "Function-{}: {}", n, predicate.field)?;
            writeln!(f, "Symbol-{}: {}", n, predicate.operator)?;
            writeln!(f, "Constant-{}: {}", n, predicate.value)?;
            writeln!(f, "JType-{}: {}", n, join.map_or("", |j| j.as_str()))?;
            writeln!(f)?;
        }

        Ok(())
    }
}
