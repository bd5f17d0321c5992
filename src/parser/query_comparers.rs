use once_cell::sync::Lazy;
use regex::Regex;

/// Compiled patterns for every keyword and symbol the parser recognizes.
#[derive(Debug)]
pub struct QueryComparers {
    /// `SELECT <columns> FROM`, case-insensitive, shortest column capture.
    pub select: Regex,
    /// `WHERE <condition>` up to the end of the line, case-insensitive.
    pub r#where: Regex,
    /// Literal `AND` / `OR`, case-sensitive and not word-bounded.
    pub join: Regex,
    /// Comparison symbols; two-character symbols come first so `>=` never
    /// splits as `>` followed by `=`.
    pub comparison: Regex,
}

pub static COMPARERS: Lazy<QueryComparers> = Lazy::new(QueryComparers::new);

impl Default for QueryComparers {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryComparers {
    pub fn new() -> Self {
        Self {
            select: Regex::new(r"(?i)SELECT\s+(.*?)\s+FROM").expect("select pattern"),
            r#where: Regex::new(r"(?i)WHERE\s+(.*)").expect("where pattern"),
            join: Regex::new(r"AND|OR").expect("join pattern"),
            comparison: Regex::new(r">=|<=|!=|>|<|=").expect("comparison pattern"),
        }
    }

    pub fn global() -> &'static QueryComparers {
        &COMPARERS
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::QueryComparers;

    #[test]
    pub fn test_select_is_case_insensitive_and_lazy() {
        let comparers = QueryComparers::global();
        let caps = comparers.select
            .captures("select a, b from t where x from y")
            .expect("Failed to match select");
        assert_eq!(&caps[1], "a, b");
    }

    #[test]
    pub fn test_select_requires_from() {
        assert!(!QueryComparers::global().select.is_match("SELECT a"));
    }

    #[test]
    pub fn test_join_is_case_sensitive() {
        let join = &QueryComparers::global().join;
        assert!(!join.is_match("a > 1 and b < 2"));
        assert!(join.is_match("a > 1 AND b < 2"));
    }

    #[test]
    pub fn test_comparison_prefers_two_char_symbols() {
        let found: Vec<&str> = QueryComparers::global().comparison
            .find_iter("x >= 5")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec![">="]);
    }
}
