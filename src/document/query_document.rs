use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::parser::{ParsedQuery, Predicate};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonLayout {
    #[default]
    Compact,
    /// Four-space indented.
    Pretty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FunctionDocument {
    pub function: String,
    pub symbol: String,
    pub constant: String,
}

impl From<&Predicate> for FunctionDocument {
    fn from(predicate: &Predicate) -> Self {
        Self {
            function: predicate.field.clone(),
            symbol: predicate.operator.as_str().to_string(),
            constant: predicate.value.clone(),
        }
    }
}

/// JSON shape of a parse result. Every key except `Output` is left out for
/// queries without a WHERE clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryDocument {
    pub output: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subfunctions: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<FunctionDocument>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub j_types: Option<Vec<String>>,
}

impl From<&ParsedQuery> for QueryDocument {
    fn from(query: &ParsedQuery) -> Self {
        match query {
            ParsedQuery::SelectOnly { output } => Self {
                output: output.clone(),
                table_name: None,
                function: None,
                subfunctions: None,
                functions: None,
                j_types: None,
            },
            ParsedQuery::SelectWithFilter(filter) => Self {
                output: filter.output.clone(),
                table_name: Some(filter.table_name.clone()),
                function: Some(filter.raw_condition.clone()),
                subfunctions: Some(filter.predicates.len()),
                functions: Some(filter.predicates.iter().map(FunctionDocument::from).collect()),
                j_types: Some(filter.join_operators.iter().map(|j| j.as_str().to_string()).collect()),
            },
        }
    }
}

impl QueryDocument {
    pub fn to_writer<W: Write>(&self, writer: W, layout: JsonLayout) -> serde_json::Result<()> {
        match layout {
            JsonLayout::Compact => serde_json::to_writer(writer, self),
            JsonLayout::Pretty => {
                let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
                let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
                self.serialize(&mut serializer)
            },
        }
    }

    pub fn to_json(&self, layout: JsonLayout) -> serde_json::Result<String> {
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer, layout)?;
        // serde_json only emits UTF-8
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
