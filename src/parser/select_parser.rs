use crate::parser::{ast::QueryDescription, ParseError};

/// Turns statement text into a [`QueryDescription`].
pub trait QueryParse {
    fn parse_query(&self, sql: &str) -> Result<QueryDescription, ParseError>;
}

/// Parser for the supported `SELECT` subset.
#[derive(Debug, Default, Clone, Copy)]
pub struct SelectParser;

impl QueryParse for SelectParser {
    fn parse_query(&self, sql: &str) -> Result<QueryDescription, ParseError> {
        QueryDescription::try_from(sql)
    }
}
