use thiserror::Error;

use crate::{database::StorageError, parser::ParseError};

/// Failure raised by any stage of a query. None of them is recoverable.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A WHERE clause names a field the row does not have.
    #[error("Invalid field: {field}")]
    Field { field: String },

    #[error("Unsupported operator: {0}")]
    UnsupportedOperator(String),

    #[error("Unsupported JOIN type: {0}")]
    UnsupportedJoinType(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Syntax(#[from] ParseError),
}

/// The single error surfaced by the entry point.
#[derive(Error, Debug)]
#[error("Error executing query: {cause}")]
pub struct QueryError {
    #[source]
    pub cause: EngineError,
}

impl QueryError {
    pub fn cause(&self) -> &EngineError { &self.cause }
}

impl From<EngineError> for QueryError {
    fn from(cause: EngineError) -> Self { Self { cause } }
}
