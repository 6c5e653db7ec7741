use std::future::Future;

use thiserror::Error;

use crate::executor::Table;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Table not found: {0}")]
    NotFound(String),

    #[error("Could not read table {table}: {source}")]
    Io { table: String, #[source] source: std::io::Error },

    #[error("Could not parse table {table}: {source}")]
    Csv { table: String, #[source] source: csv::Error },
}

/// Hands out a table's rows by name. Reads must not change the source.
pub trait TableSource {
    fn read_table(&self, name: &str) -> impl Future<Output = Result<Table, StorageError>> + Send;
}
