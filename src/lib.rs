pub mod parser;

pub mod database;
pub use database::{Config, CsvTableSource, MemoryTableSource, StorageError, TableSource};

pub mod executor;
pub use executor::{execute_query, EngineError, FieldValue, QueryEngine, QueryError, Record, Table};
