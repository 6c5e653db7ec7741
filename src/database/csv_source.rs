use std::io::ErrorKind;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::{
    database::{Config, StorageError, TableSource},
    executor::{FieldValue, Record, Table},
};

/// Reads `<data_dir>/<table>.<extension>`; the first line names the fields.
#[derive(Debug, Clone, Default)]
pub struct CsvTableSource {
    config: Config,
}

impl CsvTableSource {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parses delimited text into rows. Every value is kept as text; short
    /// lines get empty text for their missing trailing fields.
    pub fn parse(&self, table: &str, content: &[u8]) -> Result<Table, StorageError> {
        let to_storage = |source: csv::Error| StorageError::Csv { table: table.to_string(), source };

        let mut reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(content);
        let headers = reader.headers().map_err(to_storage)?.clone();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(to_storage)?;
            rows.push(Self::build_record(&headers, &record));
        }
        Ok(rows)
    }

    fn build_record(headers: &StringRecord, record: &StringRecord) -> Record {
        headers
            .iter()
            .enumerate()
            .map(|(i, name)| (name, FieldValue::text(record.get(i).unwrap_or(""))))
            .collect()
    }
}

impl TableSource for CsvTableSource {
    async fn read_table(&self, name: &str) -> Result<Table, StorageError> {
        let path = self.config.table_path(name);
        let content = tokio::fs::read(&path).await.map_err(|source| match source.kind() {
            ErrorKind::NotFound => StorageError::NotFound(path.display().to_string()),
            _ => StorageError::Io { table: name.to_string(), source },
        })?;

        let rows = self.parse(name, &content)?;
        debug!(table = name, path = %path.display(), rows = rows.len(), "storage.csv.table_loaded");
        Ok(rows)
    }
}
