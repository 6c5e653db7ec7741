use std::path::{Path, PathBuf};

/// Where and how delimited table files are read.
///
/// - `data_dir` is the directory holding one file per table.
/// - `extension` is appended to the table name (`student` -> `student.csv`).
/// - `delimiter` separates fields within a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub extension: String,
    pub delimiter: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self { data_dir: PathBuf::from("."), extension: "csv".to_string(), delimiter: b',' }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Comma separated `.csv` files under `data_dir`.
    pub fn from(data_dir: impl AsRef<Path>) -> Self {
        Self { data_dir: data_dir.as_ref().to_path_buf(), ..Self::default() }
    }

    /// Tab separated `.tsv` files under `data_dir`.
    pub fn tsv(data_dir: impl AsRef<Path>) -> Self {
        Self::from(data_dir).with_extension("tsv").with_delimiter(b'\t')
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self { self.delimiter = delimiter; self }

    pub fn with_extension(mut self, extension: &str) -> Self { self.extension = extension.to_string(); self }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.data_dir.join(format!("{table}.{}", self.extension))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::Config;

    #[test]
    fn default_reads_csv_from_current_dir() {
        let config = Config::new();
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.table_path("student"), PathBuf::from("./student.csv"));
    }

    #[test]
    fn tsv_config() {
        let config = Config::tsv("/data");
        assert_eq!(config.delimiter, b'\t');
        assert_eq!(config.table_path("grades"), PathBuf::from("/data/grades.tsv"));
    }
}
